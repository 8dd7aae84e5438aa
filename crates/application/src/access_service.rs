use wattgrant_core::{AppError, AppResult};
use wattgrant_domain::{Actor, Permission, PermissionLevel, Role};

use crate::RolePermissionTable;

mod contractor;
mod predicates;
mod surfaces;

#[cfg(test)]
mod tests;

/// Synchronous, side-effect-free permission resolver for portal UI checks.
///
/// Every operation is a total function over its inputs: a missing actor,
/// a role without a table entry, and an unmatched assignment lookup all
/// resolve to deny rather than an error. The resolver gates client-side
/// affordances only; authoritative enforcement lives in the API server.
#[derive(Debug, Clone, Default)]
pub struct AccessControlService {
    table: RolePermissionTable,
}

impl AccessControlService {
    /// Creates a resolver over an immutable role permission table.
    #[must_use]
    pub fn new(table: RolePermissionTable) -> Self {
        Self { table }
    }

    /// Returns the table the resolver was built with.
    #[must_use]
    pub fn table(&self) -> &RolePermissionTable {
        &self.table
    }

    /// Returns whether the role's permission set lists the permission.
    #[must_use]
    pub fn has_permission(&self, role: Role, permission: Permission) -> bool {
        self.table.grants(role, permission)
    }

    /// Returns whether the role holds at least one of the permissions.
    ///
    /// An empty list is a deny.
    #[must_use]
    pub fn has_any_permission(&self, role: Role, permissions: &[Permission]) -> bool {
        permissions
            .iter()
            .any(|permission| self.has_permission(role, *permission))
    }

    /// Returns whether the role holds every listed permission.
    ///
    /// An empty list is vacuously allowed; call sites assemble permission
    /// lists dynamically and rely on that.
    #[must_use]
    pub fn has_all_permissions(&self, role: Role, permissions: &[Permission]) -> bool {
        permissions
            .iter()
            .all(|permission| self.has_permission(role, *permission))
    }

    /// Returns whether the actor satisfies a required permission level.
    ///
    /// `company_admin` and `system_admin` satisfy every level check
    /// outright, bypassing the permission table. Team members compare
    /// their level, defaulting to `viewer` when unset, against the
    /// requirement on the `viewer < editor < manager` scale. Contractor
    /// roles never satisfy a level check; their access model is
    /// per-application.
    #[must_use]
    pub fn has_permission_level(&self, actor: Option<&Actor>, required: PermissionLevel) -> bool {
        let Some(actor) = actor else {
            return false;
        };

        match actor.role() {
            Role::CompanyAdmin | Role::SystemAdmin => true,
            Role::TeamMember => actor
                .permission_level()
                .unwrap_or(PermissionLevel::Viewer)
                .satisfies(required),
            _ => false,
        }
    }

    /// Returns a [`Forbidden`](AppError::Forbidden) error when the role
    /// does not hold the permission.
    ///
    /// Convenience wrapper for submission guards that propagate with `?`;
    /// the underlying check is [`Self::has_permission`] and stays total.
    pub fn require_permission(&self, role: Role, permission: Permission) -> AppResult<()> {
        if self.has_permission(role, permission) {
            return Ok(());
        }

        Err(AppError::Forbidden(format!(
            "role '{}' is missing permission '{}'",
            role.as_str(),
            permission.as_str()
        )))
    }
}
