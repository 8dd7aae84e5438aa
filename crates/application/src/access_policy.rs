use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;
use wattgrant_core::{AppError, AppResult};
use wattgrant_domain::{Permission, Role};

/// Immutable role → permission-set table backing coarse-grained checks.
///
/// Constructed once at startup, either in code or from deployment
/// configuration, and injected into the resolver; never mutated
/// afterwards. A role without an entry behaves as holding the empty set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RolePermissionTable {
    grants: HashMap<Role, Vec<Permission>>,
}

impl RolePermissionTable {
    /// Builds the production table.
    ///
    /// `system_admin` holds the full permission universe, a strict
    /// superset of every other entry. `contractor_team_member` holds the
    /// empty set: its access is granted per application, not per role.
    #[must_use]
    pub fn production() -> Self {
        Self::from_entries([
            (Role::SystemAdmin, Permission::all().to_vec()),
            (
                Role::CompanyAdmin,
                vec![
                    Permission::ManageCompany,
                    Permission::InviteTeamMembers,
                    Permission::ViewApplications,
                    Permission::CreateApplications,
                    Permission::SubmitApplications,
                    Permission::DeleteApplications,
                    Permission::UploadDocuments,
                    Permission::ManageContractors,
                    Permission::AssignContractors,
                ],
            ),
            (
                Role::TeamMember,
                vec![
                    Permission::ViewApplications,
                    Permission::CreateApplications,
                    Permission::SubmitApplications,
                    Permission::UploadDocuments,
                ],
            ),
            (
                Role::ContractorIndividual,
                vec![Permission::ViewApplications, Permission::UploadDocuments],
            ),
            (
                Role::ContractorAccountOwner,
                vec![Permission::ViewApplications, Permission::UploadDocuments],
            ),
            (
                Role::ContractorManager,
                vec![Permission::ViewApplications, Permission::UploadDocuments],
            ),
            (Role::ContractorTeamMember, vec![]),
        ])
    }

    /// Builds a table from explicit entries.
    #[must_use]
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Role, Vec<Permission>)>,
    {
        Self {
            grants: entries.into_iter().collect(),
        }
    }

    /// Parses a table from a JSON configuration document.
    pub fn from_json(raw: &str) -> AppResult<Self> {
        let table: Self = serde_json::from_str(raw).map_err(|error| {
            AppError::Validation(format!("invalid role permission table: {error}"))
        })?;
        debug!(
            roles = table.grants.len(),
            "loaded role permission table from configuration"
        );
        Ok(table)
    }

    /// Returns whether the role's entry lists the permission.
    ///
    /// A missing entry is the empty set.
    #[must_use]
    pub fn grants(&self, role: Role, permission: Permission) -> bool {
        self.grants
            .get(&role)
            .map(|permissions| permissions.contains(&permission))
            .unwrap_or(false)
    }

    /// Returns the permissions granted to a role.
    #[must_use]
    pub fn permissions_for(&self, role: Role) -> &[Permission] {
        self.grants
            .get(&role)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Ensures every recognized role has an entry.
    ///
    /// Deployment configuration is validated with this at startup so a
    /// partial table is rejected before it silently denies a role
    /// everything.
    pub fn ensure_total(&self) -> AppResult<()> {
        let mut missing: Vec<&str> = Role::all()
            .iter()
            .filter(|role| !self.grants.contains_key(role))
            .map(Role::as_str)
            .collect();

        if missing.is_empty() {
            return Ok(());
        }

        missing.sort_unstable();
        Err(AppError::Validation(format!(
            "role permission table is missing entries for: {}",
            missing.join(", ")
        )))
    }
}

impl Default for RolePermissionTable {
    fn default() -> Self {
        Self::production()
    }
}
