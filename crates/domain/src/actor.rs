use serde::{Deserialize, Serialize};
use wattgrant_core::{CompanyId, UserId};

use crate::{PermissionLevel, Role};

/// The authenticated user a permission check is evaluated for.
///
/// Mirrors the `currentUser` object supplied by the session provider. The
/// resolver treats an actor as an immutable snapshot for the duration of a
/// single decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    id: UserId,
    role: Role,
    #[serde(default)]
    permission_level: Option<PermissionLevel>,
    company_id: CompanyId,
}

impl Actor {
    /// Creates an actor from session data.
    #[must_use]
    pub fn new(
        id: UserId,
        role: Role,
        permission_level: Option<PermissionLevel>,
        company_id: CompanyId,
    ) -> Self {
        Self {
            id,
            role,
            permission_level,
            company_id,
        }
    }

    /// Returns the actor's user identifier.
    #[must_use]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the actor's role.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the graded permission level, if one is set.
    ///
    /// Meaningful only for [`Role::TeamMember`] actors; the resolver
    /// ignores it for every other role.
    #[must_use]
    pub fn permission_level(&self) -> Option<PermissionLevel> {
        self.permission_level
    }

    /// Returns the owning company.
    #[must_use]
    pub fn company_id(&self) -> &CompanyId {
        &self.company_id
    }
}
