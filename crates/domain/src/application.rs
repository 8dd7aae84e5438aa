use serde::{Deserialize, Serialize};
use wattgrant_core::{ApplicationId, CompanyId, UserId};

use crate::AssignmentCapability;

/// Per-application capability grant for one contractor team member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationAssignment {
    /// User the grant applies to.
    #[serde(rename = "id")]
    pub user_id: UserId,
    /// Capabilities granted for this application only. Nothing beyond the
    /// list is implied.
    #[serde(rename = "permissions", default)]
    pub capabilities: Vec<AssignmentCapability>,
}

impl ApplicationAssignment {
    /// Returns whether the grant lists the capability.
    #[must_use]
    pub fn grants(&self, capability: AssignmentCapability) -> bool {
        self.capabilities.contains(&capability)
    }
}

/// Application data a contractor-side permission check is evaluated
/// against.
///
/// Fetched per-request from the portal API; the resolver never caches or
/// mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationContext {
    /// Application identifier.
    pub id: ApplicationId,
    /// Company that owns the application.
    pub company_id: CompanyId,
    /// Explicit per-user capability grants, in assignment order.
    #[serde(rename = "assignedToUsers", default)]
    pub assigned_users: Vec<ApplicationAssignment>,
}

impl ApplicationContext {
    /// Returns the first assignment entry for the user, if any.
    #[must_use]
    pub fn assignment_for(&self, user_id: &UserId) -> Option<&ApplicationAssignment> {
        self.assigned_users
            .iter()
            .find(|entry| &entry.user_id == user_id)
    }
}
