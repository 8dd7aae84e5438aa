use std::str::FromStr;

use serde::{Deserialize, Serialize};
use wattgrant_core::AppError;

/// Coarse classification of an authenticated actor.
///
/// Every actor holds exactly one role at a time. Contractor-side roles are
/// resolved against per-application assignment grants rather than the
/// role permission table; see the access-control service for the split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Program administrator with unrestricted access.
    SystemAdmin,
    /// Company account owner; manages the company, its team, and its
    /// applications.
    CompanyAdmin,
    /// Company staff member whose access is graded by [`PermissionLevel`].
    TeamMember,
    /// Contractor operating a single-person account.
    ContractorIndividual,
    /// Owner of a contractor company account.
    ContractorAccountOwner,
    /// Manager on a contractor company account.
    ContractorManager,
    /// Contractor staff member; access is granted per assigned application.
    ContractorTeamMember,
}

impl Role {
    /// Returns a stable storage value for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SystemAdmin => "system_admin",
            Self::CompanyAdmin => "company_admin",
            Self::TeamMember => "team_member",
            Self::ContractorIndividual => "contractor_individual",
            Self::ContractorAccountOwner => "contractor_account_owner",
            Self::ContractorManager => "contractor_manager",
            Self::ContractorTeamMember => "contractor_team_member",
        }
    }

    /// Returns all recognized roles.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Role] = &[
            Role::SystemAdmin,
            Role::CompanyAdmin,
            Role::TeamMember,
            Role::ContractorIndividual,
            Role::ContractorAccountOwner,
            Role::ContractorManager,
            Role::ContractorTeamMember,
        ];

        ALL
    }

    /// Returns whether this is a contractor-side role.
    #[must_use]
    pub fn is_contractor(&self) -> bool {
        matches!(
            self,
            Self::ContractorIndividual
                | Self::ContractorAccountOwner
                | Self::ContractorManager
                | Self::ContractorTeamMember
        )
    }

    /// Returns display metadata for portal chrome.
    ///
    /// Exhaustive over the closed role set; there is no fallback entry for
    /// unrecognized roles, those fail at the parse boundary instead.
    #[must_use]
    pub fn info(&self) -> RoleInfo {
        match self {
            Self::SystemAdmin => RoleInfo {
                label: "Program administrator",
                description: "Full access to every company, application, and program setting.",
            },
            Self::CompanyAdmin => RoleInfo {
                label: "Company administrator",
                description: "Manages the company account, its team, and its applications.",
            },
            Self::TeamMember => RoleInfo {
                label: "Team member",
                description: "Company staff member; access is graded by permission level.",
            },
            Self::ContractorIndividual => RoleInfo {
                label: "Independent contractor",
                description: "Runs a single-person contractor account.",
            },
            Self::ContractorAccountOwner => RoleInfo {
                label: "Contractor account owner",
                description: "Owns the contractor account and manages its team.",
            },
            Self::ContractorManager => RoleInfo {
                label: "Contractor manager",
                description: "Manages the contractor team and assigned projects.",
            },
            Self::ContractorTeamMember => RoleInfo {
                label: "Contractor team member",
                description: "Works only on applications they are assigned to.",
            },
        }
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "system_admin" => Ok(Self::SystemAdmin),
            "company_admin" => Ok(Self::CompanyAdmin),
            "team_member" => Ok(Self::TeamMember),
            "contractor_individual" => Ok(Self::ContractorIndividual),
            "contractor_account_owner" => Ok(Self::ContractorAccountOwner),
            "contractor_manager" => Ok(Self::ContractorManager),
            "contractor_team_member" => Ok(Self::ContractorTeamMember),
            _ => Err(AppError::Validation(format!("unknown role value '{value}'"))),
        }
    }
}

/// Display metadata for one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleInfo {
    /// Short human-readable role name.
    pub label: &'static str,
    /// One-sentence summary shown in team rosters and invite dialogs.
    pub description: &'static str,
}

/// Graded access tier for company team members.
///
/// Levels are cumulative: a higher level satisfies every check a lower
/// level satisfies. The tier is meaningful only for [`Role::TeamMember`]
/// actors; every other role ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionLevel {
    /// Read-only access to company data.
    Viewer,
    /// May create and edit applications and documents.
    Editor,
    /// May additionally manage the team and its permissions.
    Manager,
}

impl PermissionLevel {
    /// Returns a stable storage value for this level.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Viewer => "viewer",
            Self::Editor => "editor",
            Self::Manager => "manager",
        }
    }

    /// Returns all levels, lowest first.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[PermissionLevel] = &[
            PermissionLevel::Viewer,
            PermissionLevel::Editor,
            PermissionLevel::Manager,
        ];

        ALL
    }

    /// Returns whether this level meets a required level.
    #[must_use]
    pub fn satisfies(&self, required: Self) -> bool {
        *self >= required
    }
}

impl FromStr for PermissionLevel {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "viewer" => Ok(Self::Viewer),
            "editor" => Ok(Self::Editor),
            "manager" => Ok(Self::Manager),
            _ => Err(AppError::Validation(format!(
                "unknown permission level '{value}'"
            ))),
        }
    }
}
