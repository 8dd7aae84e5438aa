use std::str::FromStr;

use serde::{Deserialize, Serialize};
use wattgrant_core::AppError;

/// System-wide capability tags enforced by the access-control resolver.
///
/// Permissions are atomic: a role's permission set either lists a tag or
/// it does not, and no tag implies another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Allows editing company profile and settings.
    ManageCompany,
    /// Allows inviting company team members.
    InviteTeamMembers,
    /// Allows viewing the company's applications.
    ViewApplications,
    /// Allows creating and editing draft applications.
    CreateApplications,
    /// Allows submitting applications for review.
    SubmitApplications,
    /// Allows deleting and bulk-deleting applications.
    DeleteApplications,
    /// Allows uploading supporting documents.
    UploadDocuments,
    /// Allows managing the contractor roster.
    ManageContractors,
    /// Allows assigning contractors to approved projects.
    AssignContractors,
    /// Allows reviewing submitted applications.
    ReviewApplications,
    /// Allows configuring activity templates and program settings.
    ManageActivityTemplates,
    /// Marks unrestricted program-administrator access.
    SystemAdmin,
}

impl Permission {
    /// Returns a stable storage value for this permission.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ManageCompany => "manage_company",
            Self::InviteTeamMembers => "invite_team_members",
            Self::ViewApplications => "view_applications",
            Self::CreateApplications => "create_applications",
            Self::SubmitApplications => "submit_applications",
            Self::DeleteApplications => "delete_applications",
            Self::UploadDocuments => "upload_documents",
            Self::ManageContractors => "manage_contractors",
            Self::AssignContractors => "assign_contractors",
            Self::ReviewApplications => "review_applications",
            Self::ManageActivityTemplates => "manage_activity_templates",
            Self::SystemAdmin => "system_admin",
        }
    }

    /// Returns the full permission universe.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Permission] = &[
            Permission::ManageCompany,
            Permission::InviteTeamMembers,
            Permission::ViewApplications,
            Permission::CreateApplications,
            Permission::SubmitApplications,
            Permission::DeleteApplications,
            Permission::UploadDocuments,
            Permission::ManageContractors,
            Permission::AssignContractors,
            Permission::ReviewApplications,
            Permission::ManageActivityTemplates,
            Permission::SystemAdmin,
        ];

        ALL
    }
}

impl FromStr for Permission {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "manage_company" => Ok(Self::ManageCompany),
            "invite_team_members" => Ok(Self::InviteTeamMembers),
            "view_applications" => Ok(Self::ViewApplications),
            "create_applications" => Ok(Self::CreateApplications),
            "submit_applications" => Ok(Self::SubmitApplications),
            "delete_applications" => Ok(Self::DeleteApplications),
            "upload_documents" => Ok(Self::UploadDocuments),
            "manage_contractors" => Ok(Self::ManageContractors),
            "assign_contractors" => Ok(Self::AssignContractors),
            "review_applications" => Ok(Self::ReviewApplications),
            "manage_activity_templates" => Ok(Self::ManageActivityTemplates),
            "system_admin" => Ok(Self::SystemAdmin),
            _ => Err(AppError::Validation(format!(
                "unknown permission value '{value}'"
            ))),
        }
    }
}

/// Per-application capability granted to a contractor team member.
///
/// A deliberately separate vocabulary from [`Permission`]: assignment
/// capabilities are scoped to one application and grant exactly what they
/// list (`edit` does not imply `view`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentCapability {
    /// May open the assigned application.
    View,
    /// May edit the assigned application.
    Edit,
    /// May submit the assigned application.
    Submit,
}

impl AssignmentCapability {
    /// Returns the wire value used in assignment lists.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Edit => "edit",
            Self::Submit => "submit",
        }
    }

    /// Returns all assignment capabilities.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[AssignmentCapability] = &[
            AssignmentCapability::View,
            AssignmentCapability::Edit,
            AssignmentCapability::Submit,
        ];

        ALL
    }
}

impl FromStr for AssignmentCapability {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "view" => Ok(Self::View),
            "edit" => Ok(Self::Edit),
            "submit" => Ok(Self::Submit),
            _ => Err(AppError::Validation(format!(
                "unknown assignment capability '{value}'"
            ))),
        }
    }
}

/// Page sets the portal router can mount for an actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortalSurface {
    /// Application list and detail pages.
    Applications,
    /// Supporting document library.
    Documents,
    /// Company team roster and invite dialogs.
    Team,
    /// Contractor roster and assignment pages.
    Contractors,
    /// Program-side review queue.
    Review,
    /// Activity template and program configuration pages.
    ProgramSettings,
}

impl PortalSurface {
    /// Returns all portal surfaces.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[PortalSurface] = &[
            PortalSurface::Applications,
            PortalSurface::Documents,
            PortalSurface::Team,
            PortalSurface::Contractors,
            PortalSurface::Review,
            PortalSurface::ProgramSettings,
        ];

        ALL
    }

    /// Returns the permissions that unlock this surface.
    ///
    /// Holding any one of them is sufficient.
    #[must_use]
    pub fn required_permissions(&self) -> &'static [Permission] {
        match self {
            Self::Applications => &[Permission::ViewApplications, Permission::CreateApplications],
            Self::Documents => &[Permission::UploadDocuments],
            Self::Team => &[Permission::ManageCompany, Permission::InviteTeamMembers],
            Self::Contractors => &[Permission::ManageContractors, Permission::AssignContractors],
            Self::Review => &[Permission::ReviewApplications],
            Self::ProgramSettings => &[
                Permission::ManageActivityTemplates,
                Permission::SystemAdmin,
            ],
        }
    }
}
