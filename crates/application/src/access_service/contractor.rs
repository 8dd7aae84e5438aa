use tracing::trace;
use wattgrant_domain::{ApplicationContext, AssignmentCapability};

use super::*;

impl AccessControlService {
    /// Resolves a per-application capability for contractor-side actors.
    ///
    /// `system_admin` is allowed regardless of context, including a
    /// missing one. With an application present, account owners,
    /// individuals and managers get `view` and `edit` and nothing else:
    /// submission authority is never delegated through this check, even
    /// when an assignment entry lists it, so the privileged branch
    /// short-circuits before the assignment list is consulted. Contractor
    /// team members get exactly the capabilities of their matching
    /// assignment entry. Every other combination is a deny; coarse
    /// company-side checks belong to [`Self::has_permission`] and
    /// [`Self::has_permission_level`].
    #[must_use]
    pub fn has_contractor_permission(
        &self,
        actor: Option<&Actor>,
        capability: AssignmentCapability,
        application: Option<&ApplicationContext>,
    ) -> bool {
        let Some(actor) = actor else {
            return false;
        };

        if actor.role() == Role::SystemAdmin {
            return true;
        }

        let Some(application) = application else {
            return false;
        };

        match actor.role() {
            Role::ContractorAccountOwner | Role::ContractorIndividual | Role::ContractorManager => {
                matches!(
                    capability,
                    AssignmentCapability::View | AssignmentCapability::Edit
                )
            }
            Role::ContractorTeamMember => match application.assignment_for(actor.id()) {
                Some(assignment) => assignment.grants(capability),
                None => {
                    trace!(
                        actor = %actor.id(),
                        application = %application.id,
                        "no assignment entry for contractor team member"
                    );
                    false
                }
            },
            // Company-side roles go through the coarse checks instead;
            // system_admin was handled above.
            Role::SystemAdmin | Role::CompanyAdmin | Role::TeamMember => false,
        }
    }

    /// Returns a [`Forbidden`](AppError::Forbidden) error when the
    /// contractor-side check denies the capability.
    pub fn require_contractor_permission(
        &self,
        actor: Option<&Actor>,
        capability: AssignmentCapability,
        application: Option<&ApplicationContext>,
    ) -> AppResult<()> {
        if self.has_contractor_permission(actor, capability, application) {
            return Ok(());
        }

        Err(AppError::Forbidden(format!(
            "'{}' access to the application was denied",
            capability.as_str()
        )))
    }

    /// Returns whether the actor may manage the contractor team roster.
    #[must_use]
    pub fn can_manage_contractor_team(&self, actor: Option<&Actor>) -> bool {
        actor
            .map(|actor| {
                matches!(
                    actor.role(),
                    Role::ContractorAccountOwner
                        | Role::ContractorIndividual
                        | Role::ContractorManager
                )
            })
            .unwrap_or(false)
    }

    /// Returns whether the actor may edit other users' per-application
    /// capability grants.
    ///
    /// Same role set as [`Self::can_manage_contractor_team`] today; kept
    /// as its own predicate because it gates a different portal action.
    #[must_use]
    pub fn can_edit_application_permissions(&self, actor: Option<&Actor>) -> bool {
        actor
            .map(|actor| {
                matches!(
                    actor.role(),
                    Role::ContractorAccountOwner
                        | Role::ContractorIndividual
                        | Role::ContractorManager
                )
            })
            .unwrap_or(false)
    }
}
