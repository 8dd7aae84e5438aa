use super::*;

impl AccessControlService {
    /// Returns whether the actor may invite company team members.
    #[must_use]
    pub fn can_invite_users(&self, actor: Option<&Actor>) -> bool {
        is_company_admin(actor) || self.has_permission_level(actor, PermissionLevel::Manager)
    }

    /// Returns whether the actor may edit team members' permission levels.
    ///
    /// Same rule as [`Self::can_invite_users`]: both actions live in the
    /// team management dialogs and share one gate.
    #[must_use]
    pub fn can_edit_permissions(&self, actor: Option<&Actor>) -> bool {
        is_company_admin(actor) || self.has_permission_level(actor, PermissionLevel::Manager)
    }

    /// Returns whether the actor may create and edit applications and
    /// documents.
    #[must_use]
    pub fn can_create_edit(&self, actor: Option<&Actor>) -> bool {
        is_company_admin(actor) || self.has_permission_level(actor, PermissionLevel::Editor)
    }

    /// Returns whether the actor has at least read access to company data.
    ///
    /// Editor and manager levels satisfy the viewer requirement, so this
    /// holds for any company-side actor with a level.
    #[must_use]
    pub fn can_view_only(&self, actor: Option<&Actor>) -> bool {
        self.has_permission_level(actor, PermissionLevel::Viewer)
    }
}

fn is_company_admin(actor: Option<&Actor>) -> bool {
    actor
        .map(|actor| actor.role() == Role::CompanyAdmin)
        .unwrap_or(false)
}
