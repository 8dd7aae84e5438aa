use wattgrant_core::{ApplicationId, CompanyId, UserId};
use wattgrant_domain::{
    Actor, ApplicationAssignment, ApplicationContext, AssignmentCapability, Permission,
    PermissionLevel, PortalSurface, Role,
};

use super::AccessControlService;
use crate::RolePermissionTable;

fn service() -> AccessControlService {
    AccessControlService::new(RolePermissionTable::production())
}

fn actor(id: &str, role: Role) -> Actor {
    Actor::new(UserId::new(id), role, None, CompanyId::new("c1"))
}

fn team_member(id: &str, level: Option<PermissionLevel>) -> Actor {
    Actor::new(UserId::new(id), Role::TeamMember, level, CompanyId::new("c1"))
}

fn assignment(id: &str, capabilities: Vec<AssignmentCapability>) -> ApplicationAssignment {
    ApplicationAssignment {
        user_id: UserId::new(id),
        capabilities,
    }
}

fn application(assignments: Vec<ApplicationAssignment>) -> ApplicationContext {
    ApplicationContext {
        id: ApplicationId::new("app-1"),
        company_id: CompanyId::new("c1"),
        assigned_users: assignments,
    }
}

#[test]
fn company_admin_holds_company_permissions() {
    let service = service();
    assert!(service.has_permission(Role::CompanyAdmin, Permission::ManageCompany));
    assert!(service.has_permission(Role::CompanyAdmin, Permission::DeleteApplications));
    assert!(!service.has_permission(Role::CompanyAdmin, Permission::ReviewApplications));
    assert!(!service.has_permission(Role::CompanyAdmin, Permission::SystemAdmin));
}

#[test]
fn team_member_role_lacks_management_permissions() {
    let service = service();
    assert!(service.has_permission(Role::TeamMember, Permission::ViewApplications));
    assert!(!service.has_permission(Role::TeamMember, Permission::ManageCompany));
    assert!(!service.has_permission(Role::TeamMember, Permission::InviteTeamMembers));
}

#[test]
fn role_without_a_table_entry_is_denied_everything() {
    let table = RolePermissionTable::from_entries([(Role::SystemAdmin, Permission::all().to_vec())]);
    let service = AccessControlService::new(table);

    for permission in Permission::all() {
        assert!(!service.has_permission(Role::ContractorManager, *permission));
    }
}

#[test]
fn any_with_an_empty_list_is_denied_for_every_role() {
    let service = service();
    for role in Role::all() {
        assert!(!service.has_any_permission(*role, &[]));
    }
}

#[test]
fn all_with_an_empty_list_is_vacuously_allowed_for_every_role() {
    let service = service();
    for role in Role::all() {
        assert!(service.has_all_permissions(*role, &[]));
    }
}

#[test]
fn all_with_an_empty_list_holds_even_without_a_table_entry() {
    let service = AccessControlService::new(RolePermissionTable::from_entries([]));
    assert!(service.has_all_permissions(Role::TeamMember, &[]));
}

#[test]
fn any_requires_one_grant_and_all_requires_every_grant() {
    let service = service();
    let permissions = [Permission::ViewApplications, Permission::ManageCompany];

    assert!(service.has_any_permission(Role::TeamMember, &permissions));
    assert!(!service.has_all_permissions(Role::TeamMember, &permissions));
    assert!(service.has_all_permissions(Role::CompanyAdmin, &permissions));
}

#[test]
fn admin_roles_satisfy_every_level_check() {
    let service = service();
    for role in [Role::CompanyAdmin, Role::SystemAdmin] {
        let admin = actor("a1", role);
        for required in PermissionLevel::all() {
            assert!(service.has_permission_level(Some(&admin), *required));
        }
    }
}

#[test]
fn absent_actor_never_satisfies_a_level_check() {
    let service = service();
    for required in PermissionLevel::all() {
        assert!(!service.has_permission_level(None, *required));
    }
}

#[test]
fn team_member_without_a_level_defaults_to_viewer() {
    let service = service();
    let member = team_member("u1", None);

    assert!(service.has_permission_level(Some(&member), PermissionLevel::Viewer));
    assert!(!service.has_permission_level(Some(&member), PermissionLevel::Editor));
}

#[test]
fn manager_level_satisfies_the_levels_below_it() {
    let service = service();
    let manager = team_member("u1", Some(PermissionLevel::Manager));

    assert!(service.has_permission_level(Some(&manager), PermissionLevel::Manager));
    assert!(service.has_permission_level(Some(&manager), PermissionLevel::Editor));
    assert!(service.has_permission_level(Some(&manager), PermissionLevel::Viewer));
}

#[test]
fn contractor_roles_never_satisfy_level_checks() {
    let service = service();
    for role in Role::all().iter().filter(|role| role.is_contractor()) {
        let contractor = actor("u1", *role);
        assert!(!service.has_permission_level(Some(&contractor), PermissionLevel::Viewer));
    }
}

#[test]
fn system_admin_passes_contractor_checks_without_context() {
    let service = service();
    let admin = actor("a1", Role::SystemAdmin);

    for capability in AssignmentCapability::all() {
        assert!(service.has_contractor_permission(Some(&admin), *capability, None));
    }
}

#[test]
fn absent_actor_is_denied_contractor_checks() {
    let service = service();
    let context = application(vec![]);
    assert!(!service.has_contractor_permission(None, AssignmentCapability::View, Some(&context)));
}

#[test]
fn privileged_contractor_roles_get_view_and_edit_only() {
    let service = service();
    let context = application(vec![]);

    for role in [
        Role::ContractorAccountOwner,
        Role::ContractorIndividual,
        Role::ContractorManager,
    ] {
        let contractor = actor("u1", role);
        assert!(service.has_contractor_permission(
            Some(&contractor),
            AssignmentCapability::View,
            Some(&context)
        ));
        assert!(service.has_contractor_permission(
            Some(&contractor),
            AssignmentCapability::Edit,
            Some(&context)
        ));
        assert!(!service.has_contractor_permission(
            Some(&contractor),
            AssignmentCapability::Submit,
            Some(&context)
        ));
    }
}

#[test]
fn privileged_branch_short_circuits_before_the_assignment_list() {
    let service = service();
    let owner = actor("u1", Role::ContractorAccountOwner);
    let context = application(vec![assignment("u1", vec![AssignmentCapability::Submit])]);

    assert!(!service.has_contractor_permission(
        Some(&owner),
        AssignmentCapability::Submit,
        Some(&context)
    ));
}

#[test]
fn manager_branch_ignores_a_narrower_assignment_entry() {
    let service = service();
    let manager = actor("u2", Role::ContractorManager);
    let context = application(vec![assignment("u2", vec![AssignmentCapability::View])]);

    assert!(service.has_contractor_permission(
        Some(&manager),
        AssignmentCapability::Edit,
        Some(&context)
    ));
}

#[test]
fn contractor_checks_require_an_application_context() {
    let service = service();
    let owner = actor("u1", Role::ContractorAccountOwner);
    assert!(!service.has_contractor_permission(Some(&owner), AssignmentCapability::View, None));
}

#[test]
fn non_contractor_roles_are_denied_contractor_checks() {
    let service = service();
    let context = application(vec![assignment("u1", vec![AssignmentCapability::View])]);

    for role in [Role::CompanyAdmin, Role::TeamMember] {
        let company_actor = actor("u1", role);
        assert!(!service.has_contractor_permission(
            Some(&company_actor),
            AssignmentCapability::View,
            Some(&context)
        ));
    }
}

#[test]
fn contractor_team_member_grants_follow_the_assignment_list_exactly() {
    let service = service();
    let member = actor("u1", Role::ContractorTeamMember);
    let context = application(vec![assignment("u1", vec![AssignmentCapability::Edit])]);

    assert!(service.has_contractor_permission(
        Some(&member),
        AssignmentCapability::Edit,
        Some(&context)
    ));
    // "edit" does not imply "view"; only listed capabilities are granted.
    assert!(!service.has_contractor_permission(
        Some(&member),
        AssignmentCapability::View,
        Some(&context)
    ));
}

#[test]
fn unlisted_contractor_team_member_is_denied() {
    let service = service();
    let member = actor("u3", Role::ContractorTeamMember);
    let context = application(vec![assignment(
        "u4",
        vec![AssignmentCapability::View, AssignmentCapability::Edit],
    )]);

    assert!(!service.has_contractor_permission(
        Some(&member),
        AssignmentCapability::View,
        Some(&context)
    ));
}

#[test]
fn editor_team_member_can_edit_but_not_invite() {
    let service = service();
    let editor = team_member("u1", Some(PermissionLevel::Editor));

    assert!(service.can_create_edit(Some(&editor)));
    assert!(!service.can_invite_users(Some(&editor)));
    assert!(!service.has_permission_level(Some(&editor), PermissionLevel::Manager));
}

#[test]
fn company_admin_passes_every_company_predicate() {
    let service = service();
    let admin = actor("a1", Role::CompanyAdmin);

    assert!(service.can_invite_users(Some(&admin)));
    assert!(service.can_edit_permissions(Some(&admin)));
    assert!(service.can_create_edit(Some(&admin)));
    assert!(service.can_view_only(Some(&admin)));
}

#[test]
fn manager_team_member_may_invite_and_edit_permissions() {
    let service = service();
    let manager = team_member("u1", Some(PermissionLevel::Manager));

    assert!(service.can_invite_users(Some(&manager)));
    assert!(service.can_edit_permissions(Some(&manager)));
    assert!(service.can_create_edit(Some(&manager)));
}

#[test]
fn predicates_deny_an_absent_actor() {
    let service = service();
    assert!(!service.can_invite_users(None));
    assert!(!service.can_edit_permissions(None));
    assert!(!service.can_create_edit(None));
    assert!(!service.can_view_only(None));
    assert!(!service.can_manage_contractor_team(None));
    assert!(!service.can_edit_application_permissions(None));
}

#[test]
fn viewer_team_member_is_view_only() {
    let service = service();
    let viewer = team_member("u1", Some(PermissionLevel::Viewer));

    assert!(service.can_view_only(Some(&viewer)));
    assert!(!service.can_create_edit(Some(&viewer)));
}

#[test]
fn contractor_team_predicates_cover_the_privileged_roles() {
    let service = service();

    for role in [
        Role::ContractorAccountOwner,
        Role::ContractorIndividual,
        Role::ContractorManager,
    ] {
        let contractor = actor("u1", role);
        assert!(service.can_manage_contractor_team(Some(&contractor)));
        assert!(service.can_edit_application_permissions(Some(&contractor)));
    }

    let member = actor("u1", Role::ContractorTeamMember);
    assert!(!service.can_manage_contractor_team(Some(&member)));
    assert!(!service.can_edit_application_permissions(Some(&member)));

    let company = actor("u1", Role::CompanyAdmin);
    assert!(!service.can_manage_contractor_team(Some(&company)));
}

#[test]
fn require_permission_maps_a_deny_to_forbidden() {
    let service = service();

    assert!(
        service
            .require_permission(Role::CompanyAdmin, Permission::ManageCompany)
            .is_ok()
    );

    let denied = service.require_permission(Role::TeamMember, Permission::ManageCompany);
    assert!(denied.is_err());
    let message = denied.map_or_else(|error| error.to_string(), |()| String::new());
    assert!(message.contains("team_member"));
    assert!(message.contains("manage_company"));
}

#[test]
fn require_contractor_permission_maps_a_deny_to_forbidden() {
    let service = service();
    let member = actor("u1", Role::ContractorTeamMember);
    let context = application(vec![]);

    let denied = service.require_contractor_permission(
        Some(&member),
        AssignmentCapability::Edit,
        Some(&context),
    );
    assert!(denied.is_err());
}

#[test]
fn system_admin_reaches_every_surface() {
    let service = service();
    let admin = actor("a1", Role::SystemAdmin);

    assert_eq!(
        service.accessible_surfaces(&admin),
        PortalSurface::all().to_vec()
    );
}

#[test]
fn contractor_team_member_reaches_no_surface() {
    let service = service();
    let member = actor("u1", Role::ContractorTeamMember);
    assert!(service.accessible_surfaces(&member).is_empty());
}

#[test]
fn company_admin_does_not_reach_program_side_surfaces() {
    let service = service();
    let admin = actor("a1", Role::CompanyAdmin);
    let surfaces = service.accessible_surfaces(&admin);

    assert!(surfaces.contains(&PortalSurface::Applications));
    assert!(surfaces.contains(&PortalSurface::Team));
    assert!(surfaces.contains(&PortalSurface::Contractors));
    assert!(!surfaces.contains(&PortalSurface::Review));
    assert!(!surfaces.contains(&PortalSurface::ProgramSettings));
}

#[test]
fn team_member_reaches_application_and_document_surfaces_only() {
    let service = service();
    let member = team_member("u1", Some(PermissionLevel::Editor));

    assert_eq!(
        service.accessible_surfaces(&member),
        vec![PortalSurface::Applications, PortalSurface::Documents]
    );
}
