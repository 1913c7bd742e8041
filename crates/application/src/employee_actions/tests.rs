use roster_core::{AppError, UserId};
use roster_domain::{AuditAction, RoleRegistry};

use super::{
    ADD_EMPLOYEE_ERROR_BAG, AddCompanyEmployee, AddsCompanyEmployees, InviteCompanyEmployee,
    InvitesCompanyEmployees, REMOVE_EMPLOYEE_ERROR_BAG, RemoveCompanyEmployee,
    RemovesCompanyEmployees, UPDATE_ROLE_ERROR_BAG, UpdateCompanyEmployeeRole,
    UpdatesCompanyEmployeeRoles,
};
use crate::test_support::Fixture;

#[tokio::test]
async fn owner_adds_registered_user_with_role() {
    let fixture = Fixture::new().await;
    let company = fixture.snapshot().await;
    let action = AddCompanyEmployee::new(fixture.dependencies());

    let result = action
        .add(
            &fixture.owner_identity(),
            &company,
            "Nina@Example.com",
            Some("admin"),
        )
        .await;
    assert!(result.is_ok());

    let refreshed = fixture.snapshot().await;
    assert_eq!(
        refreshed.role_key_for(fixture.outsider.id).as_deref(),
        Some("admin")
    );

    let events = fixture.store.events.lock().await;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].action, AuditAction::CompanyEmployeeAdded);
}

#[tokio::test]
async fn add_reports_every_field_error_in_add_bag() {
    let fixture = Fixture::new().await;
    let company = fixture.snapshot().await;
    let action = AddCompanyEmployee::new(fixture.dependencies());

    let result = action
        .add(&fixture.owner_identity(), &company, "", Some("janitor"))
        .await;

    let Err(AppError::Invalid(messages)) = result else {
        panic!("expected validation failure");
    };
    assert_eq!(messages.bag(), ADD_EMPLOYEE_ERROR_BAG);
    assert_eq!(messages.first("email"), Some("The email field is required."));
    assert_eq!(messages.first("role"), Some("The role must be a valid role."));
}

#[tokio::test]
async fn add_rejects_unknown_and_existing_users() {
    let fixture = Fixture::new().await;
    let company = fixture.snapshot().await;
    let action = AddCompanyEmployee::new(fixture.dependencies());

    let unknown = action
        .add(
            &fixture.owner_identity(),
            &company,
            "ghost@example.com",
            Some("editor"),
        )
        .await;
    let Err(AppError::Invalid(messages)) = unknown else {
        panic!("expected validation failure");
    };
    assert_eq!(
        messages.first("email"),
        Some("We were unable to find a registered user with this email address.")
    );

    let existing = action
        .add(
            &fixture.owner_identity(),
            &company,
            "eddie@example.com",
            Some("admin"),
        )
        .await;
    let Err(AppError::Invalid(messages)) = existing else {
        panic!("expected validation failure");
    };
    assert_eq!(
        messages.first("email"),
        Some("This user already belongs to the company.")
    );
    assert!(fixture.store.events.lock().await.is_empty());
}

#[tokio::test]
async fn add_is_forbidden_for_non_owners() {
    let fixture = Fixture::new().await;
    let company = fixture.snapshot().await;
    let action = AddCompanyEmployee::new(fixture.dependencies());

    let result = action
        .add(
            &fixture.editor_identity(),
            &company,
            "nina@example.com",
            Some("editor"),
        )
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
    assert_eq!(fixture.store.memberships.lock().await.len(), 1);
}

#[tokio::test]
async fn add_ignores_role_when_no_roles_are_defined() {
    let fixture = Fixture::with_registry(RoleRegistry::empty()).await;
    let company = fixture.snapshot().await;
    let action = AddCompanyEmployee::new(fixture.dependencies());

    let result = action
        .add(&fixture.owner_identity(), &company, "nina@example.com", None)
        .await;
    assert!(result.is_ok());

    let refreshed = fixture.snapshot().await;
    assert!(refreshed.has_user(fixture.outsider.id));
    assert!(refreshed.role_key_for(fixture.outsider.id).is_none());
}

#[tokio::test]
async fn add_decides_against_freshly_loaded_company() {
    let fixture = Fixture::new().await;
    let stale = fixture.snapshot().await;
    fixture
        .store
        .memberships
        .lock()
        .await
        .push((fixture.company_id, fixture.outsider.id, None));
    let action = AddCompanyEmployee::new(fixture.dependencies());

    let result = action
        .add(
            &fixture.owner_identity(),
            &stale,
            "nina@example.com",
            Some("editor"),
        )
        .await;

    assert!(matches!(result, Err(AppError::Invalid(_))));
}

#[tokio::test]
async fn invite_records_pending_invitation() {
    let fixture = Fixture::new().await;
    let company = fixture.snapshot().await;
    let action = InviteCompanyEmployee::new(fixture.dependencies());

    let result = action
        .invite(
            &fixture.owner_identity(),
            &company,
            "stranger@example.com",
            Some("editor"),
        )
        .await;
    assert!(result.is_ok());

    let refreshed = fixture.snapshot().await;
    assert_eq!(refreshed.invitations().len(), 1);
    assert_eq!(
        refreshed.invitations()[0].email.as_str(),
        "stranger@example.com"
    );
    assert_eq!(refreshed.invitations()[0].role.as_deref(), Some("editor"));
}

#[tokio::test]
async fn invite_rejects_duplicates_and_members() {
    let fixture = Fixture::new().await;
    fixture.invite_pending("pending@example.com").await;
    let company = fixture.snapshot().await;
    let action = InviteCompanyEmployee::new(fixture.dependencies());

    let duplicate = action
        .invite(
            &fixture.owner_identity(),
            &company,
            "pending@example.com",
            Some("editor"),
        )
        .await;
    let Err(AppError::Invalid(messages)) = duplicate else {
        panic!("expected validation failure");
    };
    assert_eq!(messages.bag(), ADD_EMPLOYEE_ERROR_BAG);
    assert_eq!(
        messages.first("email"),
        Some("This user has already been invited to the company.")
    );

    let member = action
        .invite(
            &fixture.owner_identity(),
            &company,
            "olivia@example.com",
            Some("editor"),
        )
        .await;
    let Err(AppError::Invalid(messages)) = member else {
        panic!("expected validation failure");
    };
    assert_eq!(
        messages.first("email"),
        Some("This user already belongs to the company.")
    );
    assert_eq!(fixture.store.invitations.lock().await.len(), 1);
}

#[tokio::test]
async fn owner_updates_employee_role() {
    let fixture = Fixture::new().await;
    let company = fixture.snapshot().await;
    let action = UpdateCompanyEmployeeRole::new(fixture.dependencies());

    let result = action
        .update(
            &fixture.owner_identity(),
            &company,
            fixture.editor.id,
            Some("admin"),
        )
        .await;
    assert!(result.is_ok());

    let refreshed = fixture.snapshot().await;
    assert_eq!(
        refreshed.role_key_for(fixture.editor.id).as_deref(),
        Some("admin")
    );
}

#[tokio::test]
async fn update_role_validates_into_update_bag() {
    let fixture = Fixture::new().await;
    let company = fixture.snapshot().await;
    let action = UpdateCompanyEmployeeRole::new(fixture.dependencies());

    let missing = action
        .update(&fixture.owner_identity(), &company, fixture.editor.id, None)
        .await;
    let Err(AppError::Invalid(messages)) = missing else {
        panic!("expected validation failure");
    };
    assert_eq!(messages.bag(), UPDATE_ROLE_ERROR_BAG);
    assert_eq!(messages.first("role"), Some("The role field is required."));

    let not_employee = action
        .update(
            &fixture.owner_identity(),
            &company,
            UserId::new(),
            Some("admin"),
        )
        .await;
    assert!(matches!(not_employee, Err(AppError::NotFound(_))));

    let forbidden = action
        .update(
            &fixture.editor_identity(),
            &company,
            fixture.editor.id,
            Some("admin"),
        )
        .await;
    assert!(matches!(forbidden, Err(AppError::Forbidden(_))));
}

#[tokio::test]
async fn owner_removes_employee_and_clears_current_company() {
    let fixture = Fixture::new().await;
    let company = fixture.snapshot().await;
    let action = RemoveCompanyEmployee::new(fixture.dependencies());

    let result = action
        .remove(&fixture.owner_identity(), &company, &fixture.editor)
        .await;
    assert!(result.is_ok());

    assert!(!fixture.snapshot().await.has_user(fixture.editor.id));
    let users = fixture.store.users.lock().await;
    assert!(
        users
            .get(&fixture.editor.id)
            .is_some_and(|user| user.current_company_id.is_none())
    );
}

#[tokio::test]
async fn employee_may_leave_but_not_remove_others() {
    let fixture = Fixture::new().await;
    let company = fixture.snapshot().await;
    let action = RemoveCompanyEmployee::new(fixture.dependencies());

    let remove_owner = action
        .remove(&fixture.editor_identity(), &company, &fixture.owner)
        .await;
    assert!(matches!(remove_owner, Err(AppError::Forbidden(_))));

    let leave = action
        .remove(&fixture.editor_identity(), &company, &fixture.editor)
        .await;
    assert!(leave.is_ok());

    let events = fixture.store.events.lock().await;
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].action, AuditAction::CompanyEmployeeRemoved);
    assert_eq!(events[0].detail.as_deref(), Some("left the company"));
}

#[tokio::test]
async fn owner_cannot_leave_own_company() {
    let fixture = Fixture::new().await;
    let company = fixture.snapshot().await;
    let action = RemoveCompanyEmployee::new(fixture.dependencies());

    let result = action
        .remove(&fixture.owner_identity(), &company, &fixture.owner)
        .await;

    let Err(AppError::Invalid(messages)) = result else {
        panic!("expected validation failure");
    };
    assert_eq!(messages.bag(), REMOVE_EMPLOYEE_ERROR_BAG);
    assert_eq!(
        messages.first("company_employee"),
        Some("You may not leave a company that you created.")
    );
    assert!(fixture.snapshot().await.owns(fixture.owner.id));
}

#[tokio::test]
async fn outsiders_cannot_leave_a_company_they_are_not_in() {
    let fixture = Fixture::new().await;
    let company = fixture.snapshot().await;
    let action = RemoveCompanyEmployee::new(fixture.dependencies());

    let result = action
        .remove(&fixture.outsider_identity(), &company, &fixture.outsider)
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
}
