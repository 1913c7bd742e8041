use roster_application::{CompanyEmployeeManager, CreateCompany, DeleteCompany, UserRepository};
use roster_core::{AppError, AppResult, UserId, UserIdentity};
use roster_domain::{EmailAddress, User};
use tracing::{info, warn};

use crate::seed_services::SeedServices;

const SEED_USERS: [(&str, &str); 3] = [
    ("Olivia Owner", "olivia@roster.local"),
    ("Eddie Editor", "eddie@roster.local"),
    ("Nina Newcomer", "nina@roster.local"),
];

pub async fn run(services: &SeedServices) -> AppResult<()> {
    let creator = CreateCompany::new(services.dependencies.clone());

    let mut users = Vec::with_capacity(SEED_USERS.len());
    let mut personal_companies = Vec::with_capacity(SEED_USERS.len());
    for (name, email) in SEED_USERS {
        let user = User::new(UserId::new(), name, EmailAddress::new(email)?);
        services.store.save_user(user.clone()).await?;
        personal_companies.push(creator.create_personal_company(&user).await?.id());
        users.push(user);
    }

    let ([owner, editor, newcomer], Some(owner_personal_company)) =
        (users.as_slice(), personal_companies.first().copied())
    else {
        return Err(AppError::Internal("seed users missing".to_owned()));
    };

    let owner_identity = identity(owner);
    let company = creator.create(&owner_identity, "Acme Corporation").await?;
    let company_id = company.id();

    let mut manager =
        CompanyEmployeeManager::mount(services.manager.clone(), owner_identity.clone(), company);

    for (user, role) in [(editor, "editor"), (newcomer, "admin")] {
        let form = manager.add_employee_form_mut();
        form.email = user.email.to_string();
        form.role = Some(role.to_owned());
        manager.add_company_employee().await?;
    }

    info!(
        company_id = %company_id,
        employees = manager.company().employees().len(),
        invitations = manager.company().invitations().len(),
        "employees added"
    );

    if manager.company().has_user(editor.id) {
        manager.manage_role(editor.id).await?;
        manager.set_current_role("admin")?;
        manager.update_role().await?;
    }

    manager.confirm_leaving_company();
    if let Err(error) = manager.leave_company().await {
        warn!(error = %error, "owner could not leave the company");
    }

    if manager.company().has_user(newcomer.id) {
        manager.confirm_company_employee_removal(newcomer.id);
        manager.remove_company_employee().await?;
    }

    for invitation in manager.company().invitations().to_vec() {
        manager
            .cancel_company_invitation(invitation.id.to_string().as_str())
            .await?;
    }

    for role in manager.roles() {
        info!(key = %role.key, name = %role.name, "assignable role");
    }

    let deleter = DeleteCompany::new(services.dependencies.clone());
    if let Err(error) = deleter
        .delete(&owner_identity, owner_personal_company)
        .await
    {
        warn!(error = %error, "personal company was kept");
    }
    deleter.delete(&owner_identity, company_id).await?;

    let events = services.audit.events().await;
    info!(events = events.len(), "roster seed finished");

    Ok(())
}

fn identity(user: &User) -> UserIdentity {
    UserIdentity::new(
        user.id,
        user.name.clone(),
        Some(user.email.to_string()),
        user.current_company_id,
    )
}
