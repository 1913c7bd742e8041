use roster_core::{AppError, AppResult, UserIdentity};
use roster_domain::{AuditAction, Company, CompanySnapshot, User};
use tracing::info;

use crate::AuditEvent;
use crate::employee_actions::{MembershipDependencies, load_fresh_snapshot};

/// Creates companies and switches their owner into them.
#[derive(Clone)]
pub struct CreateCompany {
    dependencies: MembershipDependencies,
}

impl CreateCompany {
    /// Creates the action.
    #[must_use]
    pub fn new(dependencies: MembershipDependencies) -> Self {
        Self { dependencies }
    }

    /// Creates a regular company owned by the acting user.
    pub async fn create(&self, actor: &UserIdentity, name: &str) -> AppResult<CompanySnapshot> {
        let owner = self
            .dependencies
            .users()
            .find_by_id(actor.user_id())
            .await?
            .ok_or_else(|| {
                AppError::Unauthorized(format!("user '{}' is not registered", actor.user_id()))
            })?;
        self.dependencies.gate().authorize_creation(actor).await?;

        self.persist(&owner, Company::new(owner.id, name.trim(), false)?)
            .await
    }

    /// Creates the personal company every user receives on registration.
    pub async fn create_personal_company(&self, user: &User) -> AppResult<CompanySnapshot> {
        let name = format!("{}'s Company", user.first_name());
        self.persist(user, Company::new(user.id, name, true)?).await
    }

    async fn persist(&self, owner: &User, company: Company) -> AppResult<CompanySnapshot> {
        let deps = &self.dependencies;
        let company_id = company.id;
        let personal_company = company.personal_company;
        let detail = format!("created '{}'", company.name);

        deps.companies().create_company(company).await?;
        deps.users()
            .set_current_company(owner.id, Some(company_id))
            .await?;

        deps.audit()
            .append_event(AuditEvent {
                company_id,
                actor_id: owner.id,
                action: AuditAction::CompanyCreated,
                resource_type: "company".to_owned(),
                resource_id: company_id.to_string(),
                detail: Some(detail),
            })
            .await?;

        info!(
            company_id = %company_id,
            owner_id = %owner.id,
            personal_company,
            "company created"
        );

        load_fresh_snapshot(deps.companies().as_ref(), company_id).await
    }
}
