use async_trait::async_trait;
use roster_core::{AppError, AppResult, UserId, UserIdentity, ValidationMessages};
use roster_domain::{AuditAction, CompanyAbility, CompanySnapshot};
use tracing::info;

use super::rules::{UPDATE_ROLE_ERROR_BAG, validate_required_role};
use super::{MembershipDependencies, UpdatesCompanyEmployeeRoles, load_fresh_snapshot};
use crate::AuditEvent;

/// Changes the role key of a company employee.
#[derive(Clone)]
pub struct UpdateCompanyEmployeeRole {
    dependencies: MembershipDependencies,
}

impl UpdateCompanyEmployeeRole {
    /// Creates the action.
    #[must_use]
    pub fn new(dependencies: MembershipDependencies) -> Self {
        Self { dependencies }
    }
}

#[async_trait]
impl UpdatesCompanyEmployeeRoles for UpdateCompanyEmployeeRole {
    async fn update(
        &self,
        actor: &UserIdentity,
        company: &CompanySnapshot,
        employee_id: UserId,
        role: Option<&str>,
    ) -> AppResult<()> {
        let deps = &self.dependencies;
        let company = load_fresh_snapshot(deps.companies().as_ref(), company.id()).await?;

        deps.gate()
            .authorize(actor, CompanyAbility::UpdateEmployee, &company)
            .await?;

        let mut messages = ValidationMessages::new().error_bag(UPDATE_ROLE_ERROR_BAG);
        let Some(role) = validate_required_role(deps, role, &mut messages) else {
            return Err(messages.into());
        };

        if company.employee(employee_id).is_none() {
            return Err(AppError::NotFound(format!(
                "user '{employee_id}' is not an employee of company '{}'",
                company.id()
            )));
        }

        deps.companies()
            .update_employee_role(company.id(), employee_id, role.as_str())
            .await?;

        deps.audit()
            .append_event(AuditEvent {
                company_id: company.id(),
                actor_id: actor.user_id(),
                action: AuditAction::CompanyEmployeeRoleUpdated,
                resource_type: "company_employee".to_owned(),
                resource_id: employee_id.to_string(),
                detail: Some(format!("role set to '{role}'")),
            })
            .await?;

        info!(
            company_id = %company.id(),
            user_id = %employee_id,
            role = role.as_str(),
            "company employee role updated"
        );

        Ok(())
    }
}
