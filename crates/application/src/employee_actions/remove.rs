use async_trait::async_trait;
use roster_core::{AppError, AppResult, UserIdentity, ValidationMessages};
use roster_domain::{AuditAction, CompanyAbility, CompanySnapshot, User};
use tracing::info;

use super::rules::{OWNER_CANNOT_LEAVE, REMOVE_EMPLOYEE_ERROR_BAG};
use super::{MembershipDependencies, RemovesCompanyEmployees, load_fresh_snapshot};
use crate::AuditEvent;
use crate::company_gate::UNAUTHORIZED_MESSAGE;

/// Detaches an employee from a company.
#[derive(Clone)]
pub struct RemoveCompanyEmployee {
    dependencies: MembershipDependencies,
}

impl RemoveCompanyEmployee {
    /// Creates the action.
    #[must_use]
    pub fn new(dependencies: MembershipDependencies) -> Self {
        Self { dependencies }
    }
}

#[async_trait]
impl RemovesCompanyEmployees for RemoveCompanyEmployee {
    async fn remove(
        &self,
        actor: &UserIdentity,
        company: &CompanySnapshot,
        employee: &User,
    ) -> AppResult<()> {
        let deps = &self.dependencies;
        let company = load_fresh_snapshot(deps.companies().as_ref(), company.id()).await?;
        let leaving = actor.user_id() == employee.id;

        if leaving {
            if !company.has_user(employee.id) {
                return Err(AppError::Forbidden(UNAUTHORIZED_MESSAGE.to_owned()));
            }
        } else {
            deps.gate()
                .authorize(actor, CompanyAbility::RemoveEmployee, &company)
                .await?;
        }

        if company.owns(employee.id) {
            return Err(ValidationMessages::with_message(
                "company_employee",
                deps.translate(OWNER_CANNOT_LEAVE),
            )
            .error_bag(REMOVE_EMPLOYEE_ERROR_BAG)
            .into());
        }

        if company.employee(employee.id).is_none() {
            return Err(AppError::NotFound(format!(
                "user '{}' is not an employee of company '{}'",
                employee.id,
                company.id()
            )));
        }

        deps.companies()
            .detach_employee(company.id(), employee.id)
            .await?;

        let stored = deps.users().find_by_id(employee.id).await?;
        if stored.is_some_and(|user| user.is_current_company(company.id())) {
            deps.users().set_current_company(employee.id, None).await?;
        }

        deps.audit()
            .append_event(AuditEvent {
                company_id: company.id(),
                actor_id: actor.user_id(),
                action: AuditAction::CompanyEmployeeRemoved,
                resource_type: "company_employee".to_owned(),
                resource_id: employee.id.to_string(),
                detail: Some(if leaving {
                    "left the company".to_owned()
                } else {
                    format!("removed '{}'", employee.email)
                }),
            })
            .await?;

        info!(
            company_id = %company.id(),
            user_id = %employee.id,
            leaving,
            "company employee removed"
        );

        Ok(())
    }
}
