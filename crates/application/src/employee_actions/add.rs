use async_trait::async_trait;
use roster_core::{AppResult, UserIdentity, ValidationMessages};
use roster_domain::{AuditAction, CompanyAbility, CompanySnapshot};
use tracing::info;

use super::rules::{
    ADD_EMPLOYEE_ERROR_BAG, ALREADY_EMPLOYEE, USER_NOT_FOUND, validate_email,
    validate_membership_role,
};
use super::{AddsCompanyEmployees, MembershipDependencies, load_fresh_snapshot};
use crate::AuditEvent;

/// Attaches an already registered user to a company.
#[derive(Clone)]
pub struct AddCompanyEmployee {
    dependencies: MembershipDependencies,
}

impl AddCompanyEmployee {
    /// Creates the action.
    #[must_use]
    pub fn new(dependencies: MembershipDependencies) -> Self {
        Self { dependencies }
    }
}

#[async_trait]
impl AddsCompanyEmployees for AddCompanyEmployee {
    async fn add(
        &self,
        actor: &UserIdentity,
        company: &CompanySnapshot,
        email: &str,
        role: Option<&str>,
    ) -> AppResult<()> {
        let deps = &self.dependencies;
        let company = load_fresh_snapshot(deps.companies().as_ref(), company.id()).await?;

        deps.gate()
            .authorize(actor, CompanyAbility::AddEmployee, &company)
            .await?;

        let mut messages = ValidationMessages::new().error_bag(ADD_EMPLOYEE_ERROR_BAG);
        let email = validate_email(deps, email, &mut messages);
        let role = validate_membership_role(deps, role, &mut messages);

        let new_employee = match &email {
            Some(email) => {
                let found = deps.users().find_by_email(email).await?;
                if found.is_none() {
                    messages.add("email", deps.translate(USER_NOT_FOUND));
                }
                found
            }
            None => None,
        };

        if let Some(user) = &new_employee
            && company.has_user(user.id)
        {
            messages.add("email", deps.translate(ALREADY_EMPLOYEE));
        }

        let new_employee = match new_employee {
            Some(user) if messages.is_empty() => user,
            _ => return Err(messages.into()),
        };

        deps.companies()
            .attach_employee(company.id(), new_employee.id, role.as_deref())
            .await?;

        deps.audit()
            .append_event(AuditEvent {
                company_id: company.id(),
                actor_id: actor.user_id(),
                action: AuditAction::CompanyEmployeeAdded,
                resource_type: "company_employee".to_owned(),
                resource_id: new_employee.id.to_string(),
                detail: Some(format!(
                    "added '{}' with role '{}'",
                    new_employee.email,
                    role.as_deref().unwrap_or("none")
                )),
            })
            .await?;

        info!(
            company_id = %company.id(),
            user_id = %new_employee.id,
            role = role.as_deref().unwrap_or("none"),
            "company employee added"
        );

        Ok(())
    }
}
