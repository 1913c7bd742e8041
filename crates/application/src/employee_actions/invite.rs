use async_trait::async_trait;
use roster_core::{AppResult, UserIdentity, ValidationMessages};
use roster_domain::{AuditAction, CompanyAbility, CompanyInvitation, CompanySnapshot};
use tracing::info;

use super::rules::{
    ADD_EMPLOYEE_ERROR_BAG, ALREADY_EMPLOYEE, ALREADY_INVITED, validate_email,
    validate_membership_role,
};
use super::{InvitesCompanyEmployees, MembershipDependencies, load_fresh_snapshot};
use crate::AuditEvent;

/// Records a pending invitation for an email address.
///
/// Delivering the invitation to the recipient is left to the host application.
#[derive(Clone)]
pub struct InviteCompanyEmployee {
    dependencies: MembershipDependencies,
}

impl InviteCompanyEmployee {
    /// Creates the action.
    #[must_use]
    pub fn new(dependencies: MembershipDependencies) -> Self {
        Self { dependencies }
    }
}

#[async_trait]
impl InvitesCompanyEmployees for InviteCompanyEmployee {
    async fn invite(
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

        if let Some(email) = &email {
            if company.has_invitation_for(email) {
                messages.add("email", deps.translate(ALREADY_INVITED));
            } else if company.has_user_with_email(email) {
                messages.add("email", deps.translate(ALREADY_EMPLOYEE));
            }
        }

        let email = match email {
            Some(email) if messages.is_empty() => email,
            _ => return Err(messages.into()),
        };

        let invitation = CompanyInvitation::new(company.id(), email, role);
        let invitation_id = invitation.id;
        let invited_email = invitation.email.clone();

        deps.invitations().create_invitation(invitation).await?;

        deps.audit()
            .append_event(AuditEvent {
                company_id: company.id(),
                actor_id: actor.user_id(),
                action: AuditAction::CompanyEmployeeInvited,
                resource_type: "company_invitation".to_owned(),
                resource_id: invitation_id.to_string(),
                detail: Some(format!("invited '{invited_email}'")),
            })
            .await?;

        info!(
            company_id = %company.id(),
            invitation_id = %invitation_id,
            "company employee invited"
        );

        Ok(())
    }
}
