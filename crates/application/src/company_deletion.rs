use std::sync::Arc;

use roster_core::{AppResult, CompanyId, UserIdentity, ValidationMessages};
use roster_domain::{AuditAction, CompanyAbility, CompanySnapshot, Translator};
use tracing::{info, warn};

use crate::employee_actions::{MembershipDependencies, load_fresh_snapshot};
use crate::{AuditEvent, CompanyGate};

/// Error bag used by company deletion failures.
pub const DELETE_COMPANY_ERROR_BAG: &str = "deleteCompany";

const PERSONAL_COMPANY_MESSAGE: &str = "You may not delete your personal company.";

/// Checks that a company may be deleted by a user.
#[derive(Clone)]
pub struct ValidateCompanyDeletion {
    gate: Arc<dyn CompanyGate>,
    translator: Arc<dyn Translator>,
}

impl ValidateCompanyDeletion {
    /// Creates the validator.
    #[must_use]
    pub fn new(gate: Arc<dyn CompanyGate>, translator: Arc<dyn Translator>) -> Self {
        Self { gate, translator }
    }

    /// Authorizes the deletion, then rejects personal companies.
    ///
    /// Authorization failures take precedence over the personal-company rule.
    pub async fn validate(&self, actor: &UserIdentity, company: &CompanySnapshot) -> AppResult<()> {
        self.gate
            .authorize(actor, CompanyAbility::Delete, company)
            .await?;

        if company.company().personal_company {
            warn!(
                user_id = %actor.user_id(),
                company_id = %company.id(),
                "refused to delete personal company"
            );

            return Err(ValidationMessages::with_message(
                "company",
                self.translator.translate(PERSONAL_COMPANY_MESSAGE),
            )
            .error_bag(DELETE_COMPANY_ERROR_BAG)
            .into());
        }

        Ok(())
    }
}

/// Deletes a company after [`ValidateCompanyDeletion`] accepts it.
#[derive(Clone)]
pub struct DeleteCompany {
    dependencies: MembershipDependencies,
    validator: ValidateCompanyDeletion,
}

impl DeleteCompany {
    /// Creates the action.
    #[must_use]
    pub fn new(dependencies: MembershipDependencies) -> Self {
        let validator = ValidateCompanyDeletion::new(
            dependencies.gate().clone(),
            dependencies.translator().clone(),
        );

        Self {
            dependencies,
            validator,
        }
    }

    /// Validates and deletes the company with its invitations and memberships.
    pub async fn delete(&self, actor: &UserIdentity, company_id: CompanyId) -> AppResult<()> {
        let deps = &self.dependencies;
        let company = load_fresh_snapshot(deps.companies().as_ref(), company_id).await?;

        self.validator.validate(actor, &company).await?;

        let purged_invitations = deps
            .invitations()
            .delete_invitations_for_company(company_id)
            .await?;
        deps.users().clear_current_company(company_id).await?;
        deps.companies().delete_company(company_id).await?;

        deps.audit()
            .append_event(AuditEvent {
                company_id,
                actor_id: actor.user_id(),
                action: AuditAction::CompanyDeleted,
                resource_type: "company".to_owned(),
                resource_id: company_id.to_string(),
                detail: Some(format!(
                    "deleted '{}' with {} employees and {purged_invitations} invitations",
                    company.company().name,
                    company.employees().len()
                )),
            })
            .await?;

        info!(company_id = %company_id, "company deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use roster_core::AppError;
    use roster_domain::IdentityTranslator;

    use super::{DELETE_COMPANY_ERROR_BAG, DeleteCompany, ValidateCompanyDeletion};
    use crate::CompanyPolicyGate;
    use crate::test_support::Fixture;

    fn validator() -> ValidateCompanyDeletion {
        ValidateCompanyDeletion::new(
            Arc::new(CompanyPolicyGate::new()),
            Arc::new(IdentityTranslator),
        )
    }

    #[tokio::test]
    async fn owner_may_delete_regular_company() {
        let fixture = Fixture::new().await;
        let company = fixture.snapshot().await;

        let result = validator().validate(&fixture.owner_identity(), &company).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn personal_company_is_rejected_into_delete_company_bag() {
        let fixture = Fixture::new().await;
        let company = fixture.personal_snapshot().await;

        let result = validator().validate(&fixture.owner_identity(), &company).await;

        let Err(AppError::Invalid(messages)) = result else {
            panic!("expected a validation rejection");
        };
        assert_eq!(messages.bag(), DELETE_COMPANY_ERROR_BAG);
        assert_eq!(
            messages.first("company"),
            Some("You may not delete your personal company.")
        );
    }

    #[tokio::test]
    async fn authorization_is_checked_before_personal_flag() {
        let fixture = Fixture::new().await;
        let company = fixture.personal_snapshot().await;

        let result = validator().validate(&fixture.editor_identity(), &company).await;
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[tokio::test]
    async fn delete_purges_company_state() {
        let fixture = Fixture::new().await;
        fixture.invite_pending("pending@example.com").await;

        let action = DeleteCompany::new(fixture.dependencies());
        let result = action
            .delete(&fixture.owner_identity(), fixture.company_id)
            .await;

        assert!(result.is_ok());
        assert!(
            !fixture
                .store
                .companies
                .lock()
                .await
                .contains_key(&fixture.company_id)
        );
        assert!(fixture.store.invitations.lock().await.is_empty());
        assert_eq!(fixture.store.events.lock().await.len(), 1);
    }

    #[tokio::test]
    async fn delete_by_non_owner_changes_nothing() {
        let fixture = Fixture::new().await;

        let action = DeleteCompany::new(fixture.dependencies());
        let result = action
            .delete(&fixture.editor_identity(), fixture.company_id)
            .await;

        assert!(matches!(result, Err(AppError::Forbidden(_))));
        assert!(
            fixture
                .store
                .companies
                .lock()
                .await
                .contains_key(&fixture.company_id)
        );
    }
}
