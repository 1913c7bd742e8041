use async_trait::async_trait;
use roster_core::{AppError, AppResult, UserIdentity};
use roster_domain::{CompanyAbility, CompanySnapshot};
use tracing::warn;

/// Message returned when an ability is denied.
pub const UNAUTHORIZED_MESSAGE: &str = "This action is unauthorized.";

/// Port deciding whether a user may perform an ability on a company.
#[async_trait]
pub trait CompanyGate: Send + Sync {
    /// Returns whether the ability is allowed.
    async fn allows(
        &self,
        actor: &UserIdentity,
        ability: CompanyAbility,
        company: &CompanySnapshot,
    ) -> AppResult<bool>;

    /// Ensures the ability is allowed, failing with [`AppError::Forbidden`] otherwise.
    async fn authorize(
        &self,
        actor: &UserIdentity,
        ability: CompanyAbility,
        company: &CompanySnapshot,
    ) -> AppResult<()> {
        if self.allows(actor, ability, company).await? {
            return Ok(());
        }

        warn!(
            user_id = %actor.user_id(),
            company_id = %company.id(),
            ability = ability.as_str(),
            "company ability denied"
        );

        Err(AppError::Forbidden(UNAUTHORIZED_MESSAGE.to_owned()))
    }

    /// Returns whether the user may create a new company.
    async fn allows_creation(&self, actor: &UserIdentity) -> AppResult<bool>;

    /// Ensures company creation is allowed, failing with [`AppError::Forbidden`] otherwise.
    async fn authorize_creation(&self, actor: &UserIdentity) -> AppResult<()> {
        if self.allows_creation(actor).await? {
            return Ok(());
        }

        warn!(
            user_id = %actor.user_id(),
            ability = CompanyAbility::Create.as_str(),
            "company ability denied"
        );

        Err(AppError::Forbidden(UNAUTHORIZED_MESSAGE.to_owned()))
    }
}

/// Default company policy: members may view, owners may do everything else.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompanyPolicyGate;

impl CompanyPolicyGate {
    /// Creates the policy gate.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CompanyGate for CompanyPolicyGate {
    async fn allows(
        &self,
        actor: &UserIdentity,
        ability: CompanyAbility,
        company: &CompanySnapshot,
    ) -> AppResult<bool> {
        let user_id = actor.user_id();

        Ok(match ability {
            CompanyAbility::View => company.has_user(user_id),
            CompanyAbility::Create => self.allows_creation(actor).await?,
            CompanyAbility::Update
            | CompanyAbility::AddEmployee
            | CompanyAbility::UpdateEmployee
            | CompanyAbility::RemoveEmployee
            | CompanyAbility::Delete => company.owns(user_id),
        })
    }

    async fn allows_creation(&self, _actor: &UserIdentity) -> AppResult<bool> {
        Ok(true)
    }
}
