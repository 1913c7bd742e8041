use async_trait::async_trait;
use roster_core::{AppResult, CompanyId, InvitationId, UserId};
use roster_domain::{Company, CompanyInvitation, CompanySnapshot, EmailAddress, User};

/// Port for company records and their memberships.
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// Persists a new company.
    async fn create_company(&self, company: Company) -> AppResult<()>;

    /// Loads the company with its owner, employees and pending invitations as stored now.
    async fn load_snapshot(&self, company_id: CompanyId) -> AppResult<Option<CompanySnapshot>>;

    /// Attaches a user to a company with an optional role key.
    async fn attach_employee(
        &self,
        company_id: CompanyId,
        user_id: UserId,
        role: Option<&str>,
    ) -> AppResult<()>;

    /// Changes the role key of an existing employee.
    async fn update_employee_role(
        &self,
        company_id: CompanyId,
        user_id: UserId,
        role: &str,
    ) -> AppResult<()>;

    /// Detaches a user from a company.
    async fn detach_employee(&self, company_id: CompanyId, user_id: UserId) -> AppResult<()>;

    /// Deletes a company together with every membership row.
    async fn delete_company(&self, company_id: CompanyId) -> AppResult<()>;
}

/// Port for user account lookups and current-company tracking.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persists or replaces a user account.
    async fn save_user(&self, user: User) -> AppResult<()>;

    /// Finds a user by identifier.
    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>>;

    /// Finds a user by canonical email.
    async fn find_by_email(&self, email: &EmailAddress) -> AppResult<Option<User>>;

    /// Sets or clears the company a user is working in.
    async fn set_current_company(
        &self,
        user_id: UserId,
        company_id: Option<CompanyId>,
    ) -> AppResult<()>;

    /// Clears the current company of every user pointing at the company.
    async fn clear_current_company(&self, company_id: CompanyId) -> AppResult<()>;
}

/// Port for pending company invitations.
#[async_trait]
pub trait InvitationRepository: Send + Sync {
    /// Persists a new invitation.
    async fn create_invitation(&self, invitation: CompanyInvitation) -> AppResult<()>;

    /// Finds an invitation by identifier.
    async fn find_invitation(
        &self,
        invitation_id: InvitationId,
    ) -> AppResult<Option<CompanyInvitation>>;

    /// Deletes an invitation of the company; returns whether a row was removed.
    async fn delete_invitation(
        &self,
        company_id: CompanyId,
        invitation_id: InvitationId,
    ) -> AppResult<bool>;

    /// Deletes every invitation of a company.
    async fn delete_invitations_for_company(&self, company_id: CompanyId) -> AppResult<u64>;
}
