use async_trait::async_trait;
use roster_application::UserRepository;
use roster_core::{AppError, AppResult, CompanyId, UserId};
use roster_domain::{EmailAddress, User};

use super::InMemoryMembershipStore;

#[async_trait]
impl UserRepository for InMemoryMembershipStore {
    async fn save_user(&self, user: User) -> AppResult<()> {
        let mut users = self.users.write().await;

        if users
            .values()
            .any(|existing| existing.id != user.id && existing.email == user.email)
        {
            return Err(AppError::Conflict(format!(
                "email '{}' is already registered",
                user.email
            )));
        }

        users.insert(user.id, user);
        Ok(())
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(&user_id).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> AppResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|user| &user.email == email)
            .cloned())
    }

    async fn set_current_company(
        &self,
        user_id: UserId,
        company_id: Option<CompanyId>,
    ) -> AppResult<()> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(&user_id)
            .ok_or_else(|| AppError::NotFound(format!("user '{user_id}' not found")))?;

        user.current_company_id = company_id;
        Ok(())
    }

    async fn clear_current_company(&self, company_id: CompanyId) -> AppResult<()> {
        self.users
            .write()
            .await
            .values_mut()
            .filter(|user| user.is_current_company(company_id))
            .for_each(|user| user.current_company_id = None);
        Ok(())
    }
}
