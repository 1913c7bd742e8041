use async_trait::async_trait;
use roster_application::CompanyRepository;
use roster_core::{AppError, AppResult, CompanyId, UserId};
use roster_domain::{Company, CompanyEmployee, CompanySnapshot};

use super::{InMemoryMembershipStore, MembershipRow};

#[async_trait]
impl CompanyRepository for InMemoryMembershipStore {
    async fn create_company(&self, company: Company) -> AppResult<()> {
        let mut companies = self.companies.write().await;

        if companies.contains_key(&company.id) {
            return Err(AppError::Conflict(format!(
                "company '{}' already exists",
                company.id
            )));
        }

        companies.insert(company.id, company);
        Ok(())
    }

    async fn load_snapshot(&self, company_id: CompanyId) -> AppResult<Option<CompanySnapshot>> {
        let companies = self.companies.read().await;
        let Some(company) = companies.get(&company_id).cloned() else {
            return Ok(None);
        };

        let users = self.users.read().await;
        let owner = users.get(&company.owner_id).cloned().ok_or_else(|| {
            AppError::Internal(format!(
                "owner '{}' of company '{company_id}' is not registered",
                company.owner_id
            ))
        })?;

        let employees = self
            .memberships
            .read()
            .await
            .iter()
            .filter(|row| row.company_id == company_id)
            .map(|row| {
                users
                    .get(&row.user_id)
                    .cloned()
                    .map(|user| CompanyEmployee {
                        user,
                        role: row.role.clone(),
                    })
                    .ok_or_else(|| {
                        AppError::Internal(format!(
                            "employee '{}' of company '{company_id}' is not registered",
                            row.user_id
                        ))
                    })
            })
            .collect::<AppResult<Vec<_>>>()?;

        let invitations = self
            .invitations
            .read()
            .await
            .iter()
            .filter(|invitation| invitation.company_id == company_id)
            .cloned()
            .collect();

        CompanySnapshot::new(company, owner, employees, invitations).map(Some)
    }

    async fn attach_employee(
        &self,
        company_id: CompanyId,
        user_id: UserId,
        role: Option<&str>,
    ) -> AppResult<()> {
        if !self.companies.read().await.contains_key(&company_id) {
            return Err(AppError::NotFound(format!(
                "company '{company_id}' not found"
            )));
        }

        if !self.users.read().await.contains_key(&user_id) {
            return Err(AppError::NotFound(format!("user '{user_id}' not found")));
        }

        let mut memberships = self.memberships.write().await;
        if memberships
            .iter()
            .any(|row| row.company_id == company_id && row.user_id == user_id)
        {
            return Err(AppError::Conflict(format!(
                "user '{user_id}' already belongs to company '{company_id}'"
            )));
        }

        memberships.push(MembershipRow {
            company_id,
            user_id,
            role: role.map(str::to_owned),
        });
        Ok(())
    }

    async fn update_employee_role(
        &self,
        company_id: CompanyId,
        user_id: UserId,
        role: &str,
    ) -> AppResult<()> {
        let mut memberships = self.memberships.write().await;
        let row = memberships
            .iter_mut()
            .find(|row| row.company_id == company_id && row.user_id == user_id)
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "user '{user_id}' is not an employee of company '{company_id}'"
                ))
            })?;

        row.role = Some(role.to_owned());
        Ok(())
    }

    async fn detach_employee(&self, company_id: CompanyId, user_id: UserId) -> AppResult<()> {
        self.memberships
            .write()
            .await
            .retain(|row| !(row.company_id == company_id && row.user_id == user_id));
        Ok(())
    }

    async fn delete_company(&self, company_id: CompanyId) -> AppResult<()> {
        if self.companies.write().await.remove(&company_id).is_none() {
            return Err(AppError::NotFound(format!(
                "company '{company_id}' not found"
            )));
        }

        self.memberships
            .write()
            .await
            .retain(|row| row.company_id != company_id);
        Ok(())
    }
}
