use async_trait::async_trait;
use roster_application::InvitationRepository;
use roster_core::{AppResult, CompanyId, InvitationId};
use roster_domain::CompanyInvitation;

use super::InMemoryMembershipStore;

#[async_trait]
impl InvitationRepository for InMemoryMembershipStore {
    async fn create_invitation(&self, invitation: CompanyInvitation) -> AppResult<()> {
        self.invitations.write().await.push(invitation);
        Ok(())
    }

    async fn find_invitation(
        &self,
        invitation_id: InvitationId,
    ) -> AppResult<Option<CompanyInvitation>> {
        Ok(self
            .invitations
            .read()
            .await
            .iter()
            .find(|invitation| invitation.id == invitation_id)
            .cloned())
    }

    async fn delete_invitation(
        &self,
        company_id: CompanyId,
        invitation_id: InvitationId,
    ) -> AppResult<bool> {
        let mut invitations = self.invitations.write().await;
        let before = invitations.len();
        invitations.retain(|invitation| {
            !(invitation.company_id == company_id && invitation.id == invitation_id)
        });

        Ok(invitations.len() < before)
    }

    async fn delete_invitations_for_company(&self, company_id: CompanyId) -> AppResult<u64> {
        let mut invitations = self.invitations.write().await;
        let before = invitations.len();
        invitations.retain(|invitation| invitation.company_id != company_id);

        Ok(u64::try_from(before - invitations.len()).unwrap_or(u64::MAX))
    }
}
