use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use roster_core::{AppError, AppResult, CompanyId, InvitationId, UserId, UserIdentity};
use roster_domain::{
    Company, CompanyEmployee, CompanyInvitation, CompanySnapshot, EmailAddress, IdentityTranslator,
    Role, RoleRegistry, User,
};
use tokio::sync::Mutex;

use crate::employee_actions::MembershipDependencies;
use crate::{
    AuditEvent, AuditRepository, CompanyGate, CompanyPolicyGate, CompanyRepository, InvitationRepository,
    UserRepository,
};

type Membership = (CompanyId, UserId, Option<String>);

#[derive(Default)]
pub(crate) struct FakeStore {
    pub(crate) companies: Mutex<HashMap<CompanyId, Company>>,
    pub(crate) memberships: Mutex<Vec<Membership>>,
    pub(crate) users: Mutex<HashMap<UserId, User>>,
    pub(crate) invitations: Mutex<Vec<CompanyInvitation>>,
    pub(crate) events: Mutex<Vec<AuditEvent>>,
}

#[async_trait]
impl CompanyRepository for FakeStore {
    async fn create_company(&self, company: Company) -> AppResult<()> {
        self.companies.lock().await.insert(company.id, company);
        Ok(())
    }

    async fn load_snapshot(&self, company_id: CompanyId) -> AppResult<Option<CompanySnapshot>> {
        let Some(company) = self.companies.lock().await.get(&company_id).cloned() else {
            return Ok(None);
        };

        let users = self.users.lock().await.clone();
        let owner = users
            .get(&company.owner_id)
            .cloned()
            .ok_or_else(|| AppError::Internal("owner missing".to_owned()))?;

        let employees = self
            .memberships
            .lock()
            .await
            .iter()
            .filter(|(membership_company, _, _)| *membership_company == company_id)
            .filter_map(|(_, user_id, role)| {
                users.get(user_id).map(|user| CompanyEmployee {
                    user: user.clone(),
                    role: role.clone(),
                })
            })
            .collect();

        let invitations = self
            .invitations
            .lock()
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
        self.memberships
            .lock()
            .await
            .push((company_id, user_id, role.map(str::to_owned)));
        Ok(())
    }

    async fn update_employee_role(
        &self,
        company_id: CompanyId,
        user_id: UserId,
        role: &str,
    ) -> AppResult<()> {
        let mut memberships = self.memberships.lock().await;
        let membership = memberships
            .iter_mut()
            .find(|(membership_company, member, _)| {
                *membership_company == company_id && *member == user_id
            })
            .ok_or_else(|| AppError::NotFound("membership".to_owned()))?;
        membership.2 = Some(role.to_owned());
        Ok(())
    }

    async fn detach_employee(&self, company_id: CompanyId, user_id: UserId) -> AppResult<()> {
        self.memberships
            .lock()
            .await
            .retain(|(membership_company, member, _)| {
                !(*membership_company == company_id && *member == user_id)
            });
        Ok(())
    }

    async fn delete_company(&self, company_id: CompanyId) -> AppResult<()> {
        self.companies.lock().await.remove(&company_id);
        self.memberships
            .lock()
            .await
            .retain(|(membership_company, _, _)| *membership_company != company_id);
        Ok(())
    }
}

#[async_trait]
impl UserRepository for FakeStore {
    async fn save_user(&self, user: User) -> AppResult<()> {
        self.users.lock().await.insert(user.id, user);
        Ok(())
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
        Ok(self.users.lock().await.get(&user_id).cloned())
    }

    async fn find_by_email(&self, email: &EmailAddress) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
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
        if let Some(user) = self.users.lock().await.get_mut(&user_id) {
            user.current_company_id = company_id;
        }
        Ok(())
    }

    async fn clear_current_company(&self, company_id: CompanyId) -> AppResult<()> {
        for user in self.users.lock().await.values_mut() {
            if user.is_current_company(company_id) {
                user.current_company_id = None;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl InvitationRepository for FakeStore {
    async fn create_invitation(&self, invitation: CompanyInvitation) -> AppResult<()> {
        self.invitations.lock().await.push(invitation);
        Ok(())
    }

    async fn find_invitation(
        &self,
        invitation_id: InvitationId,
    ) -> AppResult<Option<CompanyInvitation>> {
        Ok(self
            .invitations
            .lock()
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
        let mut invitations = self.invitations.lock().await;
        let before = invitations.len();
        invitations.retain(|invitation| {
            !(invitation.company_id == company_id && invitation.id == invitation_id)
        });
        Ok(invitations.len() != before)
    }

    async fn delete_invitations_for_company(&self, company_id: CompanyId) -> AppResult<u64> {
        let mut invitations = self.invitations.lock().await;
        let before = invitations.len();
        invitations.retain(|invitation| invitation.company_id != company_id);
        Ok((before - invitations.len()) as u64)
    }
}

#[async_trait]
impl AuditRepository for FakeStore {
    async fn append_event(&self, event: AuditEvent) -> AppResult<()> {
        self.events.lock().await.push(event);
        Ok(())
    }
}

fn user(name: &str, email: &str) -> User {
    User::new(
        UserId::new(),
        name,
        EmailAddress::new(email).unwrap_or_else(|_| panic!("test")),
    )
}

pub(crate) fn identity(user: &User) -> UserIdentity {
    UserIdentity::new(
        user.id,
        user.name.clone(),
        Some(user.email.to_string()),
        user.current_company_id,
    )
}

pub(crate) fn test_registry() -> RoleRegistry {
    RoleRegistry::new(vec![
        Role::new("admin", "Administrator", ["create", "read", "update", "delete"])
            .description("Administrator users can perform any action."),
        Role::new("editor", "Editor", ["read", "create", "update"])
            .description("Editor users have the ability to read, create, and update."),
    ])
    .unwrap_or_else(|_| panic!("test"))
}

/// Company "Acme" owned by Olivia with Eddie as editor, plus Nina registered but unattached.
pub(crate) struct Fixture {
    pub(crate) store: Arc<FakeStore>,
    pub(crate) registry: Arc<RoleRegistry>,
    pub(crate) owner: User,
    pub(crate) editor: User,
    pub(crate) outsider: User,
    pub(crate) company_id: CompanyId,
    pub(crate) personal_company_id: CompanyId,
}

impl Fixture {
    pub(crate) async fn new() -> Self {
        Self::with_registry(test_registry()).await
    }

    pub(crate) async fn with_registry(registry: RoleRegistry) -> Self {
        let store = Arc::new(FakeStore::default());
        let mut owner = user("Olivia Owner", "olivia@example.com");
        let mut editor = user("Eddie Editor", "eddie@example.com");
        let outsider = user("Nina Newcomer", "nina@example.com");

        let company =
            Company::new(owner.id, "Acme", false).unwrap_or_else(|_| panic!("test"));
        let personal = Company::new(owner.id, "Olivia's Company", true)
            .unwrap_or_else(|_| panic!("test"));
        let company_id = company.id;
        let personal_company_id = personal.id;

        owner.current_company_id = Some(company_id);
        editor.current_company_id = Some(company_id);

        {
            let mut users = store.users.lock().await;
            users.insert(owner.id, owner.clone());
            users.insert(editor.id, editor.clone());
            users.insert(outsider.id, outsider.clone());
        }
        {
            let mut companies = store.companies.lock().await;
            companies.insert(company_id, company);
            companies.insert(personal_company_id, personal);
        }
        store
            .memberships
            .lock()
            .await
            .push((company_id, editor.id, Some("editor".to_owned())));

        Self {
            store,
            registry: Arc::new(registry),
            owner,
            editor,
            outsider,
            company_id,
            personal_company_id,
        }
    }

    pub(crate) fn dependencies(&self) -> MembershipDependencies {
        self.dependencies_with_gate(Arc::new(CompanyPolicyGate::new()))
    }

    pub(crate) fn dependencies_with_gate(
        &self,
        gate: Arc<dyn CompanyGate>,
    ) -> MembershipDependencies {
        MembershipDependencies::new(
            gate,
            self.store.clone(),
            self.store.clone(),
            self.store.clone(),
            self.store.clone(),
            self.registry.clone(),
            Arc::new(IdentityTranslator),
        )
    }

    pub(crate) async fn snapshot(&self) -> CompanySnapshot {
        self.load(self.company_id).await
    }

    pub(crate) async fn personal_snapshot(&self) -> CompanySnapshot {
        self.load(self.personal_company_id).await
    }

    pub(crate) async fn load(&self, company_id: CompanyId) -> CompanySnapshot {
        self.store
            .load_snapshot(company_id)
            .await
            .ok()
            .flatten()
            .unwrap_or_else(|| panic!("test"))
    }

    pub(crate) fn owner_identity(&self) -> UserIdentity {
        identity(&self.owner)
    }

    pub(crate) fn editor_identity(&self) -> UserIdentity {
        identity(&self.editor)
    }

    pub(crate) fn outsider_identity(&self) -> UserIdentity {
        identity(&self.outsider)
    }

    pub(crate) async fn invite_pending(&self, email: &str) -> CompanyInvitation {
        let invitation = CompanyInvitation::new(
            self.company_id,
            EmailAddress::new(email).unwrap_or_else(|_| panic!("test")),
            Some("editor".to_owned()),
        );
        self.store
            .invitations
            .lock()
            .await
            .push(invitation.clone());
        invitation
    }
}
