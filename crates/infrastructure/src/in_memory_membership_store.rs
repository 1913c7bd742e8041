mod companies;
mod invitations;
mod users;


use std::collections::HashMap;

use roster_core::{CompanyId, UserId};
use roster_domain::{Company, CompanyInvitation, User};
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct MembershipRow {
    company_id: CompanyId,
    user_id: UserId,
    role: Option<String>,
}

/// In-memory store for companies, users, memberships and invitations.
///
/// Implements every membership repository port so snapshots can be assembled
/// from one consistent set of tables.
#[derive(Debug, Default)]
pub struct InMemoryMembershipStore {
    companies: RwLock<HashMap<CompanyId, Company>>,
    users: RwLock<HashMap<UserId, User>>,
    memberships: RwLock<Vec<MembershipRow>>,
    invitations: RwLock<Vec<CompanyInvitation>>,
}

impl InMemoryMembershipStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            companies: RwLock::new(HashMap::new()),
            users: RwLock::new(HashMap::new()),
            memberships: RwLock::new(Vec::new()),
            invitations: RwLock::new(Vec::new()),
        }
    }
}
