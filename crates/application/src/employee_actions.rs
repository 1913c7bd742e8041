//! Membership mutators: add, invite, update-role and remove employees.
//!
//! Every mutator reloads the company before deciding, authorizes through the
//! [`CompanyGate`], validates its input into a named error bag, persists one
//! change and appends an audit event.

mod add;
mod invite;
mod remove;
mod rules;
mod update_role;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use async_trait::async_trait;
use roster_core::{AppError, AppResult, CompanyId, UserId, UserIdentity};
use roster_domain::{CompanySnapshot, RoleRegistry, Translator, User};

use crate::{AuditRepository, CompanyGate, CompanyRepository, InvitationRepository, UserRepository};

pub use add::AddCompanyEmployee;
pub use invite::InviteCompanyEmployee;
pub use remove::RemoveCompanyEmployee;
pub use rules::{
    ADD_EMPLOYEE_ERROR_BAG, REMOVE_EMPLOYEE_ERROR_BAG, UPDATE_ROLE_ERROR_BAG,
};
pub use update_role::UpdateCompanyEmployeeRole;

/// Adds an existing user to a company.
#[async_trait]
pub trait AddsCompanyEmployees: Send + Sync {
    /// Attaches the user registered under `email` with the given role.
    async fn add(
        &self,
        actor: &UserIdentity,
        company: &CompanySnapshot,
        email: &str,
        role: Option<&str>,
    ) -> AppResult<()>;
}

/// Invites an email address to join a company.
#[async_trait]
pub trait InvitesCompanyEmployees: Send + Sync {
    /// Records a pending invitation for `email` with the given role.
    async fn invite(
        &self,
        actor: &UserIdentity,
        company: &CompanySnapshot,
        email: &str,
        role: Option<&str>,
    ) -> AppResult<()>;
}

/// Changes the role an employee holds on a company.
#[async_trait]
pub trait UpdatesCompanyEmployeeRoles: Send + Sync {
    /// Replaces the role of `employee_id`.
    async fn update(
        &self,
        actor: &UserIdentity,
        company: &CompanySnapshot,
        employee_id: UserId,
        role: Option<&str>,
    ) -> AppResult<()>;
}

/// Removes an employee from a company; the actor may remove themselves.
#[async_trait]
pub trait RemovesCompanyEmployees: Send + Sync {
    /// Detaches `employee` from the company.
    async fn remove(
        &self,
        actor: &UserIdentity,
        company: &CompanySnapshot,
        employee: &User,
    ) -> AppResult<()>;
}

/// Collaborators shared by the membership mutators.
#[derive(Clone)]
pub struct MembershipDependencies {
    gate: Arc<dyn CompanyGate>,
    companies: Arc<dyn CompanyRepository>,
    users: Arc<dyn UserRepository>,
    invitations: Arc<dyn InvitationRepository>,
    audit: Arc<dyn AuditRepository>,
    registry: Arc<RoleRegistry>,
    translator: Arc<dyn Translator>,
}

impl MembershipDependencies {
    /// Creates the dependency bundle.
    #[must_use]
    pub fn new(
        gate: Arc<dyn CompanyGate>,
        companies: Arc<dyn CompanyRepository>,
        users: Arc<dyn UserRepository>,
        invitations: Arc<dyn InvitationRepository>,
        audit: Arc<dyn AuditRepository>,
        registry: Arc<RoleRegistry>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            gate,
            companies,
            users,
            invitations,
            audit,
            registry,
            translator,
        }
    }

    /// Returns the authorization gate.
    #[must_use]
    pub fn gate(&self) -> &Arc<dyn CompanyGate> {
        &self.gate
    }

    /// Returns the company repository.
    #[must_use]
    pub fn companies(&self) -> &Arc<dyn CompanyRepository> {
        &self.companies
    }

    /// Returns the user repository.
    #[must_use]
    pub fn users(&self) -> &Arc<dyn UserRepository> {
        &self.users
    }

    /// Returns the invitation repository.
    #[must_use]
    pub fn invitations(&self) -> &Arc<dyn InvitationRepository> {
        &self.invitations
    }

    /// Returns the audit repository.
    #[must_use]
    pub fn audit(&self) -> &Arc<dyn AuditRepository> {
        &self.audit
    }

    /// Returns the role registry.
    #[must_use]
    pub fn registry(&self) -> &Arc<RoleRegistry> {
        &self.registry
    }

    /// Returns the translator.
    #[must_use]
    pub fn translator(&self) -> &Arc<dyn Translator> {
        &self.translator
    }

    /// Translates a user-facing message.
    #[must_use]
    pub fn translate(&self, key: &str) -> String {
        self.translator.translate(key)
    }
}

/// Reads the company aggregate as currently persisted.
pub async fn load_fresh_snapshot(
    companies: &dyn CompanyRepository,
    company_id: CompanyId,
) -> AppResult<CompanySnapshot> {
    companies
        .load_snapshot(company_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("company '{company_id}' not found")))
}
