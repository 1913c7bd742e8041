//! Interaction controller for managing the employees of one company.
//!
//! The manager holds the state of a single interaction session: the acting
//! user, the company as last read from persistence, the add-employee form and
//! the confirmation flow currently open. Every successful mutation replaces the
//! company snapshot with a fresh read.

mod flow;


use std::sync::Arc;

use roster_core::{AppError, AppResult, InvitationId, UserId, UserIdentity, ValidationMessages};
use roster_domain::{AuditAction, CompanySnapshot, Features, SerializedRole, User};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::employee_actions::{
    AddCompanyEmployee, AddsCompanyEmployees, InviteCompanyEmployee, InvitesCompanyEmployees,
    MembershipDependencies, RemoveCompanyEmployee, RemovesCompanyEmployees,
    UpdateCompanyEmployeeRole, UpdatesCompanyEmployeeRoles, load_fresh_snapshot,
};
use crate::AuditEvent;

pub use flow::ManagerFlow;

/// Default route users are sent to after leaving a company.
pub const DEFAULT_HOME_ROUTE: &str = "/dashboard";

/// Presentation settings for the manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerSettings {
    /// Route returned as a redirect after the user leaves a company.
    pub home_route: String,
}

impl Default for ManagerSettings {
    fn default() -> Self {
        Self {
            home_route: DEFAULT_HOME_ROUTE.to_owned(),
        }
    }
}

/// Membership mutators invoked by the manager.
#[derive(Clone)]
pub struct MembershipMutators {
    /// Attaches registered users.
    pub adder: Arc<dyn AddsCompanyEmployees>,
    /// Records invitations.
    pub inviter: Arc<dyn InvitesCompanyEmployees>,
    /// Changes employee roles.
    pub role_updater: Arc<dyn UpdatesCompanyEmployeeRoles>,
    /// Removes employees.
    pub remover: Arc<dyn RemovesCompanyEmployees>,
}

impl MembershipMutators {
    /// Builds the default mutator implementations over shared dependencies.
    #[must_use]
    pub fn standard(dependencies: &MembershipDependencies) -> Self {
        Self {
            adder: Arc::new(AddCompanyEmployee::new(dependencies.clone())),
            inviter: Arc::new(InviteCompanyEmployee::new(dependencies.clone())),
            role_updater: Arc::new(UpdateCompanyEmployeeRole::new(dependencies.clone())),
            remover: Arc::new(RemoveCompanyEmployee::new(dependencies.clone())),
        }
    }
}

/// Everything a manager session needs besides its own state.
#[derive(Clone)]
pub struct EmployeeManagerServices {
    dependencies: MembershipDependencies,
    mutators: MembershipMutators,
    features: Features,
    settings: ManagerSettings,
}

impl EmployeeManagerServices {
    /// Creates the service bundle.
    #[must_use]
    pub fn new(
        dependencies: MembershipDependencies,
        mutators: MembershipMutators,
        features: Features,
        settings: ManagerSettings,
    ) -> Self {
        Self {
            dependencies,
            mutators,
            features,
            settings,
        }
    }

    /// Returns the enabled features.
    #[must_use]
    pub fn features(&self) -> Features {
        self.features
    }

    /// Returns the presentation settings.
    #[must_use]
    pub fn settings(&self) -> &ManagerSettings {
        &self.settings
    }
}

/// State of the "add company employee" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddEmployeeForm {
    /// Email of the user to add or invite.
    pub email: String,
    /// Role key to grant.
    pub role: Option<String>,
}

/// Signals emitted for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManagerEvent {
    /// An employee was added or invited.
    Saved,
}

/// Instruction to navigate to another route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redirect {
    /// Target route.
    pub route: String,
}

/// Controller for one company's employee management session.
pub struct CompanyEmployeeManager {
    services: EmployeeManagerServices,
    actor: UserIdentity,
    company: CompanySnapshot,
    flow: ManagerFlow,
    add_employee_form: AddEmployeeForm,
    errors: ValidationMessages,
    events: Vec<ManagerEvent>,
}

impl CompanyEmployeeManager {
    /// Starts a session for the acting user on a company.
    #[must_use]
    pub fn mount(
        services: EmployeeManagerServices,
        actor: UserIdentity,
        company: CompanySnapshot,
    ) -> Self {
        Self {
            services,
            actor,
            company,
            flow: ManagerFlow::Idle,
            add_employee_form: AddEmployeeForm::default(),
            errors: ValidationMessages::new(),
            events: Vec::new(),
        }
    }

    /// Returns the acting user.
    #[must_use]
    pub fn actor(&self) -> &UserIdentity {
        &self.actor
    }

    /// Returns the company as last read from persistence.
    #[must_use]
    pub fn company(&self) -> &CompanySnapshot {
        &self.company
    }

    /// Returns the open confirmation flow.
    #[must_use]
    pub fn flow(&self) -> &ManagerFlow {
        &self.flow
    }

    /// Returns the messages of the last rejected action.
    #[must_use]
    pub fn errors(&self) -> &ValidationMessages {
        &self.errors
    }

    /// Returns the add-employee form.
    #[must_use]
    pub fn add_employee_form(&self) -> &AddEmployeeForm {
        &self.add_employee_form
    }

    /// Returns the add-employee form for editing.
    pub fn add_employee_form_mut(&mut self) -> &mut AddEmployeeForm {
        &mut self.add_employee_form
    }

    /// Drains the events emitted since the last call.
    pub fn take_events(&mut self) -> Vec<ManagerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Returns the assignable roles in registry order.
    #[must_use]
    pub fn roles(&self) -> Vec<SerializedRole> {
        let dependencies = &self.services.dependencies;
        dependencies
            .registry()
            .serialize_all(dependencies.translator().as_ref())
    }

    /// Adds or invites the employee described by the form.
    pub async fn add_company_employee(&mut self) -> AppResult<()> {
        self.errors.clear();

        let email = self.add_employee_form.email.clone();
        let role = self.add_employee_form.role.clone();
        let mutators = self.services.mutators.clone();

        let result = if self.services.features.sends_company_invitations() {
            mutators
                .inviter
                .invite(&self.actor, &self.company, email.as_str(), role.as_deref())
                .await
        } else {
            mutators
                .adder
                .add(&self.actor, &self.company, email.as_str(), role.as_deref())
                .await
        };
        self.capture(result)?;

        self.add_employee_form = AddEmployeeForm::default();
        self.refresh_company().await?;
        self.events.push(ManagerEvent::Saved);

        Ok(())
    }

    /// Deletes a pending invitation of this company.
    ///
    /// A blank identifier only refreshes the company.
    pub async fn cancel_company_invitation(&mut self, invitation_id: &str) -> AppResult<()> {
        if !invitation_id.trim().is_empty() {
            let invitation_id = InvitationId::parse(invitation_id)?;
            let dependencies = self.services.dependencies.clone();
            let company_id = self.company.id();

            let invitation = dependencies
                .invitations()
                .find_invitation(invitation_id)
                .await?
                .filter(|invitation| invitation.company_id == company_id);

            let deleted = match invitation {
                Some(invitation) => {
                    let deleted = dependencies
                        .invitations()
                        .delete_invitation(company_id, invitation.id)
                        .await?;

                    if deleted {
                        dependencies
                            .audit()
                            .append_event(AuditEvent {
                                company_id,
                                actor_id: self.actor.user_id(),
                                action: AuditAction::CompanyInvitationCancelled,
                                resource_type: "company_invitation".to_owned(),
                                resource_id: invitation.id.to_string(),
                                detail: Some(format!("cancelled '{}'", invitation.email)),
                            })
                            .await?;
                    }

                    deleted
                }
                None => false,
            };

            debug!(
                company_id = %company_id,
                invitation_id = %invitation_id,
                deleted,
                "company invitation cancellation handled"
            );
        }

        self.refresh_company().await
    }

    /// Opens role management for a user, starting from their stored role.
    pub async fn manage_role(&mut self, user_id: UserId) -> AppResult<()> {
        let user = self.find_user(user_id).await?;
        self.refresh_company().await?;
        let role = self.company.role_key_for(user.id);

        self.flow = ManagerFlow::ManagingRole { user, role };
        Ok(())
    }

    /// Changes the role selected in the open role-management flow.
    pub fn set_current_role(&mut self, role: impl Into<String>) -> AppResult<()> {
        match &mut self.flow {
            ManagerFlow::ManagingRole { role: current, .. } => {
                *current = Some(role.into());
                Ok(())
            }
            _ => Err(AppError::Conflict(
                "no employee role is being managed".to_owned(),
            )),
        }
    }

    /// Saves the role selected in the open role-management flow.
    pub async fn update_role(&mut self) -> AppResult<()> {
        let ManagerFlow::ManagingRole { user, role } = &self.flow else {
            return Err(AppError::Conflict(
                "no employee role is being managed".to_owned(),
            ));
        };
        let employee_id = user.id;
        let role = role.clone();
        let role_updater = self.services.mutators.role_updater.clone();

        let result = role_updater
            .update(&self.actor, &self.company, employee_id, role.as_deref())
            .await;
        self.capture(result)?;

        self.refresh_company().await?;
        self.flow = ManagerFlow::Idle;

        Ok(())
    }

    /// Closes role management without saving.
    pub fn stop_managing_role(&mut self) {
        if self.flow.is_managing_role() {
            self.flow = ManagerFlow::Idle;
        }
    }

    /// Opens the leave-company confirmation.
    pub fn confirm_leaving_company(&mut self) {
        self.flow = ManagerFlow::ConfirmingLeave;
    }

    /// Removes the acting user from the company and redirects home.
    pub async fn leave_company(&mut self) -> AppResult<Redirect> {
        let actor_id = self.actor.user_id();
        let user = self.find_user(actor_id).await?;
        let remover = self.services.mutators.remover.clone();

        let result = remover.remove(&self.actor, &self.company, &user).await;
        self.capture(result)?;

        self.flow = ManagerFlow::Idle;
        self.refresh_company().await?;

        info!(
            company_id = %self.company.id(),
            user_id = %actor_id,
            "user left company"
        );

        Ok(Redirect {
            route: self.services.settings.home_route.clone(),
        })
    }

    /// Opens the removal confirmation for an employee.
    pub fn confirm_company_employee_removal(&mut self, user_id: UserId) {
        self.flow = ManagerFlow::ConfirmingRemoval { user_id };
    }

    /// Removes the employee awaiting confirmation.
    pub async fn remove_company_employee(&mut self) -> AppResult<()> {
        let Some(user_id) = self.flow.employee_being_removed() else {
            return Err(AppError::Conflict(
                "no employee removal is awaiting confirmation".to_owned(),
            ));
        };

        let user = self.find_user(user_id).await?;
        let remover = self.services.mutators.remover.clone();

        let result = remover.remove(&self.actor, &self.company, &user).await;
        self.capture(result)?;

        self.flow = ManagerFlow::Idle;
        self.refresh_company().await
    }

    async fn find_user(&self, user_id: UserId) -> AppResult<User> {
        self.services
            .dependencies
            .users()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user '{user_id}' not found")))
    }

    async fn refresh_company(&mut self) -> AppResult<()> {
        self.company = load_fresh_snapshot(
            self.services.dependencies.companies().as_ref(),
            self.company.id(),
        )
        .await?;

        Ok(())
    }

    fn capture<T>(&mut self, result: AppResult<T>) -> AppResult<T> {
        if let Err(AppError::Invalid(messages)) = &result {
            warn!(
                company_id = %self.company.id(),
                error_bag = messages.bag(),
                "employee manager action rejected"
            );
            self.errors = messages.clone();
        }

        result
    }
}
