//! Company (tenant) entities and the membership aggregate.

use chrono::{DateTime, Utc};
use roster_core::{AppError, AppResult, CompanyId, InvitationId, NonEmptyString, UserId};
use serde::{Deserialize, Serialize};

use crate::permission::{owner_permissions, permission_granted};
use crate::registry::RoleRegistry;
use crate::role::Role;
use crate::user::{EmailAddress, User};

/// Role key reported for the company owner.
pub const OWNER_ROLE_KEY: &str = "owner";

/// Organizational unit owning employees and invitations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Stable company identifier.
    pub id: CompanyId,
    /// User who created and owns the company.
    pub owner_id: UserId,
    /// Display name.
    pub name: String,
    /// Marks the company created automatically for its owner at registration.
    pub personal_company: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Company {
    /// Creates a company owned by the given user.
    pub fn new(owner_id: UserId, name: impl Into<String>, personal_company: bool) -> AppResult<Self> {
        let name = NonEmptyString::new(name)
            .map_err(|_| AppError::Validation("company name must not be empty".to_owned()))?;
        let now = Utc::now();

        Ok(Self {
            id: CompanyId::new(),
            owner_id,
            name: String::from(name),
            personal_company,
            created_at: now,
            updated_at: now,
        })
    }

    /// Returns whether the user owns this company.
    #[must_use]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}

/// A user attached to a company with a role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyEmployee {
    /// Employee account.
    pub user: User,
    /// Role key; absent when the application defines no roles.
    pub role: Option<String>,
}

/// Pending request for an email address to join a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInvitation {
    /// Stable invitation identifier.
    pub id: InvitationId,
    /// Company the invitation belongs to.
    pub company_id: CompanyId,
    /// Invited email address.
    pub email: EmailAddress,
    /// Role granted on acceptance.
    pub role: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl CompanyInvitation {
    /// Creates an invitation for an email address.
    #[must_use]
    pub fn new(company_id: CompanyId, email: EmailAddress, role: Option<String>) -> Self {
        Self {
            id: InvitationId::new(),
            company_id,
            email,
            role,
            created_at: Utc::now(),
        }
    }
}

/// Company together with its owner, employees and pending invitations.
///
/// Snapshots are read from persistence as a whole and replaced as a whole;
/// nothing mutates one in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanySnapshot {
    company: Company,
    owner: User,
    employees: Vec<CompanyEmployee>,
    invitations: Vec<CompanyInvitation>,
}

impl CompanySnapshot {
    /// Assembles a snapshot from persisted parts.
    pub fn new(
        company: Company,
        owner: User,
        employees: Vec<CompanyEmployee>,
        invitations: Vec<CompanyInvitation>,
    ) -> AppResult<Self> {
        if owner.id != company.owner_id {
            return Err(AppError::Internal(format!(
                "owner '{}' does not own company '{}'",
                owner.id, company.id
            )));
        }

        Ok(Self {
            company,
            owner,
            employees,
            invitations,
        })
    }

    /// Returns the company record.
    #[must_use]
    pub fn company(&self) -> &Company {
        &self.company
    }

    /// Returns the company identifier.
    #[must_use]
    pub fn id(&self) -> CompanyId {
        self.company.id
    }

    /// Returns the owner account.
    #[must_use]
    pub fn owner(&self) -> &User {
        &self.owner
    }

    /// Returns employees, excluding the owner.
    #[must_use]
    pub fn employees(&self) -> &[CompanyEmployee] {
        &self.employees
    }

    /// Returns pending invitations.
    #[must_use]
    pub fn invitations(&self) -> &[CompanyInvitation] {
        &self.invitations
    }

    /// Returns the owner followed by every employee.
    pub fn all_users(&self) -> impl Iterator<Item = &User> {
        std::iter::once(&self.owner).chain(self.employees.iter().map(|employee| &employee.user))
    }

    /// Returns whether the user owns the company.
    #[must_use]
    pub fn owns(&self, user_id: UserId) -> bool {
        self.company.is_owned_by(user_id)
    }

    /// Returns the employee record for a user.
    #[must_use]
    pub fn employee(&self, user_id: UserId) -> Option<&CompanyEmployee> {
        self.employees
            .iter()
            .find(|employee| employee.user.id == user_id)
    }

    /// Returns whether the user is the owner or an employee.
    #[must_use]
    pub fn has_user(&self, user_id: UserId) -> bool {
        self.owns(user_id) || self.employee(user_id).is_some()
    }

    /// Returns whether the owner or an employee uses the email address.
    #[must_use]
    pub fn has_user_with_email(&self, email: &EmailAddress) -> bool {
        self.all_users().any(|user| &user.email == email)
    }

    /// Returns whether an invitation is pending for the email address.
    #[must_use]
    pub fn has_invitation_for(&self, email: &EmailAddress) -> bool {
        self.invitations
            .iter()
            .any(|invitation| &invitation.email == email)
    }

    /// Returns the role key a user holds on this company.
    ///
    /// The owner reports [`OWNER_ROLE_KEY`]; outsiders and role-less employees report `None`.
    #[must_use]
    pub fn role_key_for(&self, user_id: UserId) -> Option<String> {
        if self.owns(user_id) {
            return Some(OWNER_ROLE_KEY.to_owned());
        }

        self.employee(user_id)
            .and_then(|employee| employee.role.clone())
    }

    /// Resolves the role a user holds on this company.
    #[must_use]
    pub fn company_role(&self, user_id: UserId, registry: &RoleRegistry) -> Option<Role> {
        if self.owns(user_id) {
            return Some(owner_role());
        }

        self.employee(user_id)
            .and_then(|employee| employee.role.as_deref())
            .and_then(|key| registry.find(key))
            .cloned()
    }

    /// Returns the permissions a user holds on this company.
    #[must_use]
    pub fn permissions_for(&self, user_id: UserId, registry: &RoleRegistry) -> Vec<String> {
        if self.owns(user_id) {
            return owner_permissions();
        }

        if !self.has_user(user_id) {
            return Vec::new();
        }

        self.company_role(user_id, registry)
            .map(|role| role.permissions().to_vec())
            .unwrap_or_default()
    }

    /// Returns whether a user holds a permission on this company.
    #[must_use]
    pub fn has_permission(&self, user_id: UserId, registry: &RoleRegistry, permission: &str) -> bool {
        permission_granted(self.permissions_for(user_id, registry).as_slice(), permission)
    }
}

/// Built-in role describing the company owner.
#[must_use]
pub fn owner_role() -> Role {
    Role::new(OWNER_ROLE_KEY, "Owner", owner_permissions())
        .description("Owners can perform any action within the company.")
}

/// Abilities checked against a company before it is read or changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyAbility {
    /// Read the company and its members.
    View,
    /// Create a new company.
    Create,
    /// Change company settings.
    Update,
    /// Add or invite employees.
    AddEmployee,
    /// Change an employee's role.
    UpdateEmployee,
    /// Remove an employee.
    RemoveEmployee,
    /// Delete the company.
    Delete,
}

impl CompanyAbility {
    /// Returns a stable identifier for this ability.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Create => "create",
            Self::Update => "update",
            Self::AddEmployee => "addCompanyEmployee",
            Self::UpdateEmployee => "updateCompanyEmployee",
            Self::RemoveEmployee => "removeCompanyEmployee",
            Self::Delete => "delete",
        }
    }
}
