use serde::{Deserialize, Serialize};

/// Stable audit actions emitted by membership use-cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// Emitted when a company is created.
    CompanyCreated,
    /// Emitted when a company is deleted.
    CompanyDeleted,
    /// Emitted when an existing user is attached to a company.
    CompanyEmployeeAdded,
    /// Emitted when an email address is invited to a company.
    CompanyEmployeeInvited,
    /// Emitted when a pending invitation is cancelled.
    CompanyInvitationCancelled,
    /// Emitted when an employee's role changes.
    CompanyEmployeeRoleUpdated,
    /// Emitted when an employee leaves or is removed.
    CompanyEmployeeRemoved,
}

impl AuditAction {
    /// Returns a stable storage value for this action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CompanyCreated => "company.created",
            Self::CompanyDeleted => "company.deleted",
            Self::CompanyEmployeeAdded => "company.employee.added",
            Self::CompanyEmployeeInvited => "company.employee.invited",
            Self::CompanyInvitationCancelled => "company.invitation.cancelled",
            Self::CompanyEmployeeRoleUpdated => "company.employee.role_updated",
            Self::CompanyEmployeeRemoved => "company.employee.removed",
        }
    }
}

/// Optional product features toggled by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Features {
    /// Invite employees by email instead of attaching existing users directly.
    pub company_invitations: bool,
}

impl Features {
    /// Returns whether adding an employee sends an invitation.
    #[must_use]
    pub fn sends_company_invitations(&self) -> bool {
        self.company_invitations
    }
}
