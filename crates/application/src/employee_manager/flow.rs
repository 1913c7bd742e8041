use roster_core::UserId;
use roster_domain::User;

/// Confirmation flow currently open in an employee manager session.
///
/// At most one flow is open at a time; opening another replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ManagerFlow {
    /// Nothing awaits confirmation.
    #[default]
    Idle,
    /// Choosing a new role for an employee.
    ManagingRole {
        /// Employee whose role is being changed.
        user: User,
        /// Role key currently selected.
        role: Option<String>,
    },
    /// The acting user is about to leave the company.
    ConfirmingLeave,
    /// An employee is about to be removed.
    ConfirmingRemoval {
        /// Employee to remove.
        user_id: UserId,
    },
}

impl ManagerFlow {
    /// Returns whether an employee role is being managed.
    #[must_use]
    pub fn is_managing_role(&self) -> bool {
        matches!(self, Self::ManagingRole { .. })
    }

    /// Returns whether leaving the company awaits confirmation.
    #[must_use]
    pub fn is_confirming_leave(&self) -> bool {
        matches!(self, Self::ConfirmingLeave)
    }

    /// Returns whether an employee removal awaits confirmation.
    #[must_use]
    pub fn is_confirming_removal(&self) -> bool {
        matches!(self, Self::ConfirmingRemoval { .. })
    }

    /// Returns the employee whose role is being managed.
    #[must_use]
    pub fn managed_user(&self) -> Option<&User> {
        match self {
            Self::ManagingRole { user, .. } => Some(user),
            _ => None,
        }
    }

    /// Returns the role key selected while managing a role.
    #[must_use]
    pub fn current_role(&self) -> Option<&str> {
        match self {
            Self::ManagingRole { role, .. } => role.as_deref(),
            _ => None,
        }
    }

    /// Returns the employee awaiting removal.
    #[must_use]
    pub fn employee_being_removed(&self) -> Option<UserId> {
        match self {
            Self::ConfirmingRemoval { user_id } => Some(*user_id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use roster_core::UserId;

    use super::ManagerFlow;

    #[test]
    fn only_one_flow_reports_active() {
        let user_id = UserId::new();
        let removal = ManagerFlow::ConfirmingRemoval { user_id };

        assert!(removal.is_confirming_removal());
        assert!(!removal.is_confirming_leave());
        assert!(!removal.is_managing_role());
        assert_eq!(removal.employee_being_removed(), Some(user_id));
        assert!(removal.current_role().is_none());
        assert_eq!(ManagerFlow::default(), ManagerFlow::Idle);
    }
}
