use serde::{Deserialize, Serialize};

use crate::{CompanyId, UserId};

/// Authenticated user acting on behalf of a request or interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    user_id: UserId,
    display_name: String,
    email: Option<String>,
    current_company_id: Option<CompanyId>,
}

impl UserIdentity {
    /// Creates a user identity from authentication and tenancy data.
    #[must_use]
    pub fn new(
        user_id: UserId,
        display_name: impl Into<String>,
        email: Option<String>,
        current_company_id: Option<CompanyId>,
    ) -> Self {
        Self {
            user_id,
            display_name: display_name.into(),
            email,
            current_company_id,
        }
    }

    /// Returns the stable user identifier.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the display name for the current user.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name.as_str()
    }

    /// Returns the email, if one is known.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the company the user is currently working in.
    #[must_use]
    pub fn current_company_id(&self) -> Option<CompanyId> {
        self.current_company_id
    }
}
