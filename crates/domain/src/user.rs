//! User domain types and validation rules.

use roster_core::{AppError, AppResult, CompanyId, UserId};
use serde::{Deserialize, Serialize};

/// Maximum length of an email address (RFC 5321 path limit).
pub const EMAIL_MAX_LENGTH: usize = 254;

/// Validated, lowercased email address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// Performs basic structural validation: non-empty, contains exactly one `@`,
    /// local part and domain are non-empty, domain contains at least one `.`.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        let trimmed = value.trim().to_lowercase();

        if trimmed.is_empty() {
            return Err(AppError::Validation(
                "email address must not be empty".to_owned(),
            ));
        }

        let Some((local, domain)) = trimmed.split_once('@') else {
            return Err(AppError::Validation(
                "email address must contain exactly one '@'".to_owned(),
            ));
        };

        if domain.contains('@') {
            return Err(AppError::Validation(
                "email address must contain exactly one '@'".to_owned(),
            ));
        }

        if local.is_empty() {
            return Err(AppError::Validation(
                "email local part must not be empty".to_owned(),
            ));
        }

        if domain.is_empty() || !domain.contains('.') {
            return Err(AppError::Validation(
                "email domain must contain at least one '.'".to_owned(),
            ));
        }

        if trimmed.len() > EMAIL_MAX_LENGTH {
            return Err(AppError::Validation(format!(
                "email address must not exceed {EMAIL_MAX_LENGTH} characters"
            )));
        }

        Ok(Self(trimmed))
    }

    /// Returns the validated email string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.0.as_str())
    }
}

/// Registered application user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable user identifier.
    pub id: UserId,
    /// Full display name.
    pub name: String,
    /// Login email address.
    pub email: EmailAddress,
    /// Company the user last switched to.
    pub current_company_id: Option<CompanyId>,
}

impl User {
    /// Creates a user without a current company.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>, email: EmailAddress) -> Self {
        Self {
            id,
            name: name.into(),
            email,
            current_company_id: None,
        }
    }

    /// Returns the first whitespace-separated part of the user's name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(self.name.as_str())
    }

    /// Returns whether the given company is the user's current one.
    #[must_use]
    pub fn is_current_company(&self, company_id: CompanyId) -> bool {
        self.current_company_id == Some(company_id)
    }
}
