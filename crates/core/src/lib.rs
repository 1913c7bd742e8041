//! Shared primitives for all Rust crates in Roster.

#![forbid(unsafe_code)]

/// Authentication primitives shared across services.
pub mod auth;
mod validation;

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub use auth::UserIdentity;
pub use validation::{DEFAULT_ERROR_BAG, ValidationMessages};

/// Result type used across Roster crates.
pub type AppResult<T> = Result<T, AppError>;

/// A validated non-empty UTF-8 string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Creates a validated non-empty string.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AppError::Validation(
                "value must not be empty or whitespace".to_owned(),
            ));
        }

        Ok(Self(value))
    }

    /// Returns the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

macro_rules! uuid_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a random identifier.
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an identifier from an existing UUID value.
            #[must_use]
            pub fn from_uuid(value: Uuid) -> Self {
                Self(value)
            }

            /// Parses an identifier from its hyphenated string form.
            pub fn parse(value: &str) -> AppResult<Self> {
                Uuid::parse_str(value.trim()).map(Self).map_err(|error| {
                    AppError::Validation(format!(
                        "invalid {} '{value}': {error}",
                        stringify!($name)
                    ))
                })
            }

            /// Returns the underlying UUID value.
            #[must_use]
            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Display for $name {
            fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
                write!(formatter, "{}", self.0)
            }
        }
    };
}

uuid_identifier!(
    /// Company identifier used as the partition key for memberships and invitations.
    CompanyId
);

uuid_identifier!(
    /// Unique identifier for a user record.
    UserId
);

uuid_identifier!(
    /// Identifier of a pending company invitation.
    InvitationId
);

/// Common application error categories.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input or violated invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Business rule rejected the input; carries user-facing messages keyed by field.
    #[error("validation error: {0}")]
    Invalid(ValidationMessages),

    /// Requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Write operation conflicts with existing state.
    #[error("conflict: {0}")]
    Conflict(String),

    /// User is not authenticated.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// User is authenticated but blocked by authorization policy.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the keyed messages when this is a business-rule rejection.
    #[must_use]
    pub fn validation_messages(&self) -> Option<&ValidationMessages> {
        match self {
            Self::Invalid(messages) => Some(messages),
            _ => None,
        }
    }
}

impl From<ValidationMessages> for AppError {
    fn from(value: ValidationMessages) -> Self {
        Self::Invalid(value)
    }
}
