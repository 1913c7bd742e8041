use std::collections::HashSet;

use roster_core::{AppError, AppResult};

use crate::role::{Role, SerializedRole};
use crate::translation::Translator;

/// Ordered set of roles available to company employees.
///
/// Loaded once at startup and shared read-only by every service that
/// enumerates or validates roles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleRegistry {
    roles: Vec<Role>,
}

impl RoleRegistry {
    /// Creates a registry, rejecting blank or duplicate role keys.
    pub fn new(roles: Vec<Role>) -> AppResult<Self> {
        let mut seen = HashSet::with_capacity(roles.len());

        for role in &roles {
            if role.key().trim().is_empty() {
                return Err(AppError::Validation(
                    "role key must not be empty or whitespace".to_owned(),
                ));
            }

            if !seen.insert(role.key()) {
                return Err(AppError::Validation(format!(
                    "role key '{}' is defined more than once",
                    role.key()
                )));
            }
        }

        Ok(Self { roles })
    }

    /// Creates a registry without roles; membership then carries no role key.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the roles in definition order.
    #[must_use]
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Returns whether any role is defined.
    #[must_use]
    pub fn has_roles(&self) -> bool {
        !self.roles.is_empty()
    }

    /// Finds a role by key.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&Role> {
        self.roles.iter().find(|role| role.key() == key)
    }

    /// Returns whether a role with the key is defined.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Returns every role in presentation form, preserving definition order.
    #[must_use]
    pub fn serialize_all(&self, translator: &dyn Translator) -> Vec<SerializedRole> {
        self.roles
            .iter()
            .map(|role| role.serialize(translator))
            .collect()
    }
}
