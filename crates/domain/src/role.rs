use serde::{Deserialize, Serialize};

use crate::permission::permission_granted;
use crate::translation::Translator;

/// Role that can be held by a company employee.
///
/// Roles are defined by configuration, never persisted, and always carry a
/// description. Build one with [`Role::new`] followed by
/// [`RoleBuilder::description`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    key: String,
    name: String,
    permissions: Vec<String>,
    description: String,
}

/// First construction step of a [`Role`], waiting for its description.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a role is only complete once it has a description"]
pub struct RoleBuilder {
    key: String,
    name: String,
    permissions: Vec<String>,
}

/// Presentation form of a role with its name and description translated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedRole {
    /// Stable role key.
    pub key: String,
    /// Translated display name.
    pub name: String,
    /// Translated description.
    pub description: String,
    /// Permissions in definition order.
    pub permissions: Vec<String>,
}

impl Role {
    /// Starts a role definition from its key, display name and permissions.
    #[allow(clippy::new_ret_no_self)]
    pub fn new<I, P>(key: impl Into<String>, name: impl Into<String>, permissions: I) -> RoleBuilder
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        RoleBuilder {
            key: key.into(),
            name: name.into(),
            permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Returns the stable role key.
    #[must_use]
    pub fn key(&self) -> &str {
        self.key.as_str()
    }

    /// Returns the untranslated display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the permissions in definition order.
    #[must_use]
    pub fn permissions(&self) -> &[String] {
        &self.permissions
    }

    /// Returns the untranslated description.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Returns whether this role grants the permission.
    #[must_use]
    pub fn grants(&self, permission: &str) -> bool {
        permission_granted(self.permissions.as_slice(), permission)
    }

    /// Returns the presentation form with translated name and description.
    #[must_use]
    pub fn serialize(&self, translator: &dyn Translator) -> SerializedRole {
        SerializedRole {
            key: self.key.clone(),
            name: translator.translate(self.name.as_str()),
            description: translator.translate(self.description.as_str()),
            permissions: self.permissions.clone(),
        }
    }
}

impl RoleBuilder {
    /// Attaches the description and completes the role.
    pub fn description(self, description: impl Into<String>) -> Role {
        Role {
            key: self.key,
            name: self.name,
            permissions: self.permissions,
            description: description.into(),
        }
    }
}
