//! Role definitions loaded from configuration.

use std::path::Path;

use roster_core::{AppError, AppResult};
use roster_domain::{Role, RoleRegistry};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
struct RoleDefinition {
    key: String,
    name: String,
    #[serde(default)]
    permissions: Vec<String>,
    description: String,
}

impl From<RoleDefinition> for Role {
    fn from(definition: RoleDefinition) -> Self {
        Role::new(definition.key, definition.name, definition.permissions)
            .description(definition.description)
    }
}

/// Returns the roles applications start with when none are configured.
#[must_use]
pub fn default_roles() -> Vec<Role> {
    vec![
        Role::new(
            "admin",
            "Administrator",
            ["create", "read", "update", "delete"],
        )
        .description("Administrator users can perform any action."),
        Role::new("editor", "Editor", ["read", "create", "update"])
            .description("Editor users have the ability to read, create, and update."),
    ]
}

/// Parses a JSON array of role definitions into a registry.
///
/// Registry order follows the array order.
pub fn parse_role_registry(json: &str) -> AppResult<RoleRegistry> {
    let definitions: Vec<RoleDefinition> = serde_json::from_str(json)
        .map_err(|error| AppError::Validation(format!("invalid role definitions: {error}")))?;

    RoleRegistry::new(definitions.into_iter().map(Role::from).collect())
}

/// Loads the role registry from a JSON file, or the default roles when no path is given.
pub async fn load_role_registry(path: Option<&Path>) -> AppResult<RoleRegistry> {
    let Some(path) = path else {
        return RoleRegistry::new(default_roles());
    };

    let contents = tokio::fs::read_to_string(path).await.map_err(|error| {
        AppError::Internal(format!(
            "failed to read role definitions '{}': {error}",
            path.display()
        ))
    })?;

    let registry = parse_role_registry(contents.as_str())?;
    info!(
        path = %path.display(),
        roles = registry.roles().len(),
        "role definitions loaded"
    );

    Ok(registry)
}
