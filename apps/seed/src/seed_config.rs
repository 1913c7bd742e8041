use std::env;
use std::path::PathBuf;

use roster_application::DEFAULT_HOME_ROUTE;
use roster_core::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedConfig {
    pub roles_path: Option<PathBuf>,
    pub translations_path: Option<PathBuf>,
    pub company_invitations: bool,
    pub home_route: String,
}

impl SeedConfig {
    pub fn load() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let optional = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let roles_path = optional("ROSTER_ROLES_PATH").map(PathBuf::from);
        let translations_path = optional("ROSTER_TRANSLATIONS_PATH").map(PathBuf::from);

        let company_invitations = optional("ROSTER_COMPANY_INVITATIONS")
            .map(|value| parse_bool("ROSTER_COMPANY_INVITATIONS", value.as_str()))
            .transpose()?
            .unwrap_or(false);

        let home_route = optional("ROSTER_HOME_ROUTE")
            .map(|value| value.trim().to_owned())
            .unwrap_or_else(|| DEFAULT_HOME_ROUTE.to_owned());
        if !home_route.starts_with('/') {
            return Err(AppError::Validation(format!(
                "ROSTER_HOME_ROUTE must start with '/', got '{home_route}'"
            )));
        }

        Ok(Self {
            roles_path,
            translations_path,
            company_invitations,
            home_route,
        })
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, AppError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(AppError::Validation(format!(
            "{name} must be a boolean, got '{other}'"
        ))),
    }
}
