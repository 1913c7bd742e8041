//! Permission strings and wildcard matching.
//!
//! Permissions are free-form identifiers such as `create`, `read` or
//! `post:update`. Three wildcards are recognised in a granted set:
//!
//! - `*` grants everything;
//! - `*:create` grants every permission ending in `:create`;
//! - `*:update` grants every permission ending in `:update`.

/// Permission granting every action.
pub const WILDCARD_PERMISSION: &str = "*";

const CREATE_SUFFIX: &str = ":create";
const UPDATE_SUFFIX: &str = ":update";
const CREATE_WILDCARD: &str = "*:create";
const UPDATE_WILDCARD: &str = "*:update";

/// Returns whether the granted permission set allows the requested permission.
#[must_use]
pub fn permission_granted<S: AsRef<str>>(granted: &[S], requested: &str) -> bool {
    let holds = |value: &str| granted.iter().any(|entry| entry.as_ref() == value);

    holds(requested)
        || holds(WILDCARD_PERMISSION)
        || (requested.ends_with(CREATE_SUFFIX) && holds(CREATE_WILDCARD))
        || (requested.ends_with(UPDATE_SUFFIX) && holds(UPDATE_WILDCARD))
}

/// Returns the permission set held by a company owner.
#[must_use]
pub fn owner_permissions() -> Vec<String> {
    vec![WILDCARD_PERMISSION.to_owned()]
}
