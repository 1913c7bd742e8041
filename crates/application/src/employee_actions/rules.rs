use roster_core::ValidationMessages;
use roster_domain::EmailAddress;

use super::MembershipDependencies;

/// Error bag for the add/invite employee form.
pub const ADD_EMPLOYEE_ERROR_BAG: &str = "addCompanyEmployee";
/// Error bag for role changes.
pub const UPDATE_ROLE_ERROR_BAG: &str = "updateRole";
/// Error bag for employee removal.
pub const REMOVE_EMPLOYEE_ERROR_BAG: &str = "removeCompanyEmployee";

pub(super) const EMAIL_REQUIRED: &str = "The email field is required.";
pub(super) const EMAIL_INVALID: &str = "The email must be a valid email address.";
pub(super) const ROLE_REQUIRED: &str = "The role field is required.";
pub(super) const ROLE_INVALID: &str = "The role must be a valid role.";
pub(super) const USER_NOT_FOUND: &str =
    "We were unable to find a registered user with this email address.";
pub(super) const ALREADY_EMPLOYEE: &str = "This user already belongs to the company.";
pub(super) const ALREADY_INVITED: &str = "This user has already been invited to the company.";
pub(super) const OWNER_CANNOT_LEAVE: &str = "You may not leave a company that you created.";

/// Validates a required email field, recording failures under `email`.
pub(super) fn validate_email(
    dependencies: &MembershipDependencies,
    email: &str,
    messages: &mut ValidationMessages,
) -> Option<EmailAddress> {
    if email.trim().is_empty() {
        messages.add("email", dependencies.translate(EMAIL_REQUIRED));
        return None;
    }

    match EmailAddress::new(email) {
        Ok(email) => Some(email),
        Err(_) => {
            messages.add("email", dependencies.translate(EMAIL_INVALID));
            None
        }
    }
}

/// Validates the role field of the add/invite form.
///
/// Applications without roles store memberships without a role key, so the
/// field is ignored entirely in that case.
pub(super) fn validate_membership_role(
    dependencies: &MembershipDependencies,
    role: Option<&str>,
    messages: &mut ValidationMessages,
) -> Option<String> {
    if !dependencies.registry().has_roles() {
        return None;
    }

    validate_required_role(dependencies, role, messages)
}

/// Validates a role key that must name a registered role.
pub(super) fn validate_required_role(
    dependencies: &MembershipDependencies,
    role: Option<&str>,
    messages: &mut ValidationMessages,
) -> Option<String> {
    let Some(role) = role.map(str::trim).filter(|value| !value.is_empty()) else {
        messages.add("role", dependencies.translate(ROLE_REQUIRED));
        return None;
    };

    if !dependencies.registry().contains(role) {
        messages.add("role", dependencies.translate(ROLE_INVALID));
        return None;
    }

    Some(role.to_owned())
}
