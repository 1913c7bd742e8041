//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod company;
mod permission;
mod registry;
mod role;
mod security;
mod translation;
mod user;

pub use company::{
    Company, CompanyAbility, CompanyEmployee, CompanyInvitation, CompanySnapshot, OWNER_ROLE_KEY,
    owner_role,
};
pub use permission::{WILDCARD_PERMISSION, owner_permissions, permission_granted};
pub use registry::RoleRegistry;
pub use role::{Role, RoleBuilder, SerializedRole};
pub use security::{AuditAction, Features};
pub use translation::{IdentityTranslator, Translator};
pub use user::{EMAIL_MAX_LENGTH, EmailAddress, User};
