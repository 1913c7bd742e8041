//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_membership_store;
mod json_translator;
mod role_catalog;
mod tracing_audit_repository;

pub use in_memory_membership_store::InMemoryMembershipStore;
pub use json_translator::JsonTranslator;
pub use role_catalog::{default_roles, load_role_registry, parse_role_registry};
pub use tracing_audit_repository::TracingAuditRepository;
