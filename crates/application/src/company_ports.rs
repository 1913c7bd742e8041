mod audit;
mod repositories;

pub use audit::{AuditEvent, AuditRepository};
pub use repositories::{CompanyRepository, InvitationRepository, UserRepository};
