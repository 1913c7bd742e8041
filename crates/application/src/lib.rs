//! Application services and ports.

#![forbid(unsafe_code)]

mod company_creation;
mod company_deletion;
mod company_gate;
mod company_ports;
mod employee_actions;
mod employee_manager;

#[cfg(test)]
mod test_support;

pub use company_creation::CreateCompany;
pub use company_deletion::{DELETE_COMPANY_ERROR_BAG, DeleteCompany, ValidateCompanyDeletion};
pub use company_gate::{CompanyGate, CompanyPolicyGate, UNAUTHORIZED_MESSAGE};
pub use company_ports::{
    AuditEvent, AuditRepository, CompanyRepository, InvitationRepository, UserRepository,
};
pub use employee_actions::{
    ADD_EMPLOYEE_ERROR_BAG, AddCompanyEmployee, AddsCompanyEmployees, InviteCompanyEmployee,
    InvitesCompanyEmployees, MembershipDependencies, REMOVE_EMPLOYEE_ERROR_BAG,
    RemoveCompanyEmployee, RemovesCompanyEmployees, UPDATE_ROLE_ERROR_BAG,
    UpdateCompanyEmployeeRole, UpdatesCompanyEmployeeRoles, load_fresh_snapshot,
};
pub use employee_manager::{
    AddEmployeeForm, CompanyEmployeeManager, DEFAULT_HOME_ROUTE, EmployeeManagerServices,
    ManagerEvent, ManagerFlow, ManagerSettings, MembershipMutators, Redirect,
};
