use std::sync::Arc;

use roster_application::{
    CompanyPolicyGate, EmployeeManagerServices, ManagerSettings, MembershipDependencies,
    MembershipMutators,
};
use roster_core::AppResult;
use roster_domain::{Features, IdentityTranslator, Translator};
use roster_infrastructure::{
    InMemoryMembershipStore, JsonTranslator, TracingAuditRepository, load_role_registry,
};
use tracing::info;

use crate::seed_config::SeedConfig;

pub struct SeedServices {
    pub store: Arc<InMemoryMembershipStore>,
    pub audit: Arc<TracingAuditRepository>,
    pub dependencies: MembershipDependencies,
    pub manager: EmployeeManagerServices,
}

pub async fn build(config: &SeedConfig) -> AppResult<SeedServices> {
    let registry = Arc::new(load_role_registry(config.roles_path.as_deref()).await?);

    let translator: Arc<dyn Translator> = match &config.translations_path {
        Some(path) => {
            let translator = JsonTranslator::from_path(path).await?;
            info!(entries = translator.len(), "translation catalog loaded");
            Arc::new(translator)
        }
        None => Arc::new(IdentityTranslator),
    };

    let store = Arc::new(InMemoryMembershipStore::new());
    let audit = Arc::new(TracingAuditRepository::new());

    let dependencies = MembershipDependencies::new(
        Arc::new(CompanyPolicyGate::new()),
        store.clone(),
        store.clone(),
        store.clone(),
        audit.clone(),
        registry,
        translator,
    );

    let manager = EmployeeManagerServices::new(
        dependencies.clone(),
        MembershipMutators::standard(&dependencies),
        Features {
            company_invitations: config.company_invitations,
        },
        ManagerSettings {
            home_route: config.home_route.clone(),
        },
    );

    Ok(SeedServices {
        store,
        audit,
        dependencies,
        manager,
    })
}
