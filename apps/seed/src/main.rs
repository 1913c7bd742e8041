//! Roster composition root: wires the in-memory adapters and walks through
//! a company membership lifecycle.

#![forbid(unsafe_code)]

mod demo;
mod seed_config;
mod seed_services;

use roster_core::AppError;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::seed_config::SeedConfig;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = SeedConfig::load()?;
    info!(
        company_invitations = config.company_invitations,
        home_route = %config.home_route,
        "roster seed starting"
    );

    let services = seed_services::build(&config).await?;
    demo::run(&services).await
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}
