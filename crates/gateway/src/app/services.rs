use std::sync::Arc;

use gatekit_auth::{TokenCodec, TokenIssuer};
use gatekit_directory::InMemoryDirectory;
use gatekit_tenants::{InMemoryTenantStore, TenantService};

use crate::config::GatewayConfig;

/// Shared collaborators, wired once at startup and read-only thereafter.
pub struct AppServices {
    pub directory: Arc<InMemoryDirectory>,
    pub issuer: TokenIssuer,
    pub tenants: TenantService,
}

pub fn build_services(config: &GatewayConfig, codec: Arc<dyn TokenCodec>) -> AppServices {
    let directory = Arc::new(InMemoryDirectory::new());

    if let Err(e) = directory.seed_admin(&config.admin_identifier, &config.admin_secret) {
        tracing::warn!(error = %e, "failed to seed default admin principal");
    }

    let issuer = TokenIssuer::new(directory.clone(), codec, config.token_validity);
    let tenants = TenantService::new(Arc::new(InMemoryTenantStore::new()));

    AppServices {
        directory,
        issuer,
        tenants,
    }
}
