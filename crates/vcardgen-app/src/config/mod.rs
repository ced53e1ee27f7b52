use std::sync::Arc;

use salvo::async_trait;
pub use vcardgen_core::config::*;
use vcardgen_core::error::CoreError;

use crate::error::AppResult;

/// Hoop that makes the loaded settings available to handlers.
pub struct ConfigHandler {
    settings: Arc<Settings>,
}

impl ConfigHandler {
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }
}

#[async_trait]
impl salvo::Handler for ConfigHandler {
    #[tracing::instrument(skip_all)]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.settings));
    }
}

/// ## Summary
/// Retrieves the application configuration from the depot.
///
/// ## Errors
/// Returns an error if the configuration is not found in the depot.
pub fn get_config_from_depot(depot: &salvo::Depot) -> AppResult<Arc<Settings>> {
    depot
        .obtain::<Arc<Settings>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Configuration not found in depot").into())
}

/// ## Summary
/// Largest request body the card endpoint accepts, as a `usize` for salvo.
#[must_use]
pub fn max_request_bytes(settings: &Settings) -> usize {
    usize::try_from(settings.server.max_request_bytes).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests;
