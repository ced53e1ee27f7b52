use salvo::async_trait;
use std::sync::Arc;

use crate::error::AppResult;
use vcardgen_core::error::CoreError;
use vcardgen_service::vcard::VCardGenerator;

/// Hoop that injects the shared [`VCardGenerator`] into the depot.
pub struct GeneratorHandler {
    pub generator: Arc<VCardGenerator>,
}

#[async_trait]
impl salvo::Handler for GeneratorHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.generator));
    }
}

/// ## Summary
/// Retrieves the vCard generator from the depot.
///
/// ## Errors
/// Returns an error if the generator is not found in the depot.
pub fn get_generator_from_depot(depot: &salvo::Depot) -> AppResult<Arc<VCardGenerator>> {
    depot
        .obtain::<Arc<VCardGenerator>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("vCard generator not found in depot").into())
}
