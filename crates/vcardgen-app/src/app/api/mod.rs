mod app_specific;
pub mod vcard;

use salvo::Router;

// Re-export route constants from core
pub use vcardgen_core::constants::{
    API_ROUTE_COMPONENT, API_ROUTE_PREFIX, VCARD_ROUTE_COMPONENT, VCARD_ROUTE_PREFIX,
};

/// ## Summary
/// Constructs the API router: the card endpoint and the health check.
#[must_use]
pub fn routes() -> Router {
    Router::with_path(API_ROUTE_COMPONENT)
        .push(app_specific::routes())
        .push(vcard::routes())
}
