// vCard generation endpoint.

use salvo::Router;

use crate::app::api::VCARD_ROUTE_COMPONENT;

pub mod generate;
pub mod response;

#[cfg(test)]
mod generate_tests;

#[must_use]
pub fn routes() -> Router {
    Router::with_path(VCARD_ROUTE_COMPONENT).post(generate::generate)
}
