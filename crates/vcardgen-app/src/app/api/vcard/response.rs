//! Response shaping for the card endpoint.

use salvo::Response;
use salvo::http::StatusCode;
use salvo::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use salvo::writing::Json;
use serde::Serialize;

use vcardgen_core::constants::{VCARD_CONTENT_DISPOSITION, VCARD_CONTENT_TYPE};
use vcardgen_rfc::rfc::vcard::VCardDocument;
use vcardgen_service::contact::ValidationErrorSet;

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// ## Summary
/// Field-level validation failure payload
#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse<'a> {
    pub errors: &'a ValidationErrorSet,
}

/// Error bodies must never be offered as a download.
fn clear_attachment(res: &mut Response) {
    res.headers_mut().remove(CONTENT_DISPOSITION);
}

/// ## Summary
/// Writes the card as a `contact.vcf` attachment.
pub fn write_vcard(res: &mut Response, document: VCardDocument) {
    res.status_code(StatusCode::OK);
    #[expect(clippy::let_underscore_must_use, reason = "Header addition failure is non-fatal")]
    let _ = res.add_header(CONTENT_TYPE, VCARD_CONTENT_TYPE, true);
    #[expect(clippy::let_underscore_must_use, reason = "Header addition failure is non-fatal")]
    let _ = res.add_header(CONTENT_DISPOSITION, VCARD_CONTENT_DISPOSITION, true);
    #[expect(clippy::let_underscore_must_use, reason = "Write body failure is non-fatal")]
    let _ = res.write_body(document.into_bytes());
}

/// ## Summary
/// Writes `{"errors": {...}}` with status 422.
pub fn write_validation_errors(res: &mut Response, errors: &ValidationErrorSet) {
    clear_attachment(res);
    res.status_code(StatusCode::UNPROCESSABLE_ENTITY);
    res.render(Json(ValidationErrorResponse { errors }));
}

/// ## Summary
/// Writes `{"error": "..."}` with the given status.
pub fn write_error(res: &mut Response, status: StatusCode, message: impl Into<String>) {
    clear_attachment(res);
    res.status_code(status);
    res.render(Json(ErrorResponse {
        error: message.into(),
    }));
}
