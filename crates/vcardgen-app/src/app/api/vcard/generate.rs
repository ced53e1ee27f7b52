//! `POST /api/vcard` handler.

use salvo::http::StatusCode;
use salvo::http::form::FilePart;
use salvo::http::header::CONTENT_LENGTH;
use salvo::{Depot, Request, Response, handler};

use vcardgen_service::contact::{ContactField, ContactSubmission, PhotoUpload, UploadStatus};
use vcardgen_service::error::{ServiceError, ServiceResult};

use super::response::{write_error, write_validation_errors, write_vcard};
use crate::config::{get_config_from_depot, max_request_bytes};
use crate::generator_handler::get_generator_from_depot;

/// Form field carrying the optional photo.
const PHOTO_FIELD: &str = "photo";

/// ## Summary
/// Reads the photo part of a multipart form.
///
/// A part without a file name and without content means the user chose no
/// file. A file larger than `max_bytes` is left on disk and only its size is
/// passed on. A file that cannot be read back from the upload buffer is
/// reported as a failed upload.
async fn read_photo(file: &FilePart, max_bytes: u64) -> PhotoUpload {
    let mime_type = file
        .content_type()
        .map(|mime| mime.to_string())
        .unwrap_or_default();

    if file.size() == 0 && file.name().is_none_or(str::is_empty) {
        return PhotoUpload {
            mime_type,
            status: UploadStatus::NoFile,
            ..PhotoUpload::default()
        };
    }

    if file.size() > max_bytes {
        tracing::debug!(size = file.size(), max_bytes, "Photo not read: over size cap");
        return PhotoUpload::unread(mime_type, file.size());
    }

    match tokio::fs::read(file.path()).await {
        Ok(bytes) => PhotoUpload::new(mime_type, bytes),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read uploaded photo");
            PhotoUpload::failed(mime_type)
        }
    }
}

/// ## Summary
/// Collects the contact fields and the optional photo from a form body
/// (`multipart/form-data` or `application/x-www-form-urlencoded`).
///
/// Unknown fields are ignored; for a repeated field the last value wins.
///
/// ## Errors
/// Returns `ServiceError::MalformedRequest` if the body is not a readable form.
async fn read_submission(
    req: &mut Request,
    photo_max_bytes: u64,
) -> ServiceResult<ContactSubmission> {
    let form = req
        .form_data()
        .await
        .map_err(|e| ServiceError::MalformedRequest(e.to_string()))?;

    let mut submission = ContactSubmission::default();
    for field in ContactField::ALL {
        if let Some(value) = form
            .fields
            .get_vec(field.as_str())
            .and_then(|values| values.last())
        {
            submission.set(field, value.as_str());
        }
    }

    if let Some(file) = form.files.get(PHOTO_FIELD) {
        submission.photo = Some(read_photo(file, photo_max_bytes).await);
    }

    Ok(submission)
}

/// Body length the client declared, if any.
fn declared_length(req: &Request) -> Option<u64> {
    req.headers()
        .get(CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

/// ## Summary
/// Generates a vCard from the submitted form.
///
/// ## Side Effects
/// - Reads the request body (bounded by `server.max_request_bytes`)
/// - Reads the uploaded photo from its temporary file
///
/// ## Errors
/// Returns 422 with `{"errors": {...}}` for invalid fields, 400 with
/// `{"error": "..."}` for an unreadable body, 413 when the declared body
/// length is over `server.max_request_bytes` and 500 if the handler is not
/// wired up.
#[handler]
#[tracing::instrument(skip_all, fields(path = %req.uri().path()))]
pub async fn generate(req: &mut Request, depot: &mut Depot, res: &mut Response) {
    tracing::info!("Handling vCard generation request");

    let generator = match get_generator_from_depot(depot) {
        Ok(generator) => generator,
        Err(e) => {
            tracing::error!(error = %e, "vCard generator not available");
            write_error(res, StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
            return;
        }
    };

    let settings = match get_config_from_depot(depot) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(error = %e, "Configuration not available");
            write_error(res, StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
            return;
        }
    };

    let limit = settings.server.max_request_bytes;
    if let Some(length) = declared_length(req).filter(|length| *length > limit) {
        tracing::warn!(length, limit, "Rejecting oversized vCard request");
        write_error(res, StatusCode::PAYLOAD_TOO_LARGE, "Request body too large");
        return;
    }
    req.set_secure_max_size(max_request_bytes(&settings));

    let photo_max_bytes = generator.options().photo_max_bytes;
    let submission = match read_submission(req, photo_max_bytes).await {
        Ok(submission) => submission,
        Err(e) => {
            tracing::warn!(error = %e, "Rejecting malformed vCard request");
            write_error(res, StatusCode::BAD_REQUEST, e.to_string());
            return;
        }
    };

    match generator.generate(&submission) {
        Ok(document) => {
            tracing::debug!(octets = document.len(), "Sending vCard");
            write_vcard(res, document);
        }
        Err(ServiceError::Validation(errors)) => {
            tracing::info!(fields = errors.len(), "vCard request failed validation");
            write_validation_errors(res, &errors);
        }
        Err(e) => {
            tracing::error!(error = %e, "vCard generation failed");
            write_error(res, StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
        }
    }
}
