//! Contact submission model and per-field rules.

mod name;
mod normalize;
mod photo;
mod submission;
mod validate;

pub use name::{NameSplitter, split_last_token};
pub use normalize::{
    DomainAsciiFolder, IdnaFolder, NoopFolder, TRACKING_PARAMS, normalize_email, normalize_phone,
    normalize_url, sanitize,
};
pub use photo::{EmbeddedPhoto, PhotoType, embed_photo};
pub use submission::{ContactField, ContactSubmission, PhotoUpload, UploadStatus};
pub use validate::{
    CHECKPOINTS, Checkpoint, FieldError, ValidationErrorSet, is_valid_email, is_valid_url,
    validate_submission,
};
