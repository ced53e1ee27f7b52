use std::sync::Arc;

use vcardgen_core::config::VCardConfig;
use vcardgen_rfc::rfc::vcard::VCardDocument;

use super::assemble::assemble;
use super::normalized::NormalizedContact;
use super::options::GeneratorOptions;
use crate::contact::{
    ContactSubmission, DomainAsciiFolder, IdnaFolder, NoopFolder, embed_photo,
    validate_submission,
};
use crate::error::ServiceResult;

/// ## Summary
/// Turns contact submissions into vCard 3.0 documents.
///
/// Holds only read-only settings, so one instance is shared by all requests.
#[derive(Debug, Clone)]
pub struct VCardGenerator {
    options: GeneratorOptions,
    folder: Arc<dyn DomainAsciiFolder + Send + Sync>,
}

impl Default for VCardGenerator {
    fn default() -> Self {
        Self::new(GeneratorOptions::default(), Arc::new(IdnaFolder))
    }
}

impl VCardGenerator {
    #[must_use]
    pub fn new(
        options: GeneratorOptions,
        folder: Arc<dyn DomainAsciiFolder + Send + Sync>,
    ) -> Self {
        Self { options, folder }
    }

    /// ## Summary
    /// Builds a generator from the `[vcard]` configuration section.
    ///
    /// ## Errors
    /// Returns `ServiceError::CoreError` if the configuration is invalid.
    pub fn from_config(config: &VCardConfig) -> ServiceResult<Self> {
        config.validate()?;

        let folder: Arc<dyn DomainAsciiFolder + Send + Sync> = if config.idna {
            Arc::new(IdnaFolder)
        } else {
            Arc::new(NoopFolder)
        };

        Ok(Self::new(GeneratorOptions::from(config), folder))
    }

    #[must_use]
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// ## Summary
    /// Validates, normalizes and encodes a submission.
    ///
    /// A photo that fails the type, size or upload checks is left out
    /// without an error.
    ///
    /// ## Errors
    /// Returns `ServiceError::Validation` with the first failing checkpoint's
    /// errors, or an RFC error if a property cannot be serialized.
    #[tracing::instrument(skip_all, fields(supplied = submission.supplied_fields().count()))]
    pub fn generate(&self, submission: &ContactSubmission) -> ServiceResult<VCardDocument> {
        validate_submission(submission)?;

        let contact = NormalizedContact::from_submission(submission, self.folder.as_ref());
        let photo = embed_photo(submission.photo.as_ref(), self.options.photo_max_bytes);
        let document = assemble(&contact, photo.as_ref(), &self.options)?;

        tracing::debug!(
            octets = document.len(),
            photo = photo.is_some(),
            "vCard generated"
        );

        Ok(document)
    }
}
