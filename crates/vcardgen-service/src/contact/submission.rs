//! Submitted contact fields.

use serde::Deserialize;

/// A named text field of a contact submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContactField {
    Name,
    Email,
    AdditionalEmail,
    Mobile,
    AdditionalMobile,
    Whatsapp,
    Organization,
    Title,
    Address,
    Website,
    Linkedin,
}

impl ContactField {
    pub const ALL: [Self; 11] = [
        Self::Name,
        Self::Email,
        Self::AdditionalEmail,
        Self::Mobile,
        Self::AdditionalMobile,
        Self::Whatsapp,
        Self::Organization,
        Self::Title,
        Self::Address,
        Self::Website,
        Self::Linkedin,
    ];

    /// Returns the form/JSON key of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::AdditionalEmail => "additionalEmail",
            Self::Mobile => "mobile",
            Self::AdditionalMobile => "additionalMobile",
            Self::Whatsapp => "whatsapp",
            Self::Organization => "organization",
            Self::Title => "title",
            Self::Address => "address",
            Self::Website => "website",
            Self::Linkedin => "linkedin",
        }
    }

    /// Looks up a field by its form/JSON key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == key)
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transport outcome of the photo upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadStatus {
    /// The file was received completely.
    #[default]
    Ok,
    /// The field was sent without a file.
    NoFile,
    /// The transport could not deliver the file.
    Failed,
}

/// Raw photo as handed over by the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhotoUpload {
    /// Declared MIME type, e.g. `image/png`.
    pub mime_type: String,
    /// Reported size in bytes.
    pub size: u64,
    /// File content.
    pub bytes: Vec<u8>,
    pub status: UploadStatus,
}

impl PhotoUpload {
    /// Creates a successfully received upload; the size is taken from the bytes.
    #[must_use]
    pub fn new(mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            size: u64::try_from(bytes.len()).unwrap_or(u64::MAX),
            bytes,
            status: UploadStatus::Ok,
        }
    }

    /// Creates an upload that was received but not read into memory because
    /// its reported size is already over the photo cap. Only the size is kept.
    #[must_use]
    pub fn unread(mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            mime_type: mime_type.into(),
            size,
            ..Self::default()
        }
    }

    /// Creates an upload the transport failed to deliver.
    #[must_use]
    pub fn failed(mime_type: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            status: UploadStatus::Failed,
            ..Self::default()
        }
    }
}

/// ## Summary
/// One request's worth of contact data.
///
/// Every text field is optional. A field counts as supplied when its trimmed
/// value is non-empty; blank values are treated exactly like missing ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub additional_email: Option<String>,
    pub mobile: Option<String>,
    pub additional_mobile: Option<String>,
    pub whatsapp: Option<String>,
    pub organization: Option<String>,
    pub title: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    #[serde(skip)]
    pub photo: Option<PhotoUpload>,
}

impl ContactSubmission {
    /// Builds a submission from key/value pairs; unknown keys are ignored and
    /// a repeated key keeps its last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut submission = Self::default();
        for (key, value) in pairs {
            if let Some(field) = ContactField::from_key(key.as_ref()) {
                submission.set(field, value);
            }
        }
        submission
    }

    fn slot_mut(&mut self, field: ContactField) -> &mut Option<String> {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::AdditionalEmail => &mut self.additional_email,
            ContactField::Mobile => &mut self.mobile,
            ContactField::AdditionalMobile => &mut self.additional_mobile,
            ContactField::Whatsapp => &mut self.whatsapp,
            ContactField::Organization => &mut self.organization,
            ContactField::Title => &mut self.title,
            ContactField::Address => &mut self.address,
            ContactField::Website => &mut self.website,
            ContactField::Linkedin => &mut self.linkedin,
        }
    }

    /// Returns the raw value of a field exactly as submitted.
    #[must_use]
    pub fn raw(&self, field: ContactField) -> Option<&str> {
        match field {
            ContactField::Name => self.name.as_deref(),
            ContactField::Email => self.email.as_deref(),
            ContactField::AdditionalEmail => self.additional_email.as_deref(),
            ContactField::Mobile => self.mobile.as_deref(),
            ContactField::AdditionalMobile => self.additional_mobile.as_deref(),
            ContactField::Whatsapp => self.whatsapp.as_deref(),
            ContactField::Organization => self.organization.as_deref(),
            ContactField::Title => self.title.as_deref(),
            ContactField::Address => self.address.as_deref(),
            ContactField::Website => self.website.as_deref(),
            ContactField::Linkedin => self.linkedin.as_deref(),
        }
    }

    /// Returns the trimmed value of a supplied field, or `None` when the
    /// field is missing or blank.
    #[must_use]
    pub fn value(&self, field: ContactField) -> Option<&str> {
        self.raw(field).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Sets a field.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    /// Sets a field, builder style.
    #[must_use]
    pub fn with(mut self, field: ContactField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Attaches a photo upload, builder style.
    #[must_use]
    pub fn with_photo(mut self, photo: PhotoUpload) -> Self {
        self.photo = Some(photo);
        self
    }

    /// Returns the fields that were supplied.
    pub fn supplied_fields(&self) -> impl Iterator<Item = ContactField> + '_ {
        ContactField::ALL
            .into_iter()
            .filter(|field| self.value(*field).is_some())
    }
}
