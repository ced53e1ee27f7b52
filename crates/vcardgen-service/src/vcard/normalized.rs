use crate::contact::{
    ContactField, ContactSubmission, DomainAsciiFolder, normalize_email, normalize_phone,
    normalize_url, sanitize,
};

/// ## Summary
/// Contact values after sanitizing and normalization, ready for encoding.
///
/// A field is `None` when it was not supplied or became empty while being
/// cleaned (e.g. a phone number without digits).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedContact {
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
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}

impl NormalizedContact {
    /// Cleans every supplied field of `submission`.
    #[must_use]
    pub fn from_submission(submission: &ContactSubmission, folder: &dyn DomainAsciiFolder) -> Self {
        let text = |field: ContactField| submission.value(field).map(sanitize).and_then(non_empty);
        let email = |field: ContactField| {
            submission
                .value(field)
                .map(|v| sanitize(&normalize_email(v, folder)))
                .and_then(non_empty)
        };
        let phone = |field: ContactField| {
            submission
                .value(field)
                .map(|v| normalize_phone(&sanitize(v)))
                .and_then(non_empty)
        };
        let url = |field: ContactField| {
            submission
                .value(field)
                .map(|v| sanitize(&normalize_url(v)))
                .and_then(non_empty)
        };

        Self {
            name: text(ContactField::Name),
            email: email(ContactField::Email),
            additional_email: email(ContactField::AdditionalEmail),
            mobile: phone(ContactField::Mobile),
            additional_mobile: phone(ContactField::AdditionalMobile),
            whatsapp: phone(ContactField::Whatsapp),
            organization: text(ContactField::Organization),
            title: text(ContactField::Title),
            address: text(ContactField::Address),
            website: url(ContactField::Website),
            linkedin: url(ContactField::Linkedin),
        }
    }

    /// Returns the WhatsApp number when it is not already listed as a phone.
    #[must_use]
    pub fn distinct_whatsapp(&self) -> Option<&str> {
        let whatsapp = self.whatsapp.as_deref()?;
        let listed = [self.mobile.as_deref(), self.additional_mobile.as_deref()];
        (!listed.contains(&Some(whatsapp))).then_some(whatsapp)
    }
}
