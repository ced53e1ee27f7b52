//! Property ordering and document assembly.

use vcardgen_rfc::rfc::vcard::{VCardBuilder, VCardDocument, VCardParameter, VCardProperty, names};

use super::normalized::NormalizedContact;
use super::options::GeneratorOptions;
use crate::contact::{EmbeddedPhoto, NameSplitter};
use crate::error::ServiceResult;

const WHATSAPP_LINK_BASE: &str = "https://wa.me/";

/// `TEL` with one lowercase `type` parameter per value, the form most
/// address books read for preferred and messenger numbers.
fn tel_with_repeated_types(number: &str, types: &[&str]) -> VCardProperty {
    types.iter().fold(VCardProperty::text(names::TEL, number), |prop, t| {
        prop.with_param(VCardParameter::new("type", *t))
    })
}

fn typed(prop: VCardProperty, type_value: &str) -> VCardProperty {
    prop.with_param(VCardParameter::new("TYPE", type_value))
}

/// ## Summary
/// Returns the contact's properties in emission order.
///
/// Order: FN, N, EMAIL (primary, additional), TEL (mobile, additional,
/// WhatsApp), WhatsApp profile, ORG, X-ORGANIZATION, TITLE, X-TITLE, ADR,
/// URL (website), URL and profile (LinkedIn). Missing fields are skipped.
#[must_use]
pub fn contact_properties(
    contact: &NormalizedContact,
    name_splitter: NameSplitter,
) -> Vec<VCardProperty> {
    let mut props = Vec::with_capacity(20);

    if let Some(name) = &contact.name {
        props.push(VCardProperty::text(names::FN, name));
        props.push(VCardProperty::structured_name(&name_splitter(name)));
    }

    for email in [&contact.email, &contact.additional_email].into_iter().flatten() {
        props.push(typed(VCardProperty::text(names::EMAIL, email), "INTERNET"));
    }

    if let Some(mobile) = &contact.mobile {
        props.push(tel_with_repeated_types(mobile, &["CELL", "VOICE", "pref"]));
    }
    if let Some(additional) = &contact.additional_mobile {
        props.push(
            VCardProperty::text(names::TEL, additional)
                .with_param(VCardParameter::multi("TYPE", ["WORK", "VOICE"])),
        );
    }

    if let Some(whatsapp) = contact.distinct_whatsapp() {
        props.push(tel_with_repeated_types(whatsapp, &["CELL", "VOICE", "WHATSAPP"]));
    }
    if let Some(whatsapp) = &contact.whatsapp {
        let link = format!("{WHATSAPP_LINK_BASE}{}", whatsapp.trim_start_matches('+'));
        props.push(
            VCardProperty::uri(names::X_SOCIALPROFILE, link)
                .with_param(VCardParameter::new("type", "whatsapp"))
                .with_param(VCardParameter::new("x-user", whatsapp)),
        );
    }

    if let Some(org) = &contact.organization {
        props.push(VCardProperty::text(names::ORG, org));
        props.push(VCardProperty::text(names::X_ORGANIZATION, org));
    }
    if let Some(title) = &contact.title {
        props.push(VCardProperty::text(names::TITLE, title));
        props.push(VCardProperty::text(names::X_TITLE, title));
    }

    // Only the extended-address component is populated.
    if let Some(address) = &contact.address {
        props.push(typed(
            VCardProperty::structured(names::ADR, ["", "", address.as_str()]),
            "WORK",
        ));
    }

    if let Some(website) = &contact.website {
        props.push(typed(VCardProperty::text(names::URL, website), "WORK"));
    }
    if let Some(linkedin) = &contact.linkedin {
        props.push(typed(VCardProperty::text(names::URL, linkedin), "SOCIAL"));
        props.push(typed(
            VCardProperty::text(names::X_SOCIALPROFILE, linkedin),
            "linkedin",
        ));
    }

    props
}

/// ## Summary
/// Writes the complete document: header, contact properties, the optional
/// photo block and `END:VCARD`.
///
/// ## Errors
/// Returns an error if a property cannot be serialized.
pub fn assemble(
    contact: &NormalizedContact,
    photo: Option<&EmbeddedPhoto>,
    options: &GeneratorOptions,
) -> ServiceResult<VCardDocument> {
    let mut builder = VCardBuilder::new(&options.product_id, options.fold_limit);

    for property in contact_properties(contact, options.name_splitter) {
        builder.push(&property)?;
    }

    if let Some(photo) = photo {
        builder.push_prefolded(&photo.to_block())?;
    }

    Ok(builder.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::PhotoType;
    use vcardgen_rfc::rfc::vcard::StructuredName;

    fn crlf_lines(lines: &[&str]) -> String {
        lines.iter().map(|line| format!("{line}\r\n")).collect()
    }

    fn full_contact() -> NormalizedContact {
        NormalizedContact {
            name: Some("Jane Q. Public".to_string()),
            email: Some("jane@example.com".to_string()),
            additional_email: None,
            mobile: Some("+15551234567".to_string()),
            additional_mobile: Some("+15557654321".to_string()),
            whatsapp: Some("+15559999999".to_string()),
            organization: Some("Acme, Inc.".to_string()),
            title: Some("Engineer; Lead".to_string()),
            address: Some("1 Main St".to_string()),
            website: Some("https://example.com/".to_string()),
            linkedin: Some("https://www.linkedin.com/in/jane/".to_string()),
        }
    }

    #[test]
    fn full_document_in_order() {
        let document = assemble(&full_contact(), None, &GeneratorOptions::default());

        let expected = crlf_lines(&[
            "BEGIN:VCARD",
            "VERSION:3.0",
            "PRODID:-//vCard Generator//EN",
            "CHARSET:UTF-8",
            "FN:Jane Q. Public",
            "N:Public;Jane Q.;;;",
            "EMAIL;TYPE=INTERNET:jane@example.com",
            "TEL;type=CELL;type=VOICE;type=pref:+15551234567",
            "TEL;TYPE=WORK,VOICE:+15557654321",
            "TEL;type=CELL;type=VOICE;type=WHATSAPP:+15559999999",
            "X-SOCIALPROFILE;type=whatsapp;x-user=+15559999999:https://wa.me/15559999999",
            r"ORG:Acme\, Inc.",
            r"X-ORGANIZATION:Acme\, Inc.",
            r"TITLE:Engineer\; Lead",
            r"X-TITLE:Engineer\; Lead",
            "ADR;TYPE=WORK:;;1 Main St",
            "URL;TYPE=WORK:https://example.com/",
            "URL;TYPE=SOCIAL:https://www.linkedin.com/in/jane/",
            "X-SOCIALPROFILE;TYPE=linkedin:https://www.linkedin.com/in/jane/",
            "END:VCARD",
        ]);

        assert_eq!(document.map(VCardDocument::into_string).ok(), Some(expected));
    }

    #[test]
    fn empty_contact_is_header_and_footer() {
        let document = assemble(&NormalizedContact::default(), None, &GeneratorOptions::default());
        assert_eq!(
            document.map(VCardDocument::into_string).ok(),
            Some(crlf_lines(&[
                "BEGIN:VCARD",
                "VERSION:3.0",
                "PRODID:-//vCard Generator//EN",
                "CHARSET:UTF-8",
                "END:VCARD",
            ]))
        );
    }

    #[test]
    fn whatsapp_matching_mobile_only_emits_profile() {
        let contact = NormalizedContact {
            whatsapp: Some("+15551234567".to_string()),
            ..full_contact()
        };
        let props = contact_properties(&contact, crate::contact::split_last_token);

        assert!(
            !props
                .iter()
                .any(|p| p.name == names::TEL && p.has_type("WHATSAPP"))
        );
        assert_eq!(
            props
                .iter()
                .filter(|p| p.name == names::X_SOCIALPROFILE && p.has_type("whatsapp"))
                .count(),
            1
        );
    }

    #[test]
    fn both_emails_are_emitted_in_order() {
        let contact = NormalizedContact {
            email: Some("a@example.com".to_string()),
            additional_email: Some("b@example.com".to_string()),
            ..NormalizedContact::default()
        };
        let emails: Vec<_> = contact_properties(&contact, crate::contact::split_last_token)
            .into_iter()
            .filter_map(|p| p.as_text().map(str::to_string))
            .collect();
        assert_eq!(emails, ["a@example.com", "b@example.com"]);
    }

    #[test]
    fn custom_name_splitter_is_used() {
        fn family_first(full: &str) -> StructuredName {
            let (family, given) = full.split_once(' ').unwrap_or((full, ""));
            StructuredName::simple(family, given)
        }

        let contact = NormalizedContact {
            name: Some("Yamada Taro".to_string()),
            ..NormalizedContact::default()
        };
        let options = GeneratorOptions {
            name_splitter: family_first,
            ..GeneratorOptions::default()
        };
        let document = assemble(&contact, None, &options)
            .map(VCardDocument::into_string)
            .unwrap_or_default();

        assert!(document.contains("FN:Yamada Taro\r\n"));
        assert!(document.contains("N:Yamada;Taro;;;\r\n"));
    }

    #[test]
    fn photo_block_precedes_end() {
        let photo = EmbeddedPhoto {
            kind: PhotoType::Gif,
            data: "R0lGODlh".to_string(),
        };
        let document = assemble(
            &NormalizedContact::default(),
            Some(&photo),
            &GeneratorOptions::default(),
        )
        .map(VCardDocument::into_string)
        .unwrap_or_default();

        assert!(document.ends_with(
            "CHARSET:UTF-8\r\nPHOTO;ENCODING=BASE64;TYPE=GIF:\r\n R0lGODlh\r\nEND:VCARD\r\n"
        ));
    }

    #[test]
    fn long_values_are_folded() {
        let contact = NormalizedContact {
            address: Some(
                "Building 42, Floor 7, Suite 700, 1234 Very Long Avenue Name, Springfield"
                    .to_string(),
            ),
            ..NormalizedContact::default()
        };
        let document = assemble(&contact, None, &GeneratorOptions::default())
            .map(VCardDocument::into_string)
            .unwrap_or_default();

        assert!(document.contains("ADR;TYPE=WORK:;;Building 42\\, Floor 7"));
        assert!(document.contains("\r\n "));
        assert!(document.split("\r\n").all(|line| line.len() <= 76));
    }
}
