/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const VCARD_ROUTE_COMPONENT: &str = "vcard";
pub const VCARD_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", VCARD_ROUTE_COMPONENT);

/// Attachment name offered to the client for a generated card
pub const VCARD_FILENAME: &str = "contact.vcf";
pub const VCARD_CONTENT_TYPE: &str = "text/vcard; charset=UTF-8";
pub const VCARD_CONTENT_DISPOSITION: &str =
    const_str::concat!("attachment; filename=\"", VCARD_FILENAME, "\"");

/// Product identifier written to the PRODID line unless configured otherwise
pub const DEFAULT_PRODUCT_ID: &str = "-//vCard Generator//EN";

/// Default fold limit in octets
pub const DEFAULT_FOLD_LIMIT: usize = 75;

/// Default cap for an embedded photo (5 MiB)
pub const DEFAULT_PHOTO_MAX_BYTES: u64 = 5 * 1024 * 1024;

/// Default cap for a whole request body (8 MiB)
pub const DEFAULT_MAX_REQUEST_BYTES: u64 = 8 * 1024 * 1024;
