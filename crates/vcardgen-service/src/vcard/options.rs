use vcardgen_core::config::VCardConfig;
use vcardgen_core::constants::{DEFAULT_FOLD_LIMIT, DEFAULT_PHOTO_MAX_BYTES, DEFAULT_PRODUCT_ID};

use crate::contact::{NameSplitter, split_last_token};

/// Knobs of a [`VCardGenerator`](super::VCardGenerator).
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Maximum octets per physical line before folding.
    pub fold_limit: usize,
    /// Largest photo, in bytes, that is embedded.
    pub photo_max_bytes: u64,
    /// Value of the PRODID line.
    pub product_id: String,
    /// Derives the `N` components from the full name.
    pub name_splitter: NameSplitter,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            fold_limit: DEFAULT_FOLD_LIMIT,
            photo_max_bytes: DEFAULT_PHOTO_MAX_BYTES,
            product_id: DEFAULT_PRODUCT_ID.to_string(),
            name_splitter: split_last_token,
        }
    }
}

impl From<&VCardConfig> for GeneratorOptions {
    fn from(config: &VCardConfig) -> Self {
        Self {
            fold_limit: config.fold_limit,
            photo_max_bytes: config.photo_max_bytes,
            product_id: config.product_id.clone(),
            ..Self::default()
        }
    }
}
