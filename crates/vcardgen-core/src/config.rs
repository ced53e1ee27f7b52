use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{
    DEFAULT_FOLD_LIMIT, DEFAULT_MAX_REQUEST_BYTES, DEFAULT_PHOTO_MAX_BYTES, DEFAULT_PRODUCT_ID,
};
use crate::error::{CoreError, CoreResult};

/// Smallest fold limit that still fits any UTF-8 character on a line.
const MIN_FOLD_LIMIT: usize = 8;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub vcard: VCardConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_request_bytes: u64,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the bind address in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// ## Summary
/// Encoding knobs for generated cards.
#[derive(Debug, Clone, Deserialize)]
pub struct VCardConfig {
    /// Maximum octets per physical line before folding.
    pub fold_limit: usize,
    /// Largest photo, in bytes, that is embedded.
    pub photo_max_bytes: u64,
    /// Value of the PRODID line.
    pub product_id: String,
    /// Whether internationalized email domains are converted to punycode.
    pub idna: bool,
}

impl Default for VCardConfig {
    fn default() -> Self {
        Self {
            fold_limit: DEFAULT_FOLD_LIMIT,
            photo_max_bytes: DEFAULT_PHOTO_MAX_BYTES,
            product_id: DEFAULT_PRODUCT_ID.to_string(),
            idna: true,
        }
    }
}

impl VCardConfig {
    /// ## Summary
    /// Checks that the encoding settings can produce a well-formed card.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if the fold limit is too small
    /// to hold a multi-byte character or the photo cap is zero.
    pub fn validate(&self) -> CoreResult<()> {
        if self.fold_limit < MIN_FOLD_LIMIT {
            return Err(CoreError::InvalidConfiguration(format!(
                "vcard.fold_limit must be at least {MIN_FOLD_LIMIT}, got {}",
                self.fold_limit
            )));
        }
        if self.photo_max_bytes == 0 {
            return Err(CoreError::InvalidConfiguration(
                "vcard.photo_max_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional `config.toml`.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating the vCard section fails.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8699)?
            .set_default("server.max_request_bytes", DEFAULT_MAX_REQUEST_BYTES)?
            .set_default("logging.level", "info")?
            .set_default("vcard.fold_limit", u64::try_from(DEFAULT_FOLD_LIMIT)?)?
            .set_default("vcard.photo_max_bytes", DEFAULT_PHOTO_MAX_BYTES)?
            .set_default("vcard.product_id", DEFAULT_PRODUCT_ID)?
            .set_default("vcard.idna", true)?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Environment, e.g. VCARDGEN__VCARD__FOLD_LIMIT
            .add_source(
                config::Environment::with_prefix("VCARDGEN")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Self>()?;

        settings.vcard.validate()?;
        tracing::debug!(
            fold_limit = settings.vcard.fold_limit,
            photo_max_bytes = settings.vcard.photo_max_bytes,
            idna = settings.vcard.idna,
            "vCard settings validated"
        );

        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
