//! vCard document assembly.

use super::escape::escape_text;
use super::fold::fold_line;
use crate::error::{RfcError, RfcResult};
use crate::rfc::vcard::core::{VCardProperty, VCardValue, is_valid_name, names};

const VERSION: &str = "3.0";
const CHARSET: &str = "UTF-8";
const CRLF: &str = "\r\n";

/// Serializes a property as one unfolded, CRLF-terminated content line.
///
/// ## Errors
/// Returns an error if the property name, a parameter name, or a parameter
/// value cannot be represented.
pub fn serialize_property(property: &VCardProperty) -> RfcResult<String> {
    if !is_valid_name(&property.name) {
        return Err(RfcError::InvalidPropertyName(property.name.clone()));
    }

    let mut line = String::with_capacity(property.name.len() + 32);
    line.push_str(&property.name);

    for param in &property.params {
        param.write_to(&mut line)?;
    }

    line.push(':');
    match &property.value {
        VCardValue::Text(text) => line.push_str(&escape_text(text)),
        VCardValue::Structured(components) => {
            let escaped: Vec<String> = components.iter().map(|c| escape_text(c)).collect();
            line.push_str(&escaped.join(";"));
        }
        VCardValue::Uri(uri) => line.push_str(uri),
    }
    line.push_str(CRLF);

    Ok(line)
}

/// Incremental vCard 3.0 writer.
///
/// The header (`BEGIN`, `VERSION`, `PRODID`, `CHARSET`) is written on
/// construction and `END` on [`finish`](Self::finish). Every pushed property
/// is escaped and folded before it is appended.
#[derive(Debug)]
pub struct VCardBuilder {
    buf: String,
    fold_limit: usize,
}

impl VCardBuilder {
    /// Starts a new card.
    #[must_use]
    pub fn new(product_id: &str, fold_limit: usize) -> Self {
        let mut builder = Self {
            buf: String::with_capacity(512),
            fold_limit,
        };

        builder.write_header(names::BEGIN, "VCARD");
        builder.write_header(names::VERSION, VERSION);
        builder.write_header(names::PRODID, &escape_text(product_id));
        builder.write_header(names::CHARSET, CHARSET);

        builder
    }

    fn write_header(&mut self, name: &str, value: &str) {
        let line = format!("{name}:{value}{CRLF}");
        self.buf.push_str(&fold_line(&line, self.fold_limit));
    }

    /// Appends a property line.
    ///
    /// ## Errors
    /// Returns an error if the property cannot be serialized.
    pub fn push(&mut self, property: &VCardProperty) -> RfcResult<&mut Self> {
        let line = serialize_property(property)?;
        self.buf.push_str(&fold_line(&line, self.fold_limit));
        Ok(self)
    }

    /// Appends a block that already follows the folding convention, such as
    /// an inline binary property with its own line width.
    ///
    /// ## Errors
    /// Returns an error if the block does not end with CRLF.
    pub fn push_prefolded(&mut self, block: &str) -> RfcResult<&mut Self> {
        if !block.ends_with(CRLF) {
            return Err(RfcError::UnterminatedBlock);
        }
        self.buf.push_str(block);
        Ok(self)
    }

    /// Writes the `END` line and returns the finished document.
    #[must_use]
    pub fn finish(mut self) -> VCardDocument {
        self.write_header(names::END, "VCARD");
        tracing::trace!(octets = self.buf.len(), "vCard document finalized");
        VCardDocument(self.buf)
    }
}

/// A finished vCard document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardDocument(String);

impl VCardDocument {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.0.into_bytes()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
