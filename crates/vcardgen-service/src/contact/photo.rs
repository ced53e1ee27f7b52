//! Inline photo embedding.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use vcardgen_rfc::rfc::vcard::names;

use super::submission::{PhotoUpload, UploadStatus};

/// Characters of base64 per physical line.
const BASE64_LINE_WIDTH: usize = 76;

/// Image formats accepted for embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoType {
    Jpeg,
    Png,
    Gif,
}

impl PhotoType {
    /// Maps a declared MIME type to a photo type. Parameters such as
    /// `;charset=...` are ignored and the comparison is case-insensitive.
    #[must_use]
    pub fn from_mime(mime_type: &str) -> Option<Self> {
        let essence = mime_type.split(';').next().unwrap_or_default().trim();
        if essence.eq_ignore_ascii_case("image/jpeg") {
            Some(Self::Jpeg)
        } else if essence.eq_ignore_ascii_case("image/png") {
            Some(Self::Png)
        } else if essence.eq_ignore_ascii_case("image/gif") {
            Some(Self::Gif)
        } else {
            None
        }
    }

    /// Value of the `TYPE` parameter.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Jpeg => "JPEG",
            Self::Png => "PNG",
            Self::Gif => "GIF",
        }
    }
}

/// A photo accepted for embedding, already base64 encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedPhoto {
    pub kind: PhotoType,
    /// Standard-alphabet, padded base64 of the image bytes.
    pub data: String,
}

impl EmbeddedPhoto {
    /// ## Summary
    /// Renders the `PHOTO` property as a folded block.
    ///
    /// The value starts on its own continuation line and the base64 text is
    /// split into lines of 76 characters, each prefixed by one space. The
    /// block ends with CRLF.
    #[must_use]
    pub fn to_block(&self) -> String {
        let body = self
            .data
            .as_bytes()
            .chunks(BASE64_LINE_WIDTH)
            .map(|chunk| chunk.iter().copied().map(char::from).collect::<String>())
            .collect::<Vec<_>>()
            .join("\r\n ");

        format!(
            "{};ENCODING=BASE64;TYPE={}:\r\n {body}\r\n",
            names::PHOTO,
            self.kind.label()
        )
    }
}

/// ## Summary
/// Accepts an upload for embedding.
///
/// Returns `None`, without reporting an error, when there is no upload, the
/// transport did not deliver it, the MIME type is not JPEG, PNG or GIF, the
/// file is empty, or it is larger than `max_bytes`.
#[must_use]
pub fn embed_photo(upload: Option<&PhotoUpload>, max_bytes: u64) -> Option<EmbeddedPhoto> {
    let upload = upload?;

    if upload.status != UploadStatus::Ok {
        tracing::debug!(status = ?upload.status, "Photo dropped: upload incomplete");
        return None;
    }

    let Some(kind) = PhotoType::from_mime(&upload.mime_type) else {
        tracing::debug!(mime_type = %upload.mime_type, "Photo dropped: unsupported type");
        return None;
    };

    let actual = u64::try_from(upload.bytes.len()).unwrap_or(u64::MAX);
    let size = upload.size.max(actual);
    if size == 0 || size > max_bytes {
        tracing::debug!(size, max_bytes, "Photo dropped: size out of range");
        return None;
    }

    Some(EmbeddedPhoto {
        kind,
        data: STANDARD.encode(&upload.bytes),
    })
}
