//! Typed HAR schema.
//!
//! Only the fields tsharvest reads are modelled. Everything else in the
//! document is ignored by serde, and every field below the entry list is
//! optional so that sparse captures still parse.

use serde::Deserialize;

/// Top-level HAR document.
#[derive(Debug, Clone, Deserialize)]
pub struct HarDocument {
    pub log: HarLog,
}

/// The `log` object holding the captured entries.
#[derive(Debug, Clone, Deserialize)]
pub struct HarLog {
    #[serde(default)]
    pub version: Option<String>,
    pub entries: Vec<HarEntry>,
}

/// A single request/response pair.
#[derive(Debug, Clone, Deserialize)]
pub struct HarEntry {
    pub request: HarRequest,
    pub response: HarResponse,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HarRequest {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HarResponse {
    #[serde(default)]
    pub content: Option<HarContent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HarContent {
    #[serde(rename = "mimeType", default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub encoding: Option<String>,
}

/// Transfer encoding declared for a response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyEncoding {
    /// No encoding declared; the body is literal text.
    None,
    /// The body is base64.
    Base64,
    /// Some other named encoding.
    Other(String),
}

impl BodyEncoding {
    /// Interpret the optional `encoding` field of a HAR content object.
    pub fn from_declared(declared: Option<&str>) -> Self {
        match declared {
            None => BodyEncoding::None,
            Some("base64") => BodyEncoding::Base64,
            Some(other) => BodyEncoding::Other(other.to_string()),
        }
    }
}

/// One network transaction, flattened from the HAR schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureEntry {
    /// Request URL.
    pub url: String,
    /// Declared response content type.
    pub mime_type: Option<String>,
    /// Response body as stored in the archive.
    pub body: Option<String>,
    /// Declared body transfer encoding.
    pub encoding: BodyEncoding,
}

impl From<HarEntry> for CaptureEntry {
    fn from(entry: HarEntry) -> Self {
        let content = entry.response.content;
        let (mime_type, body, encoding) = match content {
            Some(c) => (c.mime_type, c.text, BodyEncoding::from_declared(c.encoding.as_deref())),
            None => (None, None, BodyEncoding::None),
        };

        Self {
            url: entry.request.url,
            mime_type,
            body,
            encoding,
        }
    }
}
