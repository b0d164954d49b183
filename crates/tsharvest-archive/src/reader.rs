//! Classification and decoding of capture entries.

use crate::har::{BodyEncoding, CaptureEntry, HarDocument};
use crate::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use bytes::Bytes;
use tsharvest_common::{manifest_file_name, segment_file_name, ManifestText, SegmentPayloads};

/// Content type browsers record for transport-stream segments.
pub const DEFAULT_SEGMENT_MIME_TYPE: &str = "video/mp2t";

/// Suffix a request URL must end with to be read as a manifest.
const MANIFEST_URL_SUFFIX: &str = ".m3u8";

/// Number of leading characters searched for an escaped newline.
///
/// A manifest must open with `#EXTM3U`, so an escaped newline right after
/// that marker falls inside this window.
const ESCAPE_WINDOW: usize = 15;

/// Payloads extracted from one archive.
#[derive(Debug, Clone, Default)]
pub struct Capture {
    /// HAR format version, if the document declares one.
    pub version: Option<String>,
    /// Segment bodies keyed by file name.
    pub segments: SegmentPayloads,
    /// Manifests in capture order.
    pub manifests: Vec<ManifestText>,
}

/// Reads HAR documents into a [`Capture`].
#[derive(Debug, Clone)]
pub struct ArchiveReader {
    segment_mime_types: Vec<String>,
}

impl Default for ArchiveReader {
    fn default() -> Self {
        Self {
            segment_mime_types: vec![DEFAULT_SEGMENT_MIME_TYPE.to_string()],
        }
    }
}

impl ArchiveReader {
    /// Create a reader that treats the given content types as segments.
    ///
    /// Types are compared case-insensitively and without parameters.
    pub fn with_segment_mime_types<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            segment_mime_types: types
                .into_iter()
                .map(|t| essence(t.as_ref()).to_ascii_lowercase())
                .collect(),
        }
    }

    /// Parse an archive document and classify its entries.
    ///
    /// # Errors
    ///
    /// - [`Error::MalformedArchive`] if the document is not a HAR log.
    /// - [`Error::UnsupportedEncoding`] if a manifest body uses an encoding
    ///   other than base64.
    /// - [`Error::InvalidBase64`] if a base64 body cannot be decoded.
    pub fn read(&self, bytes: &[u8]) -> Result<Capture> {
        let document: HarDocument = serde_json::from_slice(bytes)?;

        tracing::debug!(
            version = document.log.version.as_deref().unwrap_or("unknown"),
            entries = document.log.entries.len(),
            "Parsed HAR document"
        );

        let mut capture = Capture {
            version: document.log.version,
            ..Capture::default()
        };

        for entry in document.log.entries {
            self.classify(CaptureEntry::from(entry), &mut capture)?;
        }

        tracing::info!(
            "Archive holds {} segments and {} manifests",
            capture.segments.len(),
            capture.manifests.len()
        );

        Ok(capture)
    }

    fn classify(&self, entry: CaptureEntry, capture: &mut Capture) -> Result<()> {
        let (Some(mime_type), Some(body)) = (entry.mime_type.as_deref(), entry.body.as_deref())
        else {
            tracing::trace!("Skipping entry without body or content type: {}", entry.url);
            return Ok(());
        };

        if self.is_segment_type(mime_type) {
            let Some(name) = segment_file_name(&entry.url) else {
                tracing::warn!("Segment URL has no .ts file name, skipping: {}", entry.url);
                return Ok(());
            };
            let data = decode_base64(&entry.url, body)?;
            tracing::trace!("Segment {} ({} bytes)", name, data.len());
            if capture
                .segments
                .insert(name.to_string(), Bytes::from(data))
                .is_some()
            {
                tracing::debug!("Segment {} captured more than once, keeping latest", name);
            }
            return Ok(());
        }

        if !entry.url.ends_with(MANIFEST_URL_SUFFIX) {
            return Ok(());
        }

        let content = match &entry.encoding {
            BodyEncoding::Base64 => {
                String::from_utf8_lossy(&decode_base64(&entry.url, body)?).into_owned()
            }
            BodyEncoding::Other(encoding) => {
                return Err(Error::unsupported_encoding(&entry.url, encoding));
            }
            BodyEncoding::None => unescape_newlines(body),
        };

        let name = manifest_file_name(&entry.url)
            .ok_or_else(|| Error::malformed(format!("manifest URL has no file name: {}", entry.url)))?;

        tracing::debug!("Manifest {} ({} bytes)", name, content.len());
        capture.manifests.push(ManifestText::new(name, content));

        Ok(())
    }

    fn is_segment_type(&self, mime_type: &str) -> bool {
        let mime_type = essence(mime_type);
        self.segment_mime_types
            .iter()
            .any(|t| t.eq_ignore_ascii_case(mime_type))
    }
}

/// Strip `;`-parameters from a content type.
fn essence(mime_type: &str) -> &str {
    mime_type.split(';').next().unwrap_or(mime_type).trim()
}

fn decode_base64(url: &str, body: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(body.trim())
        .map_err(|source| Error::InvalidBase64 {
            url: url.to_string(),
            source,
        })
}

/// Replace literal `\n` escapes with line breaks.
///
/// Applied only when an escape appears within the first [`ESCAPE_WINDOW`]
/// characters; other text is returned unchanged.
pub fn unescape_newlines(text: &str) -> String {
    let window: String = text.chars().take(ESCAPE_WINDOW).collect();
    if window.contains("\\n") {
        text.replace("\\n", "\n")
    } else {
        text.to_string()
    }
}
