//! Error types for tsharvest-archive.

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading a capture archive.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document is not a HAR log with a list of entries.
    #[error("malformed archive: {0}")]
    MalformedArchive(String),

    /// A manifest entry declares a transfer encoding other than base64.
    #[error("unsupported manifest encoding {encoding:?} for {url}")]
    UnsupportedEncoding { url: String, encoding: String },

    /// A body declared as base64 could not be decoded.
    #[error("invalid base64 body for {url}: {source}")]
    InvalidBase64 {
        url: String,
        #[source]
        source: base64::DecodeError,
    },
}

impl Error {
    /// Create a malformed archive error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedArchive(msg.into())
    }

    /// Create an unsupported encoding error.
    pub fn unsupported_encoding(url: impl Into<String>, encoding: impl Into<String>) -> Self {
        Self::UnsupportedEncoding {
            url: url.into(),
            encoding: encoding.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::MalformedArchive(err.to_string())
    }
}
