//! Shared fixtures for integration tests.
//!
//! Provides [`HarBuilder`] for assembling HAR documents with segment and
//! manifest entries, and [`live_manifest`] for sliding-window playlists.

#![allow(dead_code)]

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

/// Builder for HAR capture documents.
#[derive(Default)]
pub struct HarBuilder {
    entries: Vec<Value>,
}

impl HarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a base64-encoded transport-stream segment.
    pub fn segment(mut self, url: &str, data: &[u8]) -> Self {
        self.entries.push(json!({
            "request": {"method": "GET", "url": url},
            "response": {
                "status": 200,
                "content": {"mimeType": "video/mp2t", "text": STANDARD.encode(data), "encoding": "base64"}
            }
        }));
        self
    }

    /// Add a plain-text manifest.
    pub fn manifest(mut self, url: &str, text: &str) -> Self {
        self.entries.push(json!({
            "request": {"method": "GET", "url": url},
            "response": {
                "status": 200,
                "content": {"mimeType": "application/vnd.apple.mpegurl", "text": text}
            }
        }));
        self
    }

    /// Add a manifest with an explicit body encoding.
    pub fn encoded_manifest(mut self, url: &str, text: &str, encoding: &str) -> Self {
        self.entries.push(json!({
            "request": {"method": "GET", "url": url},
            "response": {
                "status": 200,
                "content": {"mimeType": "application/vnd.apple.mpegurl", "text": text, "encoding": encoding}
            }
        }));
        self
    }

    /// Add an unrelated entry.
    pub fn other(mut self, url: &str, mime_type: &str) -> Self {
        self.entries.push(json!({
            "request": {"method": "GET", "url": url},
            "response": {"status": 200, "content": {"mimeType": mime_type, "text": "{}"}}
        }));
        self
    }

    pub fn build(self) -> Vec<u8> {
        serde_json::to_vec(&json!({
            "log": {"version": "1.2", "creator": {"name": "test"}, "entries": self.entries}
        }))
        .unwrap()
    }

    /// Write the document to `dir/capture.har`.
    pub fn write_to(self, dir: &Path) -> PathBuf {
        let path = dir.join("capture.har");
        std::fs::write(&path, self.build()).unwrap();
        path
    }
}

/// A live playlist window over the given segment names.
pub fn live_manifest(sequence: u32, names: &[&str]) -> String {
    let mut text = format!(
        "#EXTM3U\n#EXT-X-VERSION:3\n#EXT-X-TARGETDURATION:4\n#EXT-X-MEDIA-SEQUENCE:{}\n",
        sequence
    );
    for name in names {
        text.push_str("#EXTINF:4.000,\n");
        text.push_str(name);
        text.push('\n');
    }
    text
}

/// A capture of a live stream refreshed twice, with `s5.ts` never fetched.
pub fn sliding_window_capture() -> HarBuilder {
    HarBuilder::new()
        .manifest(
            "https://cdn.example.com/live/index.m3u8",
            &live_manifest(1, &["s1.ts", "s2.ts", "s3.ts"]),
        )
        .segment("https://cdn.example.com/live/s1.ts", b"[s1]")
        .segment("https://cdn.example.com/live/s2.ts", b"[s2]")
        .segment("https://cdn.example.com/live/s3.ts", b"[s3]")
        .other("https://cdn.example.com/player.js", "text/javascript")
        .manifest(
            "https://cdn.example.com/live/index.m3u8",
            &live_manifest(2, &["s2.ts", "s3.ts", "s4.ts"]),
        )
        .segment("https://cdn.example.com/live/s4.ts?sig=abc", b"[s4]")
        .manifest(
            "https://cdn.example.com/live/index.m3u8",
            &live_manifest(3, &["s3.ts", "s4.ts", "s5.ts"]),
        )
}
