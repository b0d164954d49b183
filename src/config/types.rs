use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub archive: ArchiveConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub tools: ToolsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArchiveConfig {
    /// Response content types treated as transport-stream segments
    #[serde(default = "default_segment_mime_types")]
    pub segment_mime_types: Vec<String>,
}

fn default_segment_mime_types() -> Vec<String> {
    vec![tsharvest_archive::DEFAULT_SEGMENT_MIME_TYPE.to_string()]
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            segment_mime_types: default_segment_mime_types(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// File name of the rebuilt manifest
    #[serde(default = "default_manifest_name")]
    pub manifest_name: String,

    /// File name of the concat list
    #[serde(default = "default_concat_list_name")]
    pub concat_list_name: String,

    /// File name of the concatenated stream handed to ffmpeg
    #[serde(default = "default_stream_name")]
    pub stream_name: String,
}

fn default_manifest_name() -> String {
    "o.m3u8".to_string()
}
fn default_concat_list_name() -> String {
    "o.lst".to_string()
}
fn default_stream_name() -> String {
    "o.ts".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            manifest_name: default_manifest_name(),
            concat_list_name: default_concat_list_name(),
            stream_name: default_stream_name(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ToolsConfig {
    #[serde(default)]
    pub ffmpeg_path: Option<PathBuf>,
}
