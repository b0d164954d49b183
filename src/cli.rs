use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tsharvest")]
#[command(author, version, about = "Rebuild captured HLS video from HAR archives")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract every segment and manifest, plus a rebuilt manifest and concat list
    Extract {
        /// HAR archive to read
        #[arg(required = true)]
        archive: PathBuf,

        /// Directory to write into
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Assemble the captured stream and remux it into a container with ffmpeg
    Remux {
        /// HAR archive to read
        #[arg(required = true)]
        archive: PathBuf,

        /// Output media file (container chosen by extension)
        #[arg(required = true)]
        output: PathBuf,

        /// Directory for the intermediate stream
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Continue without asking when segments are missing
        #[arg(short, long, conflicts_with = "abort_on_missing")]
        yes: bool,

        /// Stop without asking when segments are missing
        #[arg(long)]
        abort_on_missing: bool,
    },

    /// Concatenate the segments named in a concat list into one stream
    Concat {
        /// Concat list (`file <name>` per line)
        #[arg(required = true)]
        list: PathBuf,

        /// Output stream
        #[arg(required = true)]
        output: PathBuf,
    },

    /// Cut a time range out of a media file with ffmpeg stream copy
    Clip {
        /// Input media file
        #[arg(required = true)]
        input: PathBuf,

        /// Start time (HH:MM:SS.mmm)
        #[arg(required = true)]
        start: String,

        /// End time (HH:MM:SS.mmm)
        #[arg(required = true)]
        end: String,

        /// Output media file
        #[arg(required = true)]
        output: PathBuf,
    },

    /// Summarize the segments and manifests captured in an archive
    Inspect {
        /// HAR archive to read
        #[arg(required = true)]
        archive: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that required external tools are available
    CheckTools,
}
