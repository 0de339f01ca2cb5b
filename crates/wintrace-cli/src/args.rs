use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "wintrace")]
#[command(about = "Convert captured trace-event dumps into the WDAT line format", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a capture dump into a WDAT file
    Convert {
        /// Capture dump to read (JSONL hand-off from the capture agent)
        #[arg(long)]
        input: PathBuf,

        /// WDAT file to write (truncate-created)
        #[arg(long)]
        output: PathBuf,

        /// Also emit an inspection record for every unmatched event.
        /// Produces very large files
        #[arg(long)]
        dump_all: bool,

        /// Explore mode: dump only this provider, in full, as inspection
        /// records
        #[arg(long, value_name = "GUID")]
        explore: Option<Uuid>,

        /// Settings file to use instead of the default location
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Report rejected events on stderr
        #[arg(long)]
        verbose: bool,
    },

    /// List the trace providers the record schemas cover
    Providers,
}
