//! CLI argument definitions for the slicer filter tools.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Parser)]
#[command(
    name = "slicer",
    version,
    about = "Inspect and rebuild hierarchy-slicer filter documents"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decode the host's current filter state into selection tuples.
    Decode(DecodeArgs),

    /// Resolve and print the filter target of every metadata column.
    Targets(TargetsArgs),

    /// Build the tuple filter a selection tree would persist.
    Encode(EncodeArgs),
}

#[derive(Parser)]
pub struct DecodeArgs {
    /// Visual metadata document (columns and stored objects).
    #[arg(long = "metadata", value_name = "PATH")]
    pub metadata: PathBuf,

    /// Applied JSON filters as handed back by the host.
    #[arg(long = "filters", value_name = "PATH")]
    pub filters: Option<PathBuf>,

    /// Deprecated comma-encoded filterValues string (default: the one stored
    /// in the metadata objects, when present).
    #[arg(long = "legacy", value_name = "STRING")]
    pub legacy: Option<String>,
}

#[derive(Parser)]
pub struct TargetsArgs {
    /// Visual metadata document.
    #[arg(long = "metadata", value_name = "PATH")]
    pub metadata: PathBuf,
}

#[derive(Parser)]
pub struct EncodeArgs {
    /// Selection tree as a list of data points.
    #[arg(long = "tree", value_name = "PATH")]
    pub tree: PathBuf,

    /// Visual metadata document.
    #[arg(long = "metadata", value_name = "PATH")]
    pub metadata: PathBuf,

    /// Depth to settle the filter at (default: derived from the partially
    /// selected levels of the tree).
    #[arg(long = "levels", value_name = "N")]
    pub levels: Option<i32>,
}
