use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// assetgen - embed SVG and other text assets into generated C++ headers
#[derive(Parser, Debug)]
#[command(name = "assetgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events instead of human-readable text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v lists every entry)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// When to use colors
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorWhen>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Where entries come from
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Manifest file [default: ./assetgen.toml]
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Discover assets laid out as <DIR>/<platform>/<name>.svg
    #[arg(long, value_name = "DIR")]
    pub scan: Option<PathBuf>,

    /// Output root (overrides [output] root)
    #[arg(short, long, value_name = "DIR")]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Worker threads (0 = one per CPU)
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write headers that are missing or out of date
    Generate(RunArgs),

    /// Fail if any header is missing or out of date (writes nothing)
    Check(RunArgs),

    /// Show what generate would change (writes nothing)
    Diff(RunArgs),

    /// Print the resolved entries without reading sources
    List(SourceArgs),
}
