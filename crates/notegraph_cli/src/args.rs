use clap::Parser;
use std::path::PathBuf;

const DEFAULT_MAX_DEPTH: usize = 8;

#[derive(Parser, Debug)]
#[command(name = "notegraph")]
#[command(about = "Decode a plain note subgraph and print it through the GraphNote contract", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON file holding a plain note map (`{"notes": [...]}`)
    pub input: PathBuf,

    /// Identifier of the note to start from (defaults to the first note)
    #[arg(short, long)]
    pub root: Option<String>,

    /// Maximum number of `contents` hops to follow
    #[arg(short, long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub depth: usize,

    /// Log level: trace|debug|info|warn|error
    #[arg(long)]
    pub log_level: Option<String>,

    /// Absolute directory for rotated log files (logs go to stderr when unset)
    #[arg(long)]
    pub log_dir: Option<String>,
}
