//! NoteGraph inspection entry point.
//!
//! # Responsibility
//! - Decode a plain note map from JSON and print its outline.
//! - Verify `notegraph_core` linkage from a standalone binary.

use clap::Parser;
use log::info;
use notegraph_core::{default_log_level, init_logging, NoteId};

mod args;
mod inspect;

use args::Cli;
use inspect::{find_root, load_map, render, CliError};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    init_logging(level, cli.log_dir.as_deref()).map_err(CliError::Logging)?;

    for line in outline_input(&cli)? {
        println!("{line}");
    }
    Ok(())
}

/// Loads `cli.input`, resolves `--root` and renders up to `--depth` hops.
fn outline_input(cli: &Cli) -> Result<Vec<String>, CliError> {
    let map = load_map(&cli.input)?;
    let root_id = cli.root.clone().map(NoteId::from);
    let root = find_root(&map, root_id.as_ref())?;
    info!(
        "event=inspect module=cli status=start notes={} root={} depth={} core_version={}",
        map.len(),
        root,
        cli.depth,
        notegraph_core::core_version()
    );

    let view = map.graph_note(root)?;
    render(&view, cli.depth)
}
