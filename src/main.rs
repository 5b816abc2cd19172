//! hooks-showcase
//!
//! Runs the hook showcase page in the terminal.

use anyhow::{Context as _, Result};
use clap::Parser;
use hooks_showcase::prelude::*;
use iocraft::prelude::*;
use std::{
    fs::File,
    path::{Path, PathBuf},
    sync::Mutex,
    time::Duration,
};
use tracing_subscriber::EnvFilter;

/// A walkthrough of state, side-effect, and ref hooks, one small widget at a time.
#[derive(Parser, Debug)]
#[command(name = "hooks-showcase")]
#[command(version)]
#[command(about = "Interactive terminal demo of state, effect, and ref hooks", long_about = None)]
struct Cli {
    /// Latency of the simulated API call, in milliseconds
    #[arg(long, default_value_t = 5000)]
    delay_ms: u64,

    /// Value the simulated API call resolves to
    #[arg(long, default_value = DEFAULT_PAYLOAD)]
    payload: String,

    /// Take over the whole terminal, enabling mouse clicks on buttons
    #[arg(long, conflicts_with = "print")]
    fullscreen: bool,

    /// Print the first frame and exit instead of running interactively
    #[arg(long)]
    print: bool,

    /// Write logs to this file. The terminal itself is reserved for the UI
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_tracing(path)?;
    }

    let config = ShowcaseConfig {
        fetch_delay: Duration::from_millis(cli.delay_ms),
        fetch_payload: cli.payload,
    };
    tracing::info!(?config, "starting showcase");

    let mut app = element!(App(fetch: config.fetcher()));
    if cli.print {
        app.print();
        return Ok(());
    }

    let result = if cli.fullscreen {
        smol::block_on(app.fullscreen())
    } else {
        smol::block_on(app.render_loop())
    };
    result.context("render loop failed")?;

    tracing::info!("showcase closed");
    Ok(())
}
