use notekeeper::cli::args::Args;
// src/main.rs
use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // The env file may supply PORT and friends, so it is loaded before parsing
    let env_file = notekeeper::load_env_file()?;
    let args = Args::parse();

    // Initialize logging based on verbosity
    let filter = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("notekeeper={}", filter).parse()?)
                .add_directive(format!("tower_http={}", filter).parse()?),
        )
        .init();

    if let Some(path) = env_file {
        info!(path = %path.display(), "Loaded environment file");
    }

    notekeeper::run(args).await
}
