// src/cli/args.rs
use clap::Parser;
use std::path::PathBuf;

use crate::constants::{DEFAULT_DATA_FILE, DEFAULT_HOST, DEFAULT_PORT};

/// Every option also reads from its environment variable, so starting the
/// process with no flags at all is the normal way to run it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
pub struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Interface to bind
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// JSON file holding all notes
    #[arg(short = 'f', long, value_name = "FILE", env = "NOTES_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
