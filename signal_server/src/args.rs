//! Command-line arguments for the signal server.
use clap::Parser;
use signal_common::net::COMMAND_PORT;
use std::path::PathBuf;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Address to bind the request listener to.
    #[clap(long, default_value = "0.0.0.0")]
    pub bind: String,

    /// TCP port for incoming requests.
    #[clap(long, default_value_t = COMMAND_PORT)]
    pub port: u16,

    /// Optional alias file loaded on top of the built-in table.
    /// One `CANONICAL exchange=ALIAS ...` entry per line.
    #[clap(long)]
    pub aliases: Option<PathBuf>,
}
