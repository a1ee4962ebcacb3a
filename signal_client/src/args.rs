//! Command-line arguments for the signal client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;
use signal_common::ExchangeId;
use signal_common::net::COMMAND_PORT;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Server IP address (IPv4 or IPv6) where the resolver service is running.
    #[clap(long)]
    pub server_ip: String,

    /// Server TCP port.
    #[clap(long, default_value_t = COMMAND_PORT)]
    pub port: u16,

    /// Exchange to resolve for. Every supported exchange when omitted.
    #[clap(long, value_enum)]
    pub exchange: Option<ExchangeId>,

    /// Single canonical symbol to resolve.
    #[clap(long, conflicts_with = "path")]
    pub symbol: Option<String>,

    /// Path to a text file with canonical symbols.
    /// Symbols may be separated by commas, spaces, or new lines.
    #[clap(long)]
    pub path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exchange_parses_lowercase() {
        let args = Args::parse_from([
            "signal_client",
            "--server-ip",
            "127.0.0.1",
            "--exchange",
            "bybit",
            "--symbol",
            "BTCUSDT",
        ]);
        assert_eq!(args.exchange, Some(ExchangeId::Bybit));
        assert_eq!(args.port, COMMAND_PORT);
    }

    #[test]
    fn symbol_and_path_conflict() {
        let result = Args::try_parse_from([
            "signal_client",
            "--server-ip",
            "127.0.0.1",
            "--symbol",
            "BTCUSDT",
            "--path",
            "symbols.txt",
        ]);
        assert!(result.is_err());
    }
}
