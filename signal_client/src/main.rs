//! Signal Client — asks the resolver server which symbol each exchange uses for a
//! canonical symbol and logs the answers.
//!
//! Usage example (CLI):
//! ```bash
//! signal_client --server-ip 192.168.0.10 --symbol PUMPFUNUSDT --exchange binance
//! signal_client --server-ip 192.168.0.10 --path ./symbols.txt
//! signal_client --server-ip 192.168.0.10
//! ```
//!
//! Without `--exchange` every supported exchange is queried. Without `--symbol` or
//! `--path` the client only pings the server.
#![warn(missing_docs)]
mod args;
mod model;
mod sender;

use crate::args::Args;
use crate::model::symbols;
use crate::sender::RequestSender;
use clap::Parser;
use log::{error, info, warn};
use signal_common::net::addr;
use signal_common::request::ResolvedSymbol;
use signal_common::{Envelope, ExchangeId, Request, Result, SignalError};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

fn main() -> Result<(), SignalError> {
    init_logger();
    let args = Args::parse();
    let shutdown = Arc::new(AtomicBool::new(false));
    {
        let shutdown = shutdown.clone();
        ctrlc::set_handler(move || {
            info!("Ctrl+C received. Stopping after the current request...");
            shutdown.store(true, Ordering::SeqCst);
        })
        .map_err(|e| SignalError::Format(format!("Failed to set Ctrl+C handler: {}", e)))?;
    }

    let server_ip = args.server_ip.trim().replace("\"", "");
    let server_address = addr(&server_ip, args.port);

    let symbols = match (&args.symbol, &args.path) {
        (Some(symbol), _) => vec![symbol.clone()],
        (None, Some(path)) => {
            let file = File::open(normalize_path(path))?;
            symbols::parse_from_file(BufReader::new(file))?
        }
        (None, None) => return ping(&server_address),
    };
    info!("Symbols: {:?}", symbols);

    let (resolved, failed) = run_batch(&symbols, &shutdown, |symbol| match args.exchange {
        Some(exchange) => resolve_one(&server_address, symbol, exchange),
        None => resolve_all(&server_address, symbol),
    });

    info!("Done: {} resolved, {} failed", resolved, failed);
    Ok(())
}

/// Runs `lookup` for each symbol until done or interrupted.
///
/// Error envelopes and transport failures both count as failed; neither stops the
/// batch. Returns `(resolved, failed)`.
fn run_batch(
    symbols: &[String],
    shutdown: &AtomicBool,
    mut lookup: impl FnMut(&str) -> Result<bool>,
) -> (usize, usize) {
    let (mut resolved, mut failed) = (0usize, 0usize);
    for symbol in symbols {
        if shutdown.load(Ordering::Relaxed) {
            warn!("Interrupted before {}", symbol);
            break;
        }
        match lookup(symbol.as_str()) {
            Ok(true) => resolved += 1,
            Ok(false) => failed += 1,
            Err(e) => {
                error!("{}: request failed: {}", symbol, e);
                failed += 1;
            }
        }
    }
    (resolved, failed)
}

fn resolve_one(server_address: &str, symbol: &str, exchange: ExchangeId) -> Result<bool> {
    let envelope: Envelope<ResolvedSymbol> =
        RequestSender::send_request(server_address, &Request::resolve(symbol, exchange))?;
    Ok(report(symbol, envelope, |resolved| log_resolved(&resolved)))
}

fn resolve_all(server_address: &str, symbol: &str) -> Result<bool> {
    let envelope: Envelope<Vec<ResolvedSymbol>> =
        RequestSender::send_request(server_address, &Request::aliases(symbol))?;
    Ok(report(symbol, envelope, |resolved| {
        resolved.iter().for_each(log_resolved)
    }))
}

fn ping(server_address: &str) -> Result<(), SignalError> {
    let envelope: Envelope<String> = RequestSender::send_request(server_address, &Request::Ping)?;
    report("PING", envelope, |reply| info!("Server {} answered {}", server_address, reply));
    Ok(())
}

/// Logs the envelope for `subject`; returns `true` on success.
fn report<T>(subject: &str, envelope: Envelope<T>, on_data: impl FnOnce(T)) -> bool {
    match envelope {
        Envelope::Success { data, message } => {
            if let Some(message) = message {
                info!("{}: {}", subject, message);
            }
            on_data(data);
            true
        }
        Envelope::Error {
            message,
            status_code,
        } => {
            error!("{}: server error {}: {}", subject, status_code, message);
            false
        }
    }
}

fn log_resolved(resolved: &ResolvedSymbol) {
    info!(
        "{} on {} -> {} ({})",
        resolved.canonical, resolved.exchange, resolved.symbol, resolved.url
    );
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use signal_common::envelope;

    #[test]
    fn normalize_path_strips_quotes() {
        assert_eq!(normalize_path(" \"C:\\data\\s.txt\" "), PathBuf::from("C:\\data\\s.txt"));
        assert_eq!(normalize_path("symbols.txt"), PathBuf::from("symbols.txt"));
    }

    #[test]
    fn transport_failure_does_not_stop_batch() {
        let symbols: Vec<String> = ["PUMPFUNUSDT", "BTCUSDT", "ETHUSDT", "SOLUSDT"]
            .into_iter()
            .map(String::from)
            .collect();
        let mut seen = Vec::new();
        let counts = run_batch(&symbols, &AtomicBool::new(false), |symbol| {
            seen.push(symbol.to_string());
            match symbol {
                "BTCUSDT" => Err(SignalError::Io(std::io::Error::from(
                    std::io::ErrorKind::ConnectionRefused,
                ))),
                "ETHUSDT" => Ok(false),
                _ => Ok(true),
            }
        });
        assert_eq!(counts, (2, 2));
        assert_eq!(seen, symbols);
    }

    #[test]
    fn interrupted_batch_stops_before_next_symbol() {
        let symbols = vec![String::from("BTCUSDT")];
        let counts = run_batch(&symbols, &AtomicBool::new(true), |_| {
            panic!("no request after shutdown")
        });
        assert_eq!(counts, (0, 0));
    }

    #[test]
    fn report_branches_on_variant() {
        let mut seen = None;
        assert!(report("X", envelope::success(3, None), |n| seen = Some(n)));
        assert_eq!(seen, Some(3));

        assert!(!report("X", envelope::error::<i32>("HTTP 错误: 404", 404), |_| {
            panic!("error envelope must not reach the data callback")
        }));
    }
}
