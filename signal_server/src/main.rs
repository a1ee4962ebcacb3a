//! Symbol resolver TCP server.
//!
//! This binary answers symbol lookups for the route layer. Each connection carries one
//! JSON request and gets one JSON envelope back. Internally, it wires together three
//! building blocks:
//!
//! - `AliasTable` — the built-in aliases plus an optional alias file, loaded once at
//!   startup and shared read-only behind an `Arc`.
//! - `RequestReceiver` — accepts TCP connections and forwards them, with the peer
//!   address, over a `crossbeam_channel`.
//! - Per-connection handler — a short-lived thread that reads the request, resolves
//!   the symbol and writes back a success or error envelope.
//!
//! Concurrency and shutdown:
//! - Crossbeam `select!` multiplexes incoming connections and the Ctrl+C signal.
//! - A bad request only affects its own connection; the listener keeps accepting.
//!
//! Protocol details (request headers, envelope shape) live in `signal_common`.
#![warn(missing_docs)]
use crate::args::Args;
use crate::handler::handle_connection;
use crate::receiver::RequestReceiver;
use clap::Parser;
use crossbeam_channel::{bounded, select, unbounded};
use log::{error, info};
use signal_common::net::addr;
use signal_common::{AliasTable, Result, SignalError};
use std::fs::File;
use std::io::BufReader;
use std::net::{SocketAddr, TcpStream};
use std::path::Path;
use std::sync::Arc;
use std::thread;

mod args;
mod handler;
mod receiver;

fn main() -> Result<(), SignalError> {
    init_logger();
    let args = Args::parse();

    let table = Arc::new(load_aliases(args.aliases.as_deref())?);
    info!("Alias table ready with {} symbols", table.len());

    let (shutdown_tx, shutdown_rx) = bounded::<()>(1);
    ctrlc::set_handler(move || {
        info!("Ctrl+C received. Shutting down server...");
        let _ = shutdown_tx.try_send(());
    })
    .map_err(|e| SignalError::Format(format!("Failed to set Ctrl+C handler: {}", e)))?;

    let (conn_tx, conn_rx) = unbounded::<(TcpStream, SocketAddr)>();
    let tcp_receiver = RequestReceiver::new(&addr(&args.bind, args.port))?;
    thread::spawn(move || {
        if let Err(e) = tcp_receiver.receive_loop_with_channel(conn_tx) {
            error!("Receiver loop failed: {:?}", e);
        };
    });

    loop {
        select! {
            recv(conn_rx) -> msg => match msg {
                Ok((stream, peer)) => {
                    let table = Arc::clone(&table);
                    thread::spawn(move || {
                        if let Err(e) = handle_connection(stream, peer, &table) {
                            error!("Connection {} failed: {}", peer, e);
                        }
                    });
                }
                Err(e) => {
                    error!("Receiver stopped: {}", e);
                    return Err(SignalError::ChannelRecv(e.to_string()));
                }
            },

            recv(shutdown_rx) -> _ => {
                info!("Server stopped");
                break;
            }
        }
    }
    Ok(())
}

/// Builds the alias table: built-in entries, then the optional file on top.
fn load_aliases(path: Option<&Path>) -> Result<AliasTable> {
    let table = AliasTable::builtin();
    match path {
        Some(path) => {
            info!("Loading aliases from {}", path.display());
            let file = File::open(path)?;
            table.extend_from_reader(BufReader::new(file))
        }
        None => Ok(table),
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
