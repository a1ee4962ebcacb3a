//! Per-connection request handling.
//!
//! This is where failures become envelopes: every connection gets exactly one JSON
//! envelope back, whether the request was served or rejected.
//!
//! | failure                       | status |
//! |-------------------------------|--------|
//! | malformed JSON / bad field    | 400    |
//! | empty symbol                  | 400    |
//! | body over `MAX_REQUEST_BYTES` | 413    |
//! | client too slow to send       | 408    |
//! | anything else                 | 500    |
use log::{debug, info, warn};
use signal_common::envelope::{self, Envelope};
use signal_common::net::MAX_REQUEST_BYTES;
use signal_common::request::ResolvedSymbol;
use signal_common::{AliasTable, ExchangeId, Request, Result, SignalError};
use std::io::{self, ErrorKind, Read, Write};
use std::net::{SocketAddr, TcpStream};

/// Most input discarded after an oversized request before the reply is written.
const MAX_DRAIN_BYTES: u64 = 1024 * 1024;

/// Reads one request from `stream`, answers it and closes the connection.
///
/// Only failures to write the answer are returned; request errors are reported to
/// the client as error envelopes.
pub fn handle_connection(
    mut stream: TcpStream,
    peer: SocketAddr,
    table: &AliasTable,
) -> Result<()> {
    let body = match read_request(&mut stream) {
        Ok(request) => {
            info!("Received {} from {}", request.header(), peer);
            debug!("Request {:?}", request);
            match respond(&request, table) {
                Ok(body) => body,
                Err(e) => {
                    warn!("Failed to answer {} from {}: {}", request.header(), peer, e);
                    envelope::error::<()>("Internal server error", 500).to_json_bytes()?
                }
            }
        }
        Err(e) => {
            warn!("Rejected request from {}: {}", peer, e);
            if matches!(e, SignalError::RequestTooLarge(_)) {
                drain(&stream, peer);
            }
            rejection(&e).to_json_bytes()?
        }
    };

    stream.write_all(&body)?;
    stream.flush()?;
    Ok(())
}

/// Discards unread request bytes so that closing the socket does not reset the
/// connection before the client has read the rejection.
///
/// Bounded by `MAX_DRAIN_BYTES` and the stream's read timeout.
fn drain(stream: &TcpStream, peer: SocketAddr) {
    let mut rest = stream.take(MAX_DRAIN_BYTES);
    match io::copy(&mut rest, &mut io::sink()) {
        Ok(n) => debug!("Discarded {} trailing bytes from {}", n, peer),
        Err(e) => debug!("Stopped discarding input from {}: {}", peer, e),
    }
}

/// Reads a whole request body and decodes it.
pub fn read_request<R: Read>(reader: R) -> Result<Request> {
    let mut buf = Vec::new();
    reader.take(MAX_REQUEST_BYTES + 1).read_to_end(&mut buf)?;
    if buf.len() as u64 > MAX_REQUEST_BYTES {
        return Err(SignalError::RequestTooLarge(MAX_REQUEST_BYTES));
    }

    let request: Request = serde_json::from_slice(&buf)?;
    let empty_symbol = matches!(
        &request,
        Request::Resolve { symbol, .. } | Request::Aliases { symbol } if symbol.is_empty()
    );
    if empty_symbol {
        return Err(SignalError::Format(String::from("symbol must not be empty")));
    }
    Ok(request)
}

/// Serves `request` against `table` and encodes the success envelope.
pub fn respond(request: &Request, table: &AliasTable) -> Result<Vec<u8>> {
    match request {
        Request::Resolve { symbol, exchange } => {
            envelope::success(ResolvedSymbol::lookup(table, symbol, *exchange), None)
                .to_json_bytes()
        }
        Request::Aliases { symbol } => {
            let resolved: Vec<ResolvedSymbol> = ExchangeId::ALL
                .iter()
                .map(|exchange| ResolvedSymbol::lookup(table, symbol, *exchange))
                .collect();
            envelope::success(resolved, None).to_json_bytes()
        }
        Request::Ping => envelope::success("PONG", Some(String::from("alive"))).to_json_bytes(),
    }
}

/// Error envelope sent back for `err`.
pub fn rejection(err: &SignalError) -> Envelope<()> {
    match err {
        SignalError::SerdeJson(e) => envelope::error(format!("Invalid request: {}", e), 400),
        SignalError::Format(reason) => envelope::error(format!("Invalid request: {}", reason), 400),
        SignalError::RequestTooLarge(_) => envelope::error(err.to_string(), 413),
        SignalError::Io(e)
            if matches!(e.kind(), ErrorKind::WouldBlock | ErrorKind::TimedOut) =>
        {
            envelope::error("Request timed out", 408)
        }
        _ => envelope::error("Internal server error", 500),
    }
}
