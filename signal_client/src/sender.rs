//! Sending requests to the resolver server over TCP.
//!
//! One connection per request: write the JSON request, half-close, read the envelope.
use log::debug;
use serde::de::DeserializeOwned;
use signal_common::{Envelope, Request, Result};
use std::io::{Read, Write};
use std::net::{Shutdown, TcpStream};
use std::time::Duration;

/// How long to wait for the server's answer.
const READ_TIMEOUT: Duration = Duration::from_secs(5);

/// Helper type for sending requests to the server.
pub struct RequestSender;

impl RequestSender {
    /// Sends `request` to `server_addr` and decodes the envelope it answers with.
    pub fn send_request<T: DeserializeOwned>(
        server_addr: &str,
        request: &Request,
    ) -> Result<Envelope<T>> {
        let mut stream = TcpStream::connect(server_addr)?;
        stream.set_read_timeout(Some(READ_TIMEOUT))?;

        debug!("Sending {} to {}", request.header(), server_addr);
        stream.write_all(&request.to_json_bytes()?)?;
        stream.shutdown(Shutdown::Write)?;

        let mut body = Vec::new();
        stream.read_to_end(&mut body)?;
        let envelope = serde_json::from_slice(&body)?;
        Ok(envelope)
    }
}
