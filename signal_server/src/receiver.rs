use crossbeam_channel::Sender;
use log::{debug, error, info, warn};
use signal_common::{Result, SignalError};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::time::Duration;

/// How long a handler waits for a client to finish writing its request.
const READ_TIMEOUT: Duration = Duration::from_secs(5);

/// TCP receiver that accepts client connections.
///
/// Each accepted connection is handed to the main loop over a channel together with
/// the peer address. Reading and answering the request happens on a handler thread,
/// so a slow or misbehaving client never blocks the accept loop.
pub struct RequestReceiver {
    /// The underlying TCP listening socket.
    pub(crate) socket: TcpListener,
}

impl RequestReceiver {
    /// Bind a new TCP receiver to the provided `bind_addr` (e.g., `0.0.0.0:8080`).
    pub fn new(bind_addr: &str) -> Result<Self> {
        let socket = TcpListener::bind(bind_addr)?;
        Ok(Self { socket })
    }

    /// Blocking loop that accepts TCP connections and forwards them to `tx`.
    ///
    /// Errors on a single connection are logged and skipped; the loop only ends when
    /// the main loop has dropped its end of the channel.
    pub(crate) fn receive_loop_with_channel(
        self,
        tx: Sender<(TcpStream, SocketAddr)>,
    ) -> Result<()> {
        info!("Request TCP server is started on {}", self.socket.local_addr()?);

        for stream in self.socket.incoming() {
            match stream {
                Ok(stream) => {
                    let peer = match stream.peer_addr() {
                        Ok(peer) => peer,
                        Err(e) => {
                            warn!("Dropping connection without peer address: {}", e);
                            continue;
                        }
                    };
                    debug!("Accepted connection from {}", peer);
                    if let Err(e) = stream.set_read_timeout(Some(READ_TIMEOUT)) {
                        warn!("Failed to set read timeout for {}: {}", peer, e);
                    }
                    tx.send((stream, peer))
                        .map_err(|e| SignalError::ChannelSend(e.to_string()))?;
                }
                Err(e) => error!("TCP connection error: {}", e),
            }
        }
        Ok(())
    }
}
