//! Shared networking constants and helpers used by client and server.

/// TCP port the resolver service listens on by default.
pub const COMMAND_PORT: u16 = 8080;
/// Largest request body the server accepts, in bytes.
pub const MAX_REQUEST_BYTES: u64 = 4096;

/// Helper to format an address with a port like "ip:port".
pub fn addr(ip: &str, port: u16) -> String {
    format!("{}:{}", ip, port)
}
