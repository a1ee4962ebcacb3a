//!
//! Common types and utilities shared by the signal server and client.
//!
//! This crate aggregates:
//! - `alias` — cross-exchange symbol aliases and the `resolve` lookup.
//! - `envelope` — the success/error envelope every handler returns.
//! - `exchange` — the closed set of supported exchanges.
//! - `request` — JSON requests exchanged between client and server.
//! - `error` — unified error type `SignalError` used across the workspace.
//! - `result` — handy `Result<T, SignalError>` alias.
//! - `net` — networking constants and small helpers.
#![warn(missing_docs)]
pub mod alias;
pub mod envelope;
pub mod error;
pub mod exchange;
pub mod net;
pub mod request;
pub mod result;

pub use alias::{AliasTable, resolve};
pub use envelope::Envelope;
pub use error::SignalError;
pub use exchange::ExchangeId;
pub use request::Request;
pub use result::Result;
