//! Request protocol shared by client and server.
//!
//! A client opens a TCP connection, writes one JSON-encoded [`Request`], half-closes
//! its write side and reads back one JSON [`crate::Envelope`]. The `header` field
//! selects the request kind:
//!
//! ```json
//! { "header": "RESOLVE", "symbol": "PUMPFUNUSDT", "exchange": "binance" }
//! { "header": "ALIASES", "symbol": "PUMPFUNUSDT" }
//! { "header": "PING" }
//! ```
use serde::{Deserialize, Serialize};

use crate::alias::AliasTable;
use crate::exchange::ExchangeId;
use crate::result::Result;

/// Header value for single-exchange lookups.
pub const RESOLVE: &str = "RESOLVE";
/// Header value for lookups across every supported exchange.
pub const ALIASES: &str = "ALIASES";
/// Header value for keep-alive pings.
pub const PING: &str = "PING";

/// Request payload sent from client to server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "header", rename_all = "UPPERCASE")]
pub enum Request {
    /// Resolve `symbol` for one exchange.
    Resolve {
        /// Canonical symbol.
        symbol: String,
        /// Target exchange.
        exchange: ExchangeId,
    },
    /// Resolve `symbol` for every supported exchange.
    Aliases {
        /// Canonical symbol.
        symbol: String,
    },
    /// Liveness check.
    Ping,
}

impl Request {
    /// Creates a new single-exchange lookup.
    pub fn resolve(symbol: &str, exchange: ExchangeId) -> Self {
        Request::Resolve {
            symbol: String::from(symbol),
            exchange,
        }
    }

    /// Creates a new lookup across all exchanges.
    pub fn aliases(symbol: &str) -> Self {
        Request::Aliases {
            symbol: String::from(symbol),
        }
    }

    /// Header string of this request kind.
    pub fn header(&self) -> &'static str {
        match self {
            Request::Resolve { .. } => RESOLVE,
            Request::Aliases { .. } => ALIASES,
            Request::Ping => PING,
        }
    }

    /// Encode the request to JSON bytes.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        let json = serde_json::to_vec(self)?;
        Ok(json)
    }
}

/// Outcome of a lookup: the venue symbol plus the endpoint to query with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSymbol {
    /// Symbol as supplied by the caller.
    pub canonical: String,
    /// Exchange the lookup was made for.
    pub exchange: ExchangeId,
    /// Symbol the exchange uses.
    pub symbol: String,
    /// Public ticker endpoint built from `symbol`.
    pub url: String,
}

impl ResolvedSymbol {
    /// Looks up `canonical` in `table` for `exchange`.
    pub fn lookup(table: &AliasTable, canonical: &str, exchange: ExchangeId) -> Self {
        let symbol = table.resolve(canonical, exchange);
        ResolvedSymbol {
            canonical: String::from(canonical),
            exchange,
            symbol: String::from(symbol),
            url: exchange.ticker_url(symbol),
        }
    }
}
