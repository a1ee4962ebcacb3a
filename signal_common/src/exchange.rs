//! Supported exchanges and their public ticker endpoints.
//!
//! `ExchangeId` is a closed set: adding a venue means adding a variant here and
//! handling it in every `match` that consumes the identifier. The lowercase textual
//! form (`binance`, `bybit`) is shared by serde, strum and clap so that the same
//! spelling is accepted on the wire, in alias files and on the command line.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Trading venues whose naming conventions may diverge from the canonical symbol.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    ValueEnum,
    Display,
    EnumString,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
)]
#[clap(rename_all = "lower")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ExchangeId {
    /// Binance spot.
    Binance,
    /// Bybit linear perpetuals.
    Bybit,
}

impl ExchangeId {
    /// Every supported exchange, in declaration order.
    pub const ALL: [ExchangeId; 2] = [ExchangeId::Binance, ExchangeId::Bybit];

    /// Public ticker endpoint for `symbol` on this exchange.
    ///
    /// `symbol` must already be in the exchange's own convention, i.e. the output of
    /// [`crate::alias::resolve`]. It is percent-encoded into the query string.
    pub fn ticker_url(&self, symbol: &str) -> String {
        let symbol = urlencoding::encode(symbol);
        match self {
            ExchangeId::Binance => {
                format!("https://api.binance.com/api/v3/ticker/price?symbol={}", symbol)
            }
            ExchangeId::Bybit => format!(
                "https://api.bybit.com/v5/market/tickers?category=linear&symbol={}",
                symbol
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lowercase_names() {
        assert_eq!("binance".parse::<ExchangeId>().unwrap(), ExchangeId::Binance);
        assert_eq!("bybit".parse::<ExchangeId>().unwrap(), ExchangeId::Bybit);
        assert!("okx".parse::<ExchangeId>().is_err());
    }

    #[test]
    fn display_matches_wire_form() {
        for exchange in ExchangeId::ALL {
            let json = serde_json::to_string(&exchange).unwrap();
            assert_eq!(json, format!("\"{}\"", exchange));
        }
    }

    #[test]
    fn ticker_url_embeds_symbol() {
        assert_eq!(
            ExchangeId::Binance.ticker_url("PUMPUSDT"),
            "https://api.binance.com/api/v3/ticker/price?symbol=PUMPUSDT"
        );
        assert!(ExchangeId::Bybit.ticker_url("BTCUSDT").ends_with("symbol=BTCUSDT"));
    }

    #[test]
    fn ticker_url_escapes_query_characters() {
        let url = ExchangeId::Bybit.ticker_url("BTCUSDT&category=spot#frag");
        assert_eq!(
            url,
            "https://api.bybit.com/v5/market/tickers?category=linear&symbol=BTCUSDT%26category%3Dspot%23frag"
        );
        assert_eq!(url.matches('&').count(), 1);
    }
}
