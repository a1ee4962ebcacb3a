//! Cross-exchange symbol aliases.
//!
//! Symbols arrive in a canonical form taken from the ingestion feed. Some venues list
//! the same instrument under a different name, so before building an outbound request
//! the canonical symbol is translated with [`resolve`].
//!
//! Lookups are exact: no trimming and no case folding. `"pumpfunusdt"` does not match
//! the `"PUMPFUNUSDT"` entry, and callers must pass symbols in the casing used by the
//! table keys.
//!
//! The built-in table is a `static` slice. A process that needs extra entries builds an
//! [`AliasTable`] once at startup and shares it read-only afterwards.

use std::collections::HashMap;
use std::io::BufRead;

use crate::error::SignalError;
use crate::exchange::ExchangeId;
use crate::result::Result;

/// Built-in overrides: canonical symbol -> per-exchange alias.
pub static ALIASES: &[(&str, &[(ExchangeId, &str)])] =
    &[("PUMPFUNUSDT", &[(ExchangeId::Binance, "PUMPUSDT")])];

/// Returns the symbol `exchange` uses for `symbol`.
///
/// Falls back to `symbol` itself when the table has no entry for it, or has an entry
/// without an override for `exchange`. Never fails.
pub fn resolve(symbol: &str, exchange: ExchangeId) -> &str {
    ALIASES
        .iter()
        .find(|(canonical, _)| *canonical == symbol)
        .and_then(|(_, overrides)| overrides.iter().find(|(id, _)| *id == exchange))
        .map(|(_, alias)| *alias)
        .unwrap_or(symbol)
}

/// Alias table assembled at startup from the built-in entries plus optional files.
///
/// There is no mutation API once construction is finished; wrap it in an `Arc` to
/// share it between handler threads.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: HashMap<String, HashMap<ExchangeId, String>>,
}

impl AliasTable {
    /// Table holding exactly the entries of [`ALIASES`].
    pub fn builtin() -> Self {
        let entries = ALIASES
            .iter()
            .map(|(canonical, overrides)| {
                let overrides: HashMap<ExchangeId, String> = overrides
                    .iter()
                    .map(|(exchange, alias)| (*exchange, alias.to_string()))
                    .collect();
                (canonical.to_string(), overrides)
            })
            .collect();
        Self { entries }
    }

    /// Adds the entries read from `reader`, one canonical symbol per line:
    ///
    /// ```text
    /// # canonical   exchange=alias ...
    /// PUMPFUNUSDT   binance=PUMPUSDT
    /// ```
    ///
    /// Blank lines and lines starting with `#` are skipped. A later line overrides an
    /// earlier alias for the same (symbol, exchange) pair.
    pub fn extend_from_reader<R: BufRead>(mut self, reader: R) -> Result<Self> {
        for (index, line_result) in reader.lines().enumerate() {
            let line = line_result?;
            let line_no = index + 1;
            let trimmed_line = line.trim();
            if trimmed_line.is_empty() || trimmed_line.starts_with('#') {
                continue;
            }

            let mut fields = trimmed_line.split_whitespace();
            let Some(canonical) = fields.next() else {
                continue;
            };

            let mut overrides = Vec::new();
            for field in fields {
                overrides.push(parse_override(field).map_err(|reason| SignalError::AliasFile {
                    line: line_no,
                    reason,
                })?);
            }
            if overrides.is_empty() {
                return Err(SignalError::AliasFile {
                    line: line_no,
                    reason: format!("'{}' has no exchange=alias pairs", canonical),
                });
            }

            self.entries
                .entry(canonical.to_string())
                .or_default()
                .extend(overrides);
        }
        Ok(self)
    }

    /// Same fallback rules as the free [`resolve`], against this table.
    pub fn resolve<'a>(&'a self, symbol: &'a str, exchange: ExchangeId) -> &'a str {
        self.entries
            .get(symbol)
            .and_then(|overrides| overrides.get(&exchange))
            .map(String::as_str)
            .unwrap_or(symbol)
    }

    /// Number of canonical symbols with at least one override.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when the table has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn parse_override(field: &str) -> std::result::Result<(ExchangeId, String), String> {
    let (exchange, alias) = field
        .split_once('=')
        .ok_or_else(|| format!("expected exchange=alias, got '{}'", field))?;
    let exchange = exchange
        .parse::<ExchangeId>()
        .map_err(|_| format!("unsupported exchange '{}'", exchange))?;
    if alias.is_empty() {
        return Err(format!("empty alias for {}", exchange));
    }
    Ok((exchange, alias.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn override_is_returned_for_matching_exchange() {
        assert_eq!(resolve("PUMPFUNUSDT", ExchangeId::Binance), "PUMPUSDT");
    }

    #[test]
    fn entry_without_override_falls_back() {
        assert_eq!(resolve("PUMPFUNUSDT", ExchangeId::Bybit), "PUMPFUNUSDT");
    }

    #[test]
    fn unknown_symbol_falls_back_on_every_exchange() {
        for exchange in ExchangeId::ALL {
            assert_eq!(resolve("BTCUSDT", exchange), "BTCUSDT");
        }
    }

    #[test]
    fn lookup_is_exact_match() {
        assert_eq!(resolve("pumpfunusdt", ExchangeId::Binance), "pumpfunusdt");
        assert_eq!(resolve(" PUMPFUNUSDT", ExchangeId::Binance), " PUMPFUNUSDT");
    }

    #[test]
    fn repeated_calls_agree() {
        let first = resolve("PUMPFUNUSDT", ExchangeId::Binance);
        for _ in 0..3 {
            assert_eq!(resolve("PUMPFUNUSDT", ExchangeId::Binance), first);
        }
    }

    #[test]
    fn builtin_table_matches_static_resolver() {
        let table = AliasTable::builtin();
        assert_eq!(table.len(), ALIASES.len());
        for symbol in ["PUMPFUNUSDT", "BTCUSDT", "ETHUSDT"] {
            for exchange in ExchangeId::ALL {
                assert_eq!(table.resolve(symbol, exchange), resolve(symbol, exchange));
            }
        }
    }

    #[test]
    fn file_entries_extend_builtin() {
        let input = "# extra venues\n\n1000PEPEUSDT binance=PEPEUSDT\nPUMPFUNUSDT bybit=PUMPUSDT\n";
        let table = AliasTable::builtin()
            .extend_from_reader(Cursor::new(input))
            .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.resolve("1000PEPEUSDT", ExchangeId::Binance), "PEPEUSDT");
        assert_eq!(table.resolve("1000PEPEUSDT", ExchangeId::Bybit), "1000PEPEUSDT");
        assert_eq!(table.resolve("PUMPFUNUSDT", ExchangeId::Binance), "PUMPUSDT");
        assert_eq!(table.resolve("PUMPFUNUSDT", ExchangeId::Bybit), "PUMPUSDT");
    }

    #[test]
    fn unsupported_exchange_reports_line() {
        let input = "BTCUSDT binance=BTCUSDT\nETHUSDT okx=ETH-USDT\n";
        let err = AliasTable::default()
            .extend_from_reader(Cursor::new(input))
            .unwrap_err();
        assert!(matches!(err, SignalError::AliasFile { line: 2, .. }));
    }

    #[test]
    fn symbol_without_pairs_is_rejected() {
        let err = AliasTable::default()
            .extend_from_reader(Cursor::new("ETHUSDT\n"))
            .unwrap_err();
        assert!(matches!(err, SignalError::AliasFile { line: 1, .. }));
    }

    #[test]
    fn empty_alias_is_rejected() {
        let err = AliasTable::default()
            .extend_from_reader(Cursor::new("ETHUSDT binance=\n"))
            .unwrap_err();
        assert!(matches!(err, SignalError::AliasFile { line: 1, .. }));
    }
}
