//! Client-side input types.
//!
//! - `symbols` — canonical symbols read from a text file.
pub mod symbols;
