//! Serde models for the Buda v2 REST payloads.
//!
//! One file per endpoint: `volume` for `/markets/{id}/volume` and `trade`
//! for `/markets/{id}/trades`. Buda serializes every numeric figure as a
//! string, so the models keep the wire strings and expose parsing
//! accessors that fail with a typed error instead of a panic.

pub mod trade;
pub mod volume;

pub use trade::{TradeBook, TradeEntry, TradesResponse};
pub use volume::{MarketVolume, VolumeResponse};
