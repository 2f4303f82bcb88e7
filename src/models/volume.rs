//! Market volume models.

use serde::Deserialize;

use crate::error::BlackbudaError;

/// Envelope of the `/markets/{id}/volume` endpoint.
#[derive(Debug, Deserialize)]
pub struct VolumeResponse {
    pub volume: MarketVolume,
}

/// Rolling traded-volume aggregates for one market.
///
/// Each figure is a wire-format `[amount, currency]` string pair, e.g.
/// `["79.49", "BTC"]`.
#[derive(Debug, Deserialize)]
pub struct MarketVolume {
    #[serde(default)]
    pub market_id: Option<String>,
    pub ask_volume_24h: Vec<String>,
    pub bid_volume_24h: Vec<String>,
    #[serde(default)]
    pub ask_volume_7d: Vec<String>,
    #[serde(default)]
    pub bid_volume_7d: Vec<String>,
}

impl MarketVolume {
    /// Amount of the 24-hour bid volume figure, in base currency units.
    ///
    /// # Errors
    ///
    /// Returns [`BlackbudaError::MalformedResponse`] when the pair is empty
    /// or its first element is not a number.
    pub fn bid_amount_24h(&self) -> crate::Result<f64> {
        parse_amount(&self.bid_volume_24h, "bid_volume_24h")
    }
}

/// Parses the amount element of an `[amount, currency]` pair.
fn parse_amount(pair: &[String], field: &str) -> crate::Result<f64> {
    let raw = pair
        .first()
        .ok_or_else(|| BlackbudaError::MalformedResponse(format!("{field} is empty")))?;
    raw.parse().map_err(|_| {
        BlackbudaError::MalformedResponse(format!("{field} amount is not a number: {raw:?}"))
    })
}
