//! Trade history models.

use serde::Deserialize;

use crate::error::BlackbudaError;

/// Envelope of the `/markets/{id}/trades` endpoint.
#[derive(Debug, Deserialize)]
pub struct TradesResponse {
    pub trades: TradeBook,
}

/// A page of executed trades for one market.
#[derive(Debug, Deserialize)]
pub struct TradeBook {
    #[serde(default)]
    pub market_id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub last_timestamp: Option<String>,
    pub entries: Vec<TradeEntry>,
}

/// A single executed trade.
///
/// Wire format is positional: `[timestamp_ms, amount, price, direction]`,
/// all strings.
#[derive(Debug, Clone, Deserialize)]
pub struct TradeEntry(String, String, String, String);

impl TradeEntry {
    /// Builds an entry from its positional fields.
    pub fn new(
        timestamp_ms: impl Into<String>,
        amount: impl Into<String>,
        price: impl Into<String>,
        direction: impl Into<String>,
    ) -> Self {
        Self(
            timestamp_ms.into(),
            amount.into(),
            price.into(),
            direction.into(),
        )
    }

    /// Execution time in milliseconds since the Unix epoch.
    ///
    /// # Errors
    ///
    /// Returns [`BlackbudaError::MalformedResponse`] if the field is not an
    /// integer.
    pub fn timestamp_ms(&self) -> crate::Result<i64> {
        self.0.parse().map_err(|_| {
            BlackbudaError::MalformedResponse(format!(
                "trade timestamp is not an integer: {:?}",
                self.0
            ))
        })
    }

    /// Traded amount in base currency units.
    ///
    /// # Errors
    ///
    /// Returns [`BlackbudaError::MalformedResponse`] if the field is not a
    /// number.
    pub fn amount(&self) -> crate::Result<f64> {
        parse_number(&self.1, "trade amount")
    }

    /// Unit price in quote currency units.
    ///
    /// # Errors
    ///
    /// Returns [`BlackbudaError::MalformedResponse`] if the field is not a
    /// number.
    pub fn price(&self) -> crate::Result<f64> {
        parse_number(&self.2, "trade price")
    }

    /// Trade direction: `"buy"` or `"sell"`.
    pub fn direction(&self) -> &str {
        &self.3
    }
}

fn parse_number(raw: &str, field: &str) -> crate::Result<f64> {
    raw.parse().map_err(|_| {
        BlackbudaError::MalformedResponse(format!("{field} is not a number: {raw:?}"))
    })
}
