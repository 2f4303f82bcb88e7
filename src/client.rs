//! Buda v2 public REST client.
//!
//! Both endpoints used here are unauthenticated market-data reads. Each
//! call is an independent GET; responses are checked for a success status
//! and decoded straight into the typed models.

use tracing::info;

use crate::models::{MarketVolume, TradeEntry, TradesResponse, VolumeResponse};

/// Thin client over the two Buda market-data endpoints.
pub struct BudaClient {
    client: reqwest::Client,
    base_url: String,
}

impl BudaClient {
    /// Creates a client for the given API base URL (no trailing slash),
    /// e.g. `https://www.buda.com/api/v2`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetches the rolling volume aggregates for a market.
    ///
    /// With `timestamp` set, the exchange reports the aggregates as of that
    /// point in time (Unix seconds) instead of now.
    ///
    /// # Errors
    ///
    /// Returns [`BlackbudaError::Http`](crate::BlackbudaError::Http) on
    /// network failures or a non-2xx status, and
    /// [`BlackbudaError::Json`](crate::BlackbudaError::Json) when the body
    /// is not the expected JSON shape.
    pub async fn market_volume(
        &self,
        market_id: &str,
        timestamp: Option<i64>,
    ) -> crate::Result<MarketVolume> {
        let url = format!("{}/markets/{}/volume", self.base_url, market_id);

        let mut request = self.client.get(&url);
        if let Some(ts) = timestamp {
            request = request.query(&[("timestamp", ts)]);
        }

        let response = request.send().await?.error_for_status()?;
        let body: VolumeResponse = serde_json::from_str(&response.text().await?)?;

        info!(market_id, ?timestamp, "Fetched market volume");
        Ok(body.volume)
    }

    /// Fetches the trades executed on a market between two Unix-second
    /// timestamps (`since ≤ t ≤ until`).
    ///
    /// # Errors
    ///
    /// Same failure modes as [`market_volume`](Self::market_volume).
    pub async fn trades_between(
        &self,
        market_id: &str,
        since: i64,
        until: i64,
    ) -> crate::Result<Vec<TradeEntry>> {
        let url = format!("{}/markets/{}/trades", self.base_url, market_id);

        let response = self
            .client
            .get(&url)
            .query(&[("since", since), ("until", until)])
            .send()
            .await?
            .error_for_status()?;
        let body: TradesResponse = serde_json::from_str(&response.text().await?)?;

        info!(
            market_id,
            since,
            until,
            count = body.trades.entries.len(),
            "Fetched trade history"
        );
        Ok(body.trades.entries)
    }
}
