//! Event report driver.
//!
//! Ties the client and the metric functions together: fetches the
//! event-day volume, the trades inside the event window, and the
//! prior-year volume, then derives the three figures of the report.
//! The three fetches have no ordering dependency and run concurrently;
//! output ordering is fixed by [`EventReport`]'s `Display` impl.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;

use crate::client::BudaClient;
use crate::config::{AppConfig, market_currencies};
use crate::error::BlackbudaError;
use crate::metrics::{
    percentage_change, revenue_foregone, volume_weighted_average_price, year_ago_timestamp,
};

/// Start of the studied window, hours after midnight on the event day.
const WINDOW_START_HOUR: u32 = 12;

/// End of the studied window.
const WINDOW_END_HOUR: u32 = 13;

/// The three figures of the Black Buda report, plus the currency codes
/// used to label them.
#[derive(Debug)]
pub struct EventReport {
    pub base_currency: String,
    pub quote_currency: String,
    /// Event-day traded amount × average sale price, in quote currency.
    pub money_transacted: f64,
    /// Year-over-year change of the traded volume, in percent.
    pub volume_change_pct: f64,
    /// Commission income waived during the event, in quote currency.
    pub revenue_foregone: f64,
}

impl fmt::Display for EventReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Money transacted ({}): {:.2}",
            self.quote_currency, self.money_transacted
        )?;
        writeln!(
            f,
            "Volume change vs prior year ({}): {:.2}%",
            self.base_currency, self.volume_change_pct
        )?;
        write!(
            f,
            "Revenue foregone ({}): {:.2}",
            self.quote_currency, self.revenue_foregone
        )
    }
}

/// Fetches the prior-year volume: shifts the reference instant back 365
/// days and reads the 24-hour bid volume as of that timestamp.
async fn prior_year_bid_volume(
    client: &BudaClient,
    market_id: &str,
    reference: DateTime<Utc>,
) -> crate::Result<f64> {
    let timestamp = year_ago_timestamp(reference);
    let volume = client.market_volume(market_id, Some(timestamp)).await?;
    volume.bid_amount_24h()
}

/// Builds the full event report for the configured market and date.
///
/// # Errors
///
/// Propagates every fetch and decode failure from the client, plus
/// [`BlackbudaError::NoSellTrades`] when the event window contains no
/// sell trades and [`BlackbudaError::ZeroBaseline`] when the prior-year
/// volume is zero.
pub async fn build_report(client: &BudaClient, config: &AppConfig) -> crate::Result<EventReport> {
    let market_id = &config.buda.market_id;
    let (base_currency, quote_currency) = market_currencies(market_id).ok_or_else(|| {
        BlackbudaError::Config(format!("market id is not base-quote form: {market_id:?}"))
    })?;

    let midnight = event_midnight(config.event.date);
    let window_start = window_timestamp(config.event.date, WINDOW_START_HOUR);
    let window_end = window_timestamp(config.event.date, WINDOW_END_HOUR);

    let (volume, entries, prior_volume) = tokio::try_join!(
        client.market_volume(market_id, None),
        client.trades_between(market_id, window_start, window_end),
        prior_year_bid_volume(client, market_id, midnight),
    )?;

    let event_volume = volume.bid_amount_24h()?;
    let average_price = volume_weighted_average_price(&entries)?;
    let money_transacted = event_volume * average_price;
    let volume_change_pct = percentage_change(event_volume, prior_volume)?;
    let foregone = revenue_foregone(money_transacted, config.event.commission_rate);

    info!(
        event_volume,
        average_price, prior_volume, "Computed event figures"
    );

    Ok(EventReport {
        base_currency,
        quote_currency,
        money_transacted,
        volume_change_pct,
        revenue_foregone: foregone,
    })
}

/// Midnight UTC on the event day, the reference for the year-ago shift.
fn event_midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0)
        .expect("midnight is always a valid time")
        .and_utc()
}

/// Unix timestamp of a whole hour on the event day, UTC.
fn window_timestamp(date: NaiveDate, hour: u32) -> i64 {
    date.and_hms_opt(hour, 0, 0)
        .expect("window hours are within 0..24")
        .and_utc()
        .timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_covers_one_hour_at_noon() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let start = window_timestamp(date, WINDOW_START_HOUR);
        let end = window_timestamp(date, WINDOW_END_HOUR);
        assert_eq!(start, 1_709_294_400); // 2024-03-01T12:00:00Z
        assert_eq!(end - start, 3_600);
    }

    #[test]
    fn report_renders_three_fixed_lines() {
        let report = EventReport {
            base_currency: "BTC".to_string(),
            quote_currency: "CLP".to_string(),
            money_transacted: 1234.567,
            volume_change_pct: -12.3456,
            revenue_foregone: 9.876,
        };
        assert_eq!(
            report.to_string(),
            "Money transacted (CLP): 1234.57\n\
             Volume change vs prior year (BTC): -12.35%\n\
             Revenue foregone (CLP): 9.88"
        );
    }
}
