//! Application configuration loaded from environment variables.
//!
//! Everything has a default matching the original Black Buda study, so the
//! binary runs with no environment at all:
//! - `BUDA_API_URL` — base URL of the Buda v2 REST API
//! - `BUDA_MARKET_ID` — market to study, `base-quote` form (e.g. `btc-clp`)
//! - `BLACKBUDA_EVENT_DATE` — event day, `YYYY-MM-DD`
//! - `BLACKBUDA_COMMISSION_RATE` — waived commission rate, e.g. `0.008`

use chrono::NaiveDate;

use crate::error::BlackbudaError;

/// Default public REST endpoint.
const DEFAULT_API_URL: &str = "https://www.buda.com/api/v2";

/// Market studied in the original report.
const DEFAULT_MARKET_ID: &str = "btc-clp";

/// Day of the Black Buda event.
const DEFAULT_EVENT_DATE: &str = "2024-03-01";

/// Commission rate waived during the event (0.8%).
const DEFAULT_COMMISSION_RATE: f64 = 0.008;

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub buda: BudaConfig,
    pub event: EventConfig,
}

/// Buda-specific configuration values.
#[derive(Debug)]
pub struct BudaConfig {
    pub api_url: String,
    pub market_id: String,
}

/// Parameters of the studied event.
#[derive(Debug)]
pub struct EventConfig {
    pub date: NaiveDate,
    pub commission_rate: f64,
}

/// Loads the application configuration from environment variables.
///
/// # Errors
///
/// Returns [`BlackbudaError::Config`] if the market identifier is not of
/// `base-quote` form, the event date is not a valid `YYYY-MM-DD` date, or
/// the commission rate is not a number in `[0, 1)`.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let api_url =
        non_empty_var("BUDA_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let market_id =
        non_empty_var("BUDA_MARKET_ID").unwrap_or_else(|| DEFAULT_MARKET_ID.to_string());
    if market_currencies(&market_id).is_none() {
        return Err(BlackbudaError::Config(format!(
            "BUDA_MARKET_ID must be of base-quote form (e.g. btc-clp), got {market_id:?}"
        )));
    }

    let date_str =
        non_empty_var("BLACKBUDA_EVENT_DATE").unwrap_or_else(|| DEFAULT_EVENT_DATE.to_string());
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|e| {
        BlackbudaError::Config(format!("BLACKBUDA_EVENT_DATE is not a YYYY-MM-DD date: {e}"))
    })?;

    let commission_rate = match non_empty_var("BLACKBUDA_COMMISSION_RATE") {
        Some(raw) => {
            let rate: f64 = raw.parse().map_err(|e| {
                BlackbudaError::Config(format!("BLACKBUDA_COMMISSION_RATE is not a number: {e}"))
            })?;
            if !(0.0..1.0).contains(&rate) {
                return Err(BlackbudaError::Config(format!(
                    "BLACKBUDA_COMMISSION_RATE must be in [0, 1), got {rate}"
                )));
            }
            rate
        }
        None => DEFAULT_COMMISSION_RATE,
    };

    Ok(AppConfig {
        buda: BudaConfig { api_url, market_id },
        event: EventConfig {
            date,
            commission_rate,
        },
    })
}

/// Splits a `base-quote` market identifier into uppercase currency codes.
///
/// Returns `None` when either side of the hyphen is empty or missing.
pub fn market_currencies(market_id: &str) -> Option<(String, String)> {
    let (base, quote) = market_id.split_once('-')?;
    if base.is_empty() || quote.is_empty() {
        return None;
    }
    Some((base.to_uppercase(), quote.to_uppercase()))
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
