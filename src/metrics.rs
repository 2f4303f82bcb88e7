//! Pure metric computations over fetched market data.
//!
//! These functions do no I/O. The two divisions that can degenerate (no
//! sell trades, zero prior-year volume) return typed errors instead of
//! producing NaN or infinity.

use chrono::{DateTime, Duration, Utc};

use crate::error::BlackbudaError;
use crate::models::TradeEntry;

/// Volume-weighted average sale price over the sell-side entries:
/// Σ(amount × price) / Σ(amount), restricted to `direction == "sell"`.
///
/// # Errors
///
/// Returns [`BlackbudaError::NoSellTrades`] when the entries contain no
/// sell trades, and [`BlackbudaError::MalformedResponse`] when an amount
/// or price string does not parse.
pub fn volume_weighted_average_price(entries: &[TradeEntry]) -> crate::Result<f64> {
    let mut total_amount = 0.0;
    let mut total_notional = 0.0;

    for entry in entries {
        if entry.direction() != "sell" {
            continue;
        }
        let amount = entry.amount()?;
        total_amount += amount;
        total_notional += amount * entry.price()?;
    }

    if total_amount == 0.0 {
        return Err(BlackbudaError::NoSellTrades);
    }
    Ok(total_notional / total_amount)
}

/// Percentage change from `prior` to `current`: (current − prior) / prior × 100.
///
/// # Errors
///
/// Returns [`BlackbudaError::ZeroBaseline`] when `prior` is zero.
pub fn percentage_change(current: f64, prior: f64) -> crate::Result<f64> {
    if prior == 0.0 {
        return Err(BlackbudaError::ZeroBaseline);
    }
    Ok((current - prior) / prior * 100.0)
}

/// Commission income not collected on the transacted amount.
pub fn revenue_foregone(money_transacted: f64, commission_rate: f64) -> f64 {
    money_transacted * commission_rate
}

/// Unix timestamp exactly 365 days before the reference instant.
///
/// Deliberately not calendar-aware: the original study shifted by a flat
/// 365 days regardless of leap years.
pub fn year_ago_timestamp(reference: DateTime<Utc>) -> i64 {
    (reference - Duration::days(365)).timestamp()
}
