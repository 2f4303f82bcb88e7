//! Buda.com REST client and "Black Buda" event report.
//!
//! Queries the public Buda v2 API for a single market, computes the money
//! transacted during the zero-commission event, the year-over-year change
//! in traded volume, and the commission revenue foregone, then renders the
//! three-line report printed by the binary.

pub mod client;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod report;

pub use error::{BlackbudaError, Result};
