//! Error types for the settlement-rate client.
//!
//! This module provides:
//! - [`MarketDataError`]: The main error enum for all remote rate operations
//! - [`MarketDataError::log_level`]: The severity a failure is reported at

use log::Level;
use thiserror::Error;

/// Errors that can occur while talking to the settlement-rate API.
///
/// Every variant maps to a [`log::Level`] via [`log_level`](Self::log_level):
/// protocol-level failures (the server answered with a non-success status)
/// are warnings, everything else is an error.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Http {
        /// Response status code
        status: u16,
        /// Raw response body, as returned by the server
        body: String,
    },

    /// Connecting, sending, or reading the response failed.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not the JSON shape we expect.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The response decoded but did not carry the field we need.
    #[error("Missing field in response: {0}")]
    MissingField(&'static str),

    /// A string that does not look like a currency code.
    #[error("Invalid currency code: {0}")]
    InvalidCurrency(String),

    /// An API base outside the supported regions.
    #[error("Unsupported API base: {0}")]
    InvalidApiBase(String),
}

impl MarketDataError {
    /// Returns the severity this failure should be logged at.
    ///
    /// # Examples
    ///
    /// ```
    /// use fxbot_market_data::errors::MarketDataError;
    /// use log::Level;
    ///
    /// let error = MarketDataError::Http { status: 503, body: "busy".to_string() };
    /// assert_eq!(error.log_level(), Level::Warn);
    ///
    /// let error = MarketDataError::MissingField("crdhldBillAmt");
    /// assert_eq!(error.log_level(), Level::Error);
    /// ```
    pub fn log_level(&self) -> Level {
        match self {
            Self::Http { .. } => Level::Warn,
            Self::Network(_)
            | Self::Decode(_)
            | Self::MissingField(_)
            | Self::InvalidCurrency(_)
            | Self::InvalidApiBase(_) => Level::Error,
        }
    }

    /// HTTP status code, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
