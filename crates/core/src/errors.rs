//! Core error types for fxbot.
//!
//! None of these reach the chat: the conversion service turns every error
//! into "no reply". They exist so each decline has a name in tests and
//! debug logs.

use thiserror::Error;

use fxbot_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("Currency '{0}' is not supported")]
    UnsupportedCurrency(String),

    #[error("Cannot convert {0} into itself")]
    SameCurrency(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("{0}")]
    Command(String),
}

impl From<clap::Error> for Error {
    fn from(e: clap::Error) -> Self {
        Error::Command(e.render().to_string())
    }
}
