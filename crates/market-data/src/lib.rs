//! fxbot Market Data Crate
//!
//! This crate talks to the card-network settlement-rate API that backs the
//! fxbot currency converter.
//!
//! # Overview
//!
//! - Currency codes validated and normalized on construction
//! - A provider trait so callers can swap the backend (or mock it)
//! - The Mastercard settlement-rate client, in its Global and CN regions
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! | ConversionRequest| --> |   RateProvider   |  (Mastercard, mocks)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          | ConversionResult |  (renders the reply)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`CurrencyCode`] - Uppercase currency identifier
//! - [`ConversionRequest`] - Amount plus source and target currency
//! - [`ConversionResult`] - Converted amount, `Display`s as the chat reply
//! - [`ApiBase`] - Supported API regions

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{ApiBase, ConversionRequest, ConversionResult, CurrencyCode};
pub use provider::mastercard::MastercardProvider;
pub use provider::RateProvider;
