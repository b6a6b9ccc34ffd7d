//! Rate provider trait definitions.
//!
//! This module defines the `RateProvider` trait that every settlement-rate
//! backend implements.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{ConversionRequest, ConversionResult, CurrencyCode};

/// Trait for settlement-rate backends.
///
/// Implementations perform exactly one remote call per method invocation and
/// hold no caches of their own; memoizing the currency list is left to the
/// caller.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use fxbot_market_data::provider::RateProvider;
///
/// struct FixedRateProvider;
///
/// #[async_trait]
/// impl RateProvider for FixedRateProvider {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn settlement_currencies(&self) -> Result<Vec<CurrencyCode>, MarketDataError> {
///         Ok(vec![CurrencyCode::parse("USD")?, CurrencyCode::parse("CNY")?])
///     }
///
///     // ... implement convert
/// }
/// ```
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Unique identifier for this provider, used in log lines.
    fn id(&self) -> &'static str;

    /// Fetch the list of currency codes the backend settles in.
    async fn settlement_currencies(&self) -> Result<Vec<CurrencyCode>, MarketDataError>;

    /// Convert `request.amount` from `request.from` into `request.to`.
    ///
    /// Failures are returned, never swallowed; a failed conversion has no
    /// result to format.
    async fn convert(
        &self,
        request: &ConversionRequest,
    ) -> Result<ConversionResult, MarketDataError>;
}
