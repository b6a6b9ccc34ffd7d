//! Conversion service: the single path from a raw `{amount, from, to}`
//! triple to a chat reply.

use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;

use fxbot_market_data::{ConversionRequest, ConversionResult, CurrencyCode, RateProvider};

use crate::errors::{Error, Result};
use crate::symbols::{SymbolCache, SymbolSet};

/// Target currency when the caller does not name one.
pub const HOME_CURRENCY: &str = "CNY";

/// Trait defining the contract for conversion operations.
#[async_trait]
pub trait ConversionServiceTrait: Send + Sync {
    /// Reply text for a conversion, or `None` when the request is declined
    /// or the lookup fails.
    async fn handle(&self, amount: Decimal, from: &str, to: &str) -> Option<String>;
}

pub struct ConversionService {
    provider: Arc<dyn RateProvider>,
    symbols: Arc<SymbolCache>,
}

impl ConversionService {
    pub fn new(provider: Arc<dyn RateProvider>) -> Self {
        Self::with_symbol_cache(provider, Arc::new(SymbolCache::new()))
    }

    /// Build a service sharing an existing symbol cache.
    pub fn with_symbol_cache(provider: Arc<dyn RateProvider>, symbols: Arc<SymbolCache>) -> Self {
        Self { provider, symbols }
    }

    pub fn symbols(&self) -> &SymbolCache {
        &self.symbols
    }

    /// Validate the triple against the symbol set and run the remote
    /// conversion.
    ///
    /// Declines (unknown code, same currency, non-positive amount) never
    /// reach the provider's conversion endpoint.
    pub async fn convert(&self, amount: Decimal, from: &str, to: &str) -> Result<ConversionResult> {
        let symbols = self.symbols.ensure_loaded(self.provider.as_ref()).await?;

        let from = Self::supported_code(&symbols, from)?;
        let to = Self::supported_code(&symbols, to)?;

        let request = ConversionRequest::new(amount, from, to);
        if request.is_same_currency() {
            return Err(Error::SameCurrency(request.from.to_string()));
        }
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount(amount.to_string()));
        }

        Ok(self.provider.convert(&request).await?)
    }

    fn supported_code(symbols: &SymbolSet, raw: &str) -> Result<CurrencyCode> {
        let code = CurrencyCode::parse(raw)
            .map_err(|_| Error::UnsupportedCurrency(raw.to_uppercase()))?;

        if symbols.contains(&code) {
            Ok(code)
        } else {
            Err(Error::UnsupportedCurrency(code.to_string()))
        }
    }
}

#[async_trait]
impl ConversionServiceTrait for ConversionService {
    async fn handle(&self, amount: Decimal, from: &str, to: &str) -> Option<String> {
        // Transport failures were already logged by the provider.
        self.convert(amount, from, to)
            .await
            .ok()
            .map(|result| result.to_string())
    }
}
