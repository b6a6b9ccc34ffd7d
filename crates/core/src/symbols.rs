//! Process-wide cache of the currency codes the backend accepts.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::RwLock;

use fxbot_market_data::{CurrencyCode, MarketDataError, RateProvider};

/// The set of currency codes the backend settles in.
pub type SymbolSet = HashSet<CurrencyCode>;

/// Lazily populated, write-once symbol set.
///
/// The first [`ensure_loaded`](Self::ensure_loaded) fetches the list from the
/// provider; later calls return the stored set. Failed fetches are not
/// remembered, so the next call tries again. Concurrent first calls may each
/// fetch; the last write wins and all writes carry the same data.
#[derive(Default)]
pub struct SymbolCache {
    symbols: RwLock<Option<Arc<SymbolSet>>>,
}

impl SymbolCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached set, fetching it from `provider` on first use.
    pub async fn ensure_loaded(
        &self,
        provider: &dyn RateProvider,
    ) -> Result<Arc<SymbolSet>, MarketDataError> {
        if let Some(symbols) = self.symbols.read().await.as_ref() {
            return Ok(Arc::clone(symbols));
        }

        let fetched: SymbolSet = provider.settlement_currencies().await?.into_iter().collect();
        let fetched = Arc::new(fetched);

        // An empty list is returned but not kept, the next call refetches.
        if fetched.is_empty() {
            log::warn!("{} returned no settlement currencies", provider.id());
        } else {
            log::debug!(
                "Loaded {} settlement currencies from {}",
                fetched.len(),
                provider.id()
            );
            *self.symbols.write().await = Some(Arc::clone(&fetched));
        }

        Ok(fetched)
    }

    pub async fn is_loaded(&self) -> bool {
        self.symbols.read().await.is_some()
    }
}
