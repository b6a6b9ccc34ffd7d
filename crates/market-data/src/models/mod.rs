//! Settlement-rate models
//!
//! This module contains the core data types shared by the client and its callers:
//! - `currency` - Validated currency codes (CurrencyCode)
//! - `conversion` - Conversion request and result (ConversionRequest, ConversionResult)
//! - `api_base` - Supported API regions (ApiBase)

mod api_base;
mod conversion;
mod currency;

pub use api_base::ApiBase;
pub use conversion::{ConversionRequest, ConversionResult};
pub use currency::CurrencyCode;
