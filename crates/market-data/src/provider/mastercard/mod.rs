//! Mastercard settlement-rate provider.
//!
//! Talks to the public currency converter endpoints behind
//! `{base}/settlement/currencyrate/`:
//! - `settlement-currencies` for the list of accepted currency codes
//! - `conversion-rate` for a single amount conversion
//!
//! The conversion endpoint is always queried with the sentinel date
//! `0000-00-00` and a zero bank fee; the API answers with the current rate.

mod models;

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, log};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::MarketDataError;
use crate::models::{ApiBase, ConversionRequest, ConversionResult, CurrencyCode};
use crate::provider::RateProvider;

use models::{ConversionResponse, CurrenciesResponse};

/// Provider ID constant
const PROVIDER_ID: &str = "MASTERCARD";

const CURRENCIES_PATH: &str = "/settlement/currencyrate/settlement-currencies";
const CONVERSION_PATH: &str = "/settlement/currencyrate/conversion-rate";

/// Date sent with every conversion. The API does not serve historical
/// rates through this parameter.
pub const FX_DATE_SENTINEL: &str = "0000-00-00";

const BANK_FEE: &str = "0";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Mastercard settlement-rate provider.
///
/// # Example
///
/// ```ignore
/// use fxbot_market_data::{ApiBase, MastercardProvider};
///
/// let provider = MastercardProvider::new(ApiBase::Global);
/// ```
pub struct MastercardProvider {
    client: Client,
    base_url: String,
}

impl MastercardProvider {
    /// Create a provider for one of the supported regions.
    pub fn new(base: ApiBase) -> Self {
        Self::with_base_url(base.url())
    }

    /// Create a provider against an arbitrary base URL (mirrors, tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self::with_client(client, base_url)
    }

    /// Create a provider reusing an already configured HTTP client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `url` and decode the body, turning non-2xx answers into
    /// [`MarketDataError::Http`] with the raw body attached.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, MarketDataError> {
        let response = self.client.get(url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MarketDataError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| MarketDataError::Decode(e.to_string()))
    }

    /// Log a failed call at the severity its error class calls for.
    fn report(&self, operation: &str, error: &MarketDataError) {
        log!(
            error.log_level(),
            "{} {} failed: {}.",
            PROVIDER_ID,
            operation,
            error
        );
    }

    async fn fetch_currencies(&self) -> Result<Vec<CurrencyCode>, MarketDataError> {
        let response: CurrenciesResponse =
            self.get_json(&self.endpoint(CURRENCIES_PATH), &[]).await?;
        parse_currencies(response)
    }

    async fn fetch_conversion(
        &self,
        request: &ConversionRequest,
    ) -> Result<ConversionResult, MarketDataError> {
        let query = [
            ("fxDate", FX_DATE_SENTINEL.to_string()),
            ("transCurr", request.from.to_string()),
            ("crdhldBillCurr", request.to.to_string()),
            ("bankFee", BANK_FEE.to_string()),
            ("transAmt", request.amount.to_string()),
        ];

        let response: ConversionResponse = self
            .get_json(&self.endpoint(CONVERSION_PATH), &query)
            .await?;
        let converted = parse_converted_amount(response)?;

        Ok(ConversionResult::new(request, converted))
    }
}

#[async_trait]
impl RateProvider for MastercardProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn settlement_currencies(&self) -> Result<Vec<CurrencyCode>, MarketDataError> {
        self.fetch_currencies().await.inspect_err(|e| {
            self.report("settlement-currencies", e);
        })
    }

    async fn convert(
        &self,
        request: &ConversionRequest,
    ) -> Result<ConversionResult, MarketDataError> {
        self.fetch_conversion(request).await.inspect_err(|e| {
            self.report("conversion-rate", e);
        })
    }
}

/// Extract the alpha codes. Records without a usable code are skipped.
fn parse_currencies(response: CurrenciesResponse) -> Result<Vec<CurrencyCode>, MarketDataError> {
    let data = response.data.ok_or(MarketDataError::MissingField("data"))?;

    let codes = data
        .currencies
        .into_iter()
        .filter_map(|record| record.alpha_cd)
        .filter_map(|raw| match CurrencyCode::parse(&raw) {
            Ok(code) => Some(code),
            Err(e) => {
                debug!("Skipping settlement currency: {}", e);
                None
            }
        })
        .collect();

    Ok(codes)
}

fn parse_converted_amount(response: ConversionResponse) -> Result<Decimal, MarketDataError> {
    let data = response.data.ok_or(MarketDataError::MissingField("data"))?;

    if let Some(message) = data.error_message.as_deref() {
        debug!("{} rejected conversion: {}", PROVIDER_ID, message);
    }

    let value = data
        .crdhld_bill_amt
        .ok_or(MarketDataError::MissingField("crdhldBillAmt"))?;

    // JSON numbers such as `140.0` carry no meaningful scale.
    decimal_from_json(&value)
        .map(|amount| amount.normalize())
        .ok_or_else(|| MarketDataError::Decode(format!("crdhldBillAmt is not a number: {}", value)))
}

/// Decimal from a JSON number or numeric string. Numbers are parsed from
/// their shortest decimal rendering, so `143.27` does not pick up binary noise.
fn decimal_from_json(value: &Value) -> Option<Decimal> {
    let text = match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.trim().to_string(),
        _ => return None,
    };

    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}
