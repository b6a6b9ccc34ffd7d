//! Wire models for the Mastercard settlement-rate endpoints.

use serde::Deserialize;
use serde_json::Value;

/// Envelope of `GET /settlement/currencyrate/settlement-currencies`.
#[derive(Debug, Deserialize)]
pub struct CurrenciesResponse {
    pub data: Option<CurrenciesData>,
}

#[derive(Debug, Deserialize)]
pub struct CurrenciesData {
    #[serde(default)]
    pub currencies: Vec<CurrencyRecord>,
}

/// One settlement currency. Only the alpha code is used.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyRecord {
    pub alpha_cd: Option<String>,
}

/// Envelope of `GET /settlement/currencyrate/conversion-rate`.
#[derive(Debug, Deserialize)]
pub struct ConversionResponse {
    pub data: Option<ConversionData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionData {
    /// Converted amount in the billing currency. Sent as a JSON number,
    /// occasionally as a string.
    pub crdhld_bill_amt: Option<Value>,
    /// Present instead of an amount when the API rejects the request.
    pub error_message: Option<String>,
}
