use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::MarketDataError;

const MIN_LEN: usize = 3;
const MAX_LEN: usize = 10;

/// Currency code as used by the settlement API (e.g. "USD", "CNY").
///
/// Always stored uppercase, so equality is case-insensitive with respect to
/// the input it was parsed from. Whether a code is actually *accepted* is
/// decided by the symbol list the API publishes, not by this type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// Parse and normalize a code: trimmed, uppercased, 3-10 chars of
    /// `[A-Z0-9-]`.
    pub fn parse(raw: &str) -> Result<Self, MarketDataError> {
        let code = raw.trim().to_ascii_uppercase();
        let valid_len = (MIN_LEN..=MAX_LEN).contains(&code.len());
        let valid_chars = code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-');

        if valid_len && valid_chars {
            Ok(Self(code))
        } else {
            Err(MarketDataError::InvalidCurrency(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CurrencyCode {
    type Err = MarketDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = MarketDataError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uppercases() {
        let code = CurrencyCode::parse("usd").unwrap();
        assert_eq!(code.as_str(), "USD");
        assert_eq!(code, CurrencyCode::parse("USD").unwrap());
        assert_eq!(code, CurrencyCode::parse(" uSd ").unwrap());
    }

    #[test]
    fn test_parse_accepts_digits_and_hyphen() {
        assert!(CurrencyCode::parse("usdt-erc20").is_ok());
        assert!(CurrencyCode::parse("X99").is_ok());
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        assert!(CurrencyCode::parse("us").is_err());
        assert!(CurrencyCode::parse("abcdefghijk").is_err());
        assert!(CurrencyCode::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_bad_chars() {
        assert!(matches!(
            CurrencyCode::parse("U$D"),
            Err(MarketDataError::InvalidCurrency(raw)) if raw == "U$D"
        ));
        assert!(CurrencyCode::parse("us d").is_err());
    }

    #[test]
    fn test_serde_roundtrip_normalizes() {
        let code: CurrencyCode = serde_json::from_str("\"eur\"").unwrap();
        assert_eq!(code.as_str(), "EUR");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"EUR\"");
        assert!(serde_json::from_str::<CurrencyCode>("\"e\"").is_err());
    }
}
