use std::fmt;
use std::str::FromStr;

use crate::errors::MarketDataError;

/// Regional deployments of the settlement-rate API.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ApiBase {
    /// `https://www.mastercard.com`
    Global,
    /// `https://www.mastercard.com.cn`
    #[default]
    China,
}

impl ApiBase {
    pub const ALL: [ApiBase; 2] = [ApiBase::Global, ApiBase::China];

    /// Base URL without a trailing slash.
    pub fn url(&self) -> &'static str {
        match self {
            ApiBase::Global => "https://www.mastercard.com",
            ApiBase::China => "https://www.mastercard.com.cn",
        }
    }

    /// Human label for the region.
    pub fn label(&self) -> &'static str {
        match self {
            ApiBase::Global => "Global",
            ApiBase::China => "CN",
        }
    }
}

impl FromStr for ApiBase {
    type Err = MarketDataError;

    /// Accepts either the full base URL (trailing slash optional) or the
    /// region alias (`global`, `cn`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().trim_end_matches('/');
        ApiBase::ALL
            .into_iter()
            .find(|base| {
                value.eq_ignore_ascii_case(base.url()) || value.eq_ignore_ascii_case(base.label())
            })
            .ok_or_else(|| MarketDataError::InvalidApiBase(s.to_string()))
    }
}

impl fmt::Display for ApiBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url())
    }
}
