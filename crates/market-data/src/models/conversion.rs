use std::fmt;

use rust_decimal::Decimal;

use super::currency::CurrencyCode;

/// A single amount to convert between two currencies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionRequest {
    /// Amount in the source currency, scale as the user wrote it
    pub amount: Decimal,
    /// Transaction currency
    pub from: CurrencyCode,
    /// Cardholder billing currency
    pub to: CurrencyCode,
}

impl ConversionRequest {
    pub fn new(amount: Decimal, from: CurrencyCode, to: CurrencyCode) -> Self {
        Self { amount, from, to }
    }

    /// Same currency on both sides. Such requests are declined, not
    /// answered with an identity conversion.
    pub fn is_same_currency(&self) -> bool {
        self.from == self.to
    }
}

/// Outcome of a successful remote conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionResult {
    pub amount: Decimal,
    pub converted_amount: Decimal,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
}

impl ConversionResult {
    pub fn new(request: &ConversionRequest, converted_amount: Decimal) -> Self {
        Self {
            amount: request.amount,
            converted_amount,
            from: request.from.clone(),
            to: request.to.clone(),
        }
    }
}

/// Renders the chat reply, e.g. `20 USD = 140 CNY (reference only)`.
impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} = {} {} (reference only)",
            self.amount, self.from, self.converted_amount, self.to
        )
    }
}
