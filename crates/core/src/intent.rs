//! Recognizes conversion requests written as plain text, e.g. `20 usd to cny`.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// amount, optional space, code, ` to ` (any case), code.
    static ref INTENT_PATTERN: Regex =
        Regex::new(r"([0-9]+(?:\.?[0-9]+)?)\s?([A-Za-z0-9-]{3,10})\s(?i:to)\s([A-Za-z0-9-]{3,10})")
            .expect("intent pattern is a valid regex");
}

/// The three captures of a conversion intent, exactly as written.
///
/// Normalization (uppercasing codes, parsing the amount) is left to the
/// conversion service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionIntent {
    pub amount: String,
    pub from: String,
    pub to: String,
}

/// Find the first conversion intent in `text`, if any.
pub fn parse_intent(text: &str) -> Option<ConversionIntent> {
    let captures = INTENT_PATTERN.captures(text)?;

    Some(ConversionIntent {
        amount: captures.get(1)?.as_str().to_string(),
        from: captures.get(2)?.as_str().to_string(),
        to: captures.get(3)?.as_str().to_string(),
    })
}
