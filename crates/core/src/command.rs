//! The `exchange` command.
//!
//! ```text
//! exchange -a <amount> -f <currency> [-t <currency>]
//! ```
//!
//! `--to` falls back to [`HOME_CURRENCY`]. A missing `--amount` or `--from`
//! produces no reply, the same as any other declined conversion.

use std::sync::Arc;

use clap::Parser;
use rust_decimal::Decimal;

use crate::errors::{Error, Result};
use crate::intent::ConversionIntent;
use crate::service::{ConversionServiceTrait, HOME_CURRENCY};

/// Options of the `exchange` command.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "exchange",
    about = "Look up a card-network exchange rate",
    allow_negative_numbers = true,
    after_help = "Examples:\n  20 usd to cny\n  exchange -f usd -a 20"
)]
pub struct ExchangeArgs {
    /// Amount to convert
    #[arg(short = 'a', long)]
    pub amount: Option<Decimal>,

    /// Source currency code
    #[arg(short = 'f', long)]
    pub from: Option<String>,

    /// Target currency code
    #[arg(short = 't', long, default_value = HOME_CURRENCY)]
    pub to: String,
}

impl ExchangeArgs {
    /// Parse the tokens following the command name.
    pub fn parse_tokens<I, T>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let argv = std::iter::once(ExchangeCommand::NAME.to_string())
            .chain(tokens.into_iter().map(Into::into));
        Ok(Self::try_parse_from(argv)?)
    }

    /// Options equivalent to a recognized free-text intent.
    pub fn from_intent(intent: &ConversionIntent) -> Result<Self> {
        let amount = intent
            .amount
            .parse::<Decimal>()
            .map_err(|_| Error::InvalidAmount(intent.amount.clone()))?;

        Ok(Self {
            amount: Some(amount),
            from: Some(intent.from.clone()),
            to: intent.to.clone(),
        })
    }
}

/// Command adapter over the conversion service.
#[derive(Clone)]
pub struct ExchangeCommand {
    service: Arc<dyn ConversionServiceTrait>,
}

impl ExchangeCommand {
    pub const NAME: &'static str = "exchange";

    pub fn new(service: Arc<dyn ConversionServiceTrait>) -> Self {
        Self { service }
    }

    /// Run with already parsed options.
    pub async fn execute(&self, args: &ExchangeArgs) -> Option<String> {
        let (Some(amount), Some(from)) = (args.amount, args.from.as_deref()) else {
            log::debug!("exchange invoked without amount or source currency");
            return None;
        };

        self.service.handle(amount, from, &args.to).await
    }

    /// Run on behalf of the passive listener.
    pub async fn execute_intent(&self, intent: &ConversionIntent) -> Option<String> {
        match ExchangeArgs::from_intent(intent) {
            Ok(args) => self.execute(&args).await,
            Err(e) => {
                log::debug!("Declining conversion intent: {}", e);
                None
            }
        }
    }

    /// Run a full command line such as `exchange -f usd -a 20`.
    ///
    /// Returns `Err` only for lines the argument parser rejects (including
    /// `--help`); declined conversions are `Ok(None)`.
    pub async fn run_line(&self, line: &str) -> Result<Option<String>> {
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some(name) if name.eq_ignore_ascii_case(Self::NAME) => {}
            _ => return Err(Error::Command(format!("not an `{}` command", Self::NAME))),
        }

        let args = ExchangeArgs::parse_tokens(tokens)?;
        Ok(self.execute(&args).await)
    }
}
