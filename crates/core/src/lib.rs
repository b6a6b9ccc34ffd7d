//! fxbot Core - currency conversion for chat.
//!
//! Turns chat input into settlement-rate lookups:
//! - [`intent`] recognizes `20 usd to cny` in free text
//! - [`symbols`] memoizes the accepted currency list for the process
//! - [`service`] validates a request, converts it, and renders the reply
//! - [`command`] exposes the service as the `exchange` command
//! - [`listener`] watches plain messages and short-circuits matching ones
//!
//! Every failure path ends in "no reply"; nothing here produces an error
//! message for the chat.

pub mod command;
pub mod errors;
pub mod intent;
pub mod listener;
pub mod service;
pub mod symbols;

pub use command::{ExchangeArgs, ExchangeCommand};
pub use errors::{Error, Result};
pub use intent::{parse_intent, ConversionIntent};
pub use listener::{addressed_text, Dispatch, InboundMessage, PassiveListener, Prefix, Segment};
pub use service::{ConversionService, ConversionServiceTrait, HOME_CURRENCY};
pub use symbols::{SymbolCache, SymbolSet};
