//! Passive listener for conversion requests in ordinary chat messages.
//!
//! The host hands every inbound message to [`PassiveListener::on_message`]
//! and gets back either [`Dispatch::Consumed`] (stop normal handling, maybe
//! send the reply) or [`Dispatch::PassThrough`] (continue as if the listener
//! did not exist). How the host chains its handlers is not our concern.

use crate::command::ExchangeCommand;
use crate::intent::{parse_intent, ConversionIntent};

/// One content element of an inbound message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    /// Address-mention of a user or bot
    Mention { id: String },
    /// Images, stickers, quotes and anything else that is not text
    Other { kind: String },
}

impl Segment {
    pub fn text(content: impl Into<String>) -> Self {
        Segment::Text(content.into())
    }

    pub fn mention(id: impl Into<String>) -> Self {
        Segment::Mention { id: id.into() }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InboundMessage {
    pub segments: Vec<Segment>,
}

impl InboundMessage {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new(vec![Segment::text(content)])
    }
}

/// Command prefix configured on the host.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Prefix {
    #[default]
    None,
    Single(String),
    /// Candidates tried in order; only the first match is stripped.
    Ordered(Vec<String>),
}

impl Prefix {
    /// Build from a list: one entry is a single prefix, none is no prefix.
    pub fn from_list(mut prefixes: Vec<String>) -> Self {
        match prefixes.len() {
            0 => Prefix::None,
            1 => Prefix::Single(prefixes.remove(0)),
            _ => Prefix::Ordered(prefixes),
        }
    }

    /// Remove the prefix from the start of `text`, if present.
    pub fn strip<'a>(&self, text: &'a str) -> &'a str {
        match self {
            Prefix::None => text,
            Prefix::Single(prefix) => text.strip_prefix(prefix.as_str()).unwrap_or(text),
            Prefix::Ordered(prefixes) => prefixes
                .iter()
                .find_map(|prefix| text.strip_prefix(prefix.as_str()))
                .unwrap_or(text),
        }
    }
}

/// Text of a message once a leading mention of `self_id` and the command
/// prefix are dropped, surrounding whitespace trimmed before the prefix.
///
/// `None` when the message has no content or does not start with text.
pub fn addressed_text<'a>(
    message: &'a InboundMessage,
    self_id: &str,
    prefix: &Prefix,
) -> Option<&'a str> {
    let mut segments = message.segments.iter().peekable();

    if matches!(segments.peek(), Some(Segment::Mention { id }) if id == self_id) {
        segments.next();
    }

    match segments.next()? {
        Segment::Text(content) => Some(prefix.strip(content.trim())),
        _ => None,
    }
}

/// What the host should do with a message after the listener saw it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// The message was a conversion request. Send the reply if there is one;
    /// either way, do not process the message further.
    Consumed(Option<String>),
    /// Not ours; continue with normal handling.
    PassThrough,
}

pub struct PassiveListener {
    command: ExchangeCommand,
    self_id: String,
    prefix: Prefix,
}

impl PassiveListener {
    pub fn new(command: ExchangeCommand, self_id: impl Into<String>, prefix: Prefix) -> Self {
        Self {
            command,
            self_id: self_id.into(),
            prefix,
        }
    }

    /// The text this listener would run the intent parser on.
    pub fn message_text<'a>(&self, message: &'a InboundMessage) -> Option<&'a str> {
        addressed_text(message, &self.self_id, &self.prefix)
    }

    /// Pure recognition step: the conversion intent carried by `message`.
    pub fn extract(&self, message: &InboundMessage) -> Option<ConversionIntent> {
        parse_intent(self.message_text(message)?)
    }

    pub async fn on_message(&self, message: &InboundMessage) -> Dispatch {
        match self.extract(message) {
            Some(intent) => {
                log::debug!(
                    "Conversion intent: {} {} to {}",
                    intent.amount,
                    intent.from,
                    intent.to
                );
                Dispatch::Consumed(self.command.execute_intent(&intent).await)
            }
            None => Dispatch::PassThrough,
        }
    }
}
