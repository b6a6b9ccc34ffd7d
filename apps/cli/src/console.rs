//! Line-oriented chat host: every stdin line is one inbound message.

use fxbot_core::{
    addressed_text, Dispatch, Error, ExchangeCommand, InboundMessage, PassiveListener, Prefix,
    Segment,
};

/// What to print for one line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Reply(String),
    /// `exchange` was invoked with arguments it could not parse, or `--help`.
    Usage(String),
    /// Handled, nothing to say.
    Declined,
    /// Not addressed to the converter.
    Ignored,
}

pub struct ConsoleHost {
    command: ExchangeCommand,
    listener: Option<PassiveListener>,
    self_id: String,
    prefix: Prefix,
}

impl ConsoleHost {
    /// `listener` is `None` when quick mode is off.
    pub fn new(
        command: ExchangeCommand,
        listener: Option<PassiveListener>,
        self_id: impl Into<String>,
        prefix: Prefix,
    ) -> Self {
        Self {
            command,
            listener,
            self_id: self_id.into(),
            prefix,
        }
    }

    /// Split a raw line into segments. A leading `@name` is a mention.
    pub fn parse_line(line: &str) -> InboundMessage {
        let line = line.trim();
        if line.is_empty() {
            return InboundMessage::default();
        }

        let mut segments = Vec::new();
        let mut rest = line;

        if let Some(stripped) = line.strip_prefix('@') {
            let (id, tail) = stripped
                .split_once(char::is_whitespace)
                .unwrap_or((stripped, ""));
            if !id.is_empty() {
                segments.push(Segment::mention(id));
                rest = tail.trim_start();
            }
        }

        if !rest.is_empty() {
            segments.push(Segment::text(rest));
        }
        InboundMessage::new(segments)
    }

    pub async fn dispatch(&self, line: &str) -> Outcome {
        let message = Self::parse_line(line);

        if let Some(text) = addressed_text(&message, &self.self_id, &self.prefix) {
            let is_command = text
                .split_whitespace()
                .next()
                .is_some_and(|word| word.eq_ignore_ascii_case(ExchangeCommand::NAME));
            if is_command {
                return match self.command.run_line(text).await {
                    Ok(Some(reply)) => Outcome::Reply(reply),
                    Ok(None) => Outcome::Declined,
                    Err(Error::Command(usage)) => Outcome::Usage(usage),
                    Err(e) => {
                        tracing::debug!("exchange command failed: {}", e);
                        Outcome::Declined
                    }
                };
            }
        }

        match &self.listener {
            Some(listener) => match listener.on_message(&message).await {
                Dispatch::Consumed(Some(reply)) => Outcome::Reply(reply),
                Dispatch::Consumed(None) => Outcome::Declined,
                Dispatch::PassThrough => Outcome::Ignored,
            },
            None => Outcome::Ignored,
        }
    }
}
