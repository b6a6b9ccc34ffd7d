use std::str::FromStr;

use anyhow::{bail, Context};

use fxbot_core::Prefix;
use fxbot_market_data::ApiBase;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub api_base: ApiBase,
    /// Reply to plain-text conversion requests, not only to `exchange`.
    pub quick_mode: bool,
    pub self_id: String,
    pub prefix: Prefix,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = match lookup("FXBOT_API_BASE") {
            Some(raw) => ApiBase::from_str(&raw).context("Invalid FXBOT_API_BASE")?,
            None => ApiBase::default(),
        };

        let quick_mode = match lookup("FXBOT_QUICK") {
            Some(raw) => parse_flag(&raw).context("Invalid FXBOT_QUICK")?,
            None => true,
        };

        let self_id = lookup("FXBOT_SELF_ID")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "fxbot".into());

        let prefix = Prefix::from_list(
            lookup("FXBOT_PREFIX")
                .unwrap_or_else(|| "/".into())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        );

        let log_format = match lookup("FXBOT_LOG_FORMAT") {
            Some(raw) if raw.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            api_base,
            quick_mode,
            self_id,
            prefix,
            log_format,
        })
    }
}

fn parse_flag(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected a boolean, got '{}'", other),
    }
}
