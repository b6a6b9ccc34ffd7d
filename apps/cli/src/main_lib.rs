use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use fxbot_core::{ConversionService, ExchangeCommand, PassiveListener};
use fxbot_market_data::MastercardProvider;

use crate::config::{Config, LogFormat};
use crate::console::ConsoleHost;

/// Logs go to stderr; stdout carries replies only.
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

pub fn build_host(config: &Config) -> Arc<ConsoleHost> {
    let provider = Arc::new(MastercardProvider::new(config.api_base));
    tracing::info!("Rate backend in use: {}", provider.base_url());

    let service = Arc::new(ConversionService::new(provider));
    let command = ExchangeCommand::new(service);
    let listener = config
        .quick_mode
        .then(|| PassiveListener::new(command.clone(), &config.self_id, config.prefix.clone()));

    Arc::new(ConsoleHost::new(
        command,
        listener,
        &config.self_id,
        config.prefix.clone(),
    ))
}
