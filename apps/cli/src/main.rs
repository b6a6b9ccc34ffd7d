mod config;
mod console;
mod main_lib;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;

use config::Config;
use console::Outcome;
use main_lib::{build_host, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(config.log_format);
    let host = build_host(&config);
    tracing::info!(
        "Listening on stdin (quick mode: {}, self id: {})",
        config.quick_mode,
        config.self_id
    );

    // Each message is handled on its own task; replies print as they finish.
    let mut in_flight = JoinSet::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let host = host.clone();
        in_flight.spawn(async move {
            match host.dispatch(&line).await {
                Outcome::Reply(text) | Outcome::Usage(text) => println!("{}", text),
                Outcome::Declined | Outcome::Ignored => {}
            }
        });
        while in_flight.try_join_next().is_some() {}
    }

    while in_flight.join_next().await.is_some() {}
    Ok(())
}
