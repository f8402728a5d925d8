//! Stake House Demo - terminal front end
//!
//! Reads one command per line from stdin and prints the resulting
//! notification or view. Logs go to stderr.

use anyhow::Context;
use clap::Parser;
use stake_house_demo::commands::{self, Command, Flow};
use stake_house_demo::{render, CliArgs, DemoConfig, DemoState, DEFAULT_LOG_FILTER};
use std::io::Write;
use std::sync::Arc;
use stellar_invoker::StellarClient;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = DemoConfig::from(CliArgs::parse());
    let stellar_config = config
        .stellar_config()
        .context("invalid network configuration")?;

    tracing::info!(
        "Starting stake house demo on {:?} via {}",
        stellar_config.network,
        stellar_config.horizon_url
    );

    let client = StellarClient::new(stellar_config).context("failed to create Stellar client")?;
    let mut state = DemoState::new(Arc::new(client), config);

    if state.config.bootstrap {
        println!("Generating and funding wallets...");
        commands::bootstrap(&mut state).await;
        println!("{}", render::dashboard(&state));
    }
    println!("Type 'help' for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush().context("failed to flush stdout")?;

        let Some(line) = lines.next_line().await.context("failed to read stdin")? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command: Command = match line.parse() {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        state.notification = None;
        match commands::dispatch(&mut state, command).await {
            Flow::Quit => break,
            Flow::Show(text) => println!("{}", text),
            Flow::Continue => {
                if let Some(current) = &state.notification {
                    println!("{}", render::notification(current));
                }
            }
        }
    }

    tracing::info!("Goodbye");
    Ok(())
}
