use anyhow::Context;
use clap::Parser;
use irdispatch::{parse_sequence, CommandDispatcher, DispatcherConfig, DEFAULT_PORT};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Send a command sequence to an infrared daemon
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Host of the infrared daemon
    #[arg(long)]
    host: String,

    /// TCP port of the infrared daemon
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Remote-control profile registered with the daemon
    #[arg(long)]
    remote: String,

    /// Settle delay in milliseconds after each transmitted command
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Optional connect timeout in milliseconds (unbounded if omitted)
    #[arg(long)]
    connect_timeout_ms: Option<u64>,

    /// Tokens to execute in order: key codes, or DELAY|<ms> pauses
    #[arg(required = true)]
    tokens: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let args = Args::parse();

    let config = DispatcherConfig {
        host: args.host,
        port: args.port,
        remote: args.remote,
        inter_command_delay: Duration::from_millis(args.delay_ms),
        connect_timeout: args.connect_timeout_ms.map(Duration::from_millis),
    };

    let sequence = parse_sequence(&args.tokens);
    info!(
        "dispatching {} token(s) to {} (remote {})",
        sequence.len(),
        config.address(),
        config.remote
    );

    let dispatcher = CommandDispatcher::new(config);
    dispatcher
        .run(&sequence)
        .await
        .context("command sequence aborted")?;

    info!("sequence completed");
    Ok(())
}
