use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use parley_nlu::Predictor;
use parley_server::{Command, ParleyCli, ServerHandle, write_prediction};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
pub async fn main() -> Result<()> {
    let cli = ParleyCli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let predictor = Predictor::new()?;

    match cli.command {
        Command::Serve(config) => {
            let server = ServerHandle::start(&config, Arc::new(predictor)).await?;
            tokio::signal::ctrl_c().await?;
            info!("shutting down");
            server.stop().await;
        }
        Command::Predict(args) => {
            write_prediction(&predictor, &args, &mut std::io::stdout().lock())?;
        }
    }

    Ok(())
}
