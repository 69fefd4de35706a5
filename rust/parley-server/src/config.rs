use std::net::SocketAddr;

use clap::{Args, Parser, Subcommand};

/// Address used when neither `--addr` nor `PARLEY_ADDR` is given.
pub const DEFAULT_ADDR: &str = "127.0.0.1:8787";

#[derive(Debug, Parser)]
#[command(name = "parley")]
#[command(bin_name = "parley")]
#[command(about = "Rule-based intent and entity prediction", long_about = None)]
pub struct ParleyCli {
    /// Log filter directives, e.g. `info` or `parley_nlu=debug`.
    #[arg(long, env = "RUST_LOG", default_value = "info", global = true)]
    pub log: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve predictions over HTTP at `POST /predict`.
    Serve(ServerConfig),

    /// Predict a single utterance and print the result as JSON.
    Predict(PredictArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ServerConfig {
    /// Address to listen on.
    #[arg(long, env = "PARLEY_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            addr: SocketAddr::from(([127, 0, 0, 1], 8787)),
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct PredictArgs {
    /// The utterance; multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Also print the trigger-phrase match count of every intent.
    #[arg(long)]
    pub explain: bool,
}

impl PredictArgs {
    pub fn utterance(&self) -> String {
        self.text.join(" ")
    }
}
