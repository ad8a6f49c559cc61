use clap::Parser;
use solar_power_predictor::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve::run().await,
        Command::Api => cli::api::run().await,
        Command::Predict(args) => cli::predict::run(args).await,
        Command::Ranges(args) => cli::ranges::run(args).await,
    }
}
