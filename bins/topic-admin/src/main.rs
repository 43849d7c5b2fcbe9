mod config;
mod error;

use clap::Parser;
use config::{Cli, Commands};

mod cmd;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Create(args) => cmd::create::run(&cli.config, args).await,
        Commands::Delete(args) => cmd::delete::run(&cli.config, args).await,
    };
    match result {
        Ok(outcome) => {
            println!("{}: {}", outcome.kind(), outcome.message());
            if !(outcome.is_success() || outcome.is_already_satisfied()) {
                std::process::exit(2);
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
