use std::io::{self, Read};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use self::cli::{Cli, Command};

pub mod cli;
pub mod commands;
pub mod settings;

#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = settings::load_config(cli.config.as_deref())?;
    cli.apply(&mut config);

    init_tracing(config.log_json);
    if let Some(path) = &cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    let mut stdout = io::stdout();

    match cli.command {
        Command::Convert { text } => {
            let processor = commands::load_processor(&config)?;
            let text = if text.is_empty() {
                let mut input = String::new();
                io::stdin().read_to_string(&mut input)?;
                input
            } else {
                text.join(" ")
            };
            commands::convert(&processor, &text, &mut stdout)
        }
        Command::Suggest { partial, .. } => {
            let processor = commands::load_processor(&config)?;
            commands::suggest(
                &processor,
                &partial.join(" "),
                config.suggestion_limit,
                &mut stdout,
            )
        }
        Command::Build { .. } => commands::build(&config.builder, &mut stdout).await,
        Command::Info => {
            let processor = commands::load_processor(&config)?;
            commands::info(processor.dictionary(), &mut stdout)
        }
        Command::InitConfig { path } => settings::init_config_file(&path),
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
