mod cli;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use journal_core::AppConfig;
use journal_tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("JOURNAL_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        None => {
            let config = match AppConfig::load(cli.config.as_deref()) {
                Ok(config) => config,
                Err(e) => output::output_error(&e.to_string()),
            };
            let mut app = App::new(config);
            app.run().await?;
        }
        Some(Commands::Replay(args)) => {
            if let Err(e) = handlers::replay::handle(args) {
                output::output_error(&e.to_string());
            }
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "journal",
                &mut std::io::stdout(),
            );
        }
    }

    Ok(())
}
