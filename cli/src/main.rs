//! azd - provision and deploy cloud applications

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use azd_cli::app::OutputMode;
use azd_cli::cli::Cli;
use azd_cli::commands::error_code;
use azd_cli::output::json::format_error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let json = cli.output == OutputMode::Json;
    if let Err(e) = cli.run().await {
        tracing::debug!("command failed: {e:?}");
        match format_error(&format!("{e:#}"), error_code(&e)) {
            Ok(obj) if json => println!("{obj}"),
            _ => eprintln!("Error: {e:#}"),
        }
        std::process::exit(1);
    }
}
