//! WeatherPro - current weather and forecasts in your terminal
//!
//! Fetches current conditions and the 5-day forecast for a city, a pair of
//! coordinates or a saved forecast file, and prints an hourly strip and a
//! daily summary.

use clap::Parser;

use weatherpro::app::{load_report, AppError};
use weatherpro::cli::{Cli, StartupConfig};

async fn run(cli: &Cli) -> Result<(), AppError> {
    let config = StartupConfig::from_cli(cli)?;
    log::debug!("Startup location: {:?}", config.location);

    let report = load_report(&config).await?;
    println!("{}", report.render(&config));

    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let env = env_logger::Env::default().default_filter_or(cli.log_level.as_str());
    env_logger::init_from_env(env);

    if let Err(e) = run(&cli).await {
        log::debug!("Run failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
