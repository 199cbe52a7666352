//! Command-line front end for the prediction engine
//!
//! ```text
//! twin-forecast <data.json|data.csv> <algorithmId|all> <variable>...
//! ```
//!
//! Results are printed to stdout as pretty JSON. Set `TWIN_FORECAST_CONFIG`
//! to a JSON file to override engine parameters.

use std::env;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use twin_forecast::{DataLoader, EngineConfig, PredictionEngine};

const USAGE: &str = "usage: twin-forecast <data.json|data.csv> <algorithmId|all> <variable>...";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "twin_forecast=info".into()),
        )
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 3 {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    }
    let (path, algorithm_id, variables) = (&args[0], &args[1], &args[2..]);

    let config = match env::var("TWIN_FORECAST_CONFIG") {
        Ok(config_path) => EngineConfig::from_file(config_path)?,
        Err(_) => EngineConfig::default(),
    };
    let engine = PredictionEngine::new(config)?;

    let data = DataLoader::from_path(path)?;
    info!(records = data.len(), path = %path, "loaded data");

    let results = if algorithm_id == "all" {
        engine.run_all(&data, variables)
    } else {
        engine.run(algorithm_id, &data, variables)
    };

    if results.is_empty() {
        info!(algorithm_id = %algorithm_id, "no forecasts produced");
    }

    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}
