//!  Skyfare Flight Monitor
//!
//!  Copyright (C) 2026  Mamy Ratsimbazafy
//!
//!  This program is free software: you can redistribute it and/or modify
//!  it under the terms of the GNU Affero General Public License as published by
//!  the Free Software Foundation, either version 3 of the License, or
//!  (at your option) any later version.
//!
//!  This program is distributed in the hope that it will be useful,
//!  but WITHOUT ANY WARRANTY; without even the implied warranty of
//!  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//!  GNU Affero General Public License for more details.
//!
//!  You should have received a copy of the GNU Affero General Public License
//!  along with this program.  If not, see <http://www.gnu.org/licenses/>.

//! CLI listing the cheapest itineraries of a Sky Scrapper flight search.

use anyhow::{Context, Result};
use clap::Parser;
use skyfare_flight_monitor::{
    DEFAULT_ENV_FILE, DEFAULT_TOP_N, FlightMonitorConfig, FlightSearchRequest,
    RapidApiFlightsClient, SearchOutcome, load_env_file, render_fetch_failure, render_report,
    top_cheapest,
};
use std::path::PathBuf;

/// CLI arguments
#[derive(Parser, Debug)]
#[command(name = "skyfare-flights")]
#[command(author, version, about, long_about = None)]
struct CliArgs {
    /// Dotenv file holding BASE_URL, FROM_ENTITY_ID, RAPIDAPI_KEY, ...
    #[arg(short, long, default_value = DEFAULT_ENV_FILE)]
    env_file: PathBuf,

    /// Number of itineraries to list
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_N)]
    top: usize,

    /// Verbose output
    #[arg(short, long, default_value = "false")]
    verbose: bool,

    /// Save raw JSON response to file for debugging
    #[arg(long)]
    save_json: bool,
}

/// Configure logging based on verbosity level
fn setup_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    setup_logging(args.verbose);

    tracing::info!("Starting skyfare-flights CLI");
    tracing::debug!("Args: {:?}", args);

    load_env_file(&args.env_file);
    let config = FlightMonitorConfig::from_env();
    let missing = config.missing_keys();
    if !missing.is_empty() {
        tracing::warn!("Empty configuration values: {}", missing.join(", "));
    }
    tracing::debug!("Config: {:?}", config);

    let request = FlightSearchRequest::from_config(&config);
    tracing::debug!("Request: {:?}", request);

    let client = RapidApiFlightsClient::new()?;
    let result = match client
        .search_flights(&request)
        .await
        .context("Search failed")?
    {
        SearchOutcome::Found(result) => result,
        SearchOutcome::HttpFailure { status, body } => {
            render_fetch_failure(&mut std::io::stderr().lock(), status, &body)?;
            return Ok(());
        }
    };

    if args.save_json {
        let filename = format!(
            "flights_{}_{}.json",
            config.from_entity_id, config.to_entity_id
        );
        tokio::fs::write(&filename, &result.raw_response)
            .await
            .context("Failed to write JSON file")?;
        tracing::info!("Saved JSON to {}", filename);
    }

    let ranking = top_cheapest(result.itineraries(), args.top);
    render_report(&mut std::io::stdout().lock(), &ranking, args.top)?;

    Ok(())
}
