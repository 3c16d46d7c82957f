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

//! # Flight Search Client
//!
//! Effectful (network) operations: one GET against the flight search API.

use crate::flights_query_builder::FlightSearchRequest;
use crate::flights_results_parser::FlightSearchResult;
use anyhow::{Context, Result};
use std::sync::Arc;
use wreq::redirect::Policy;
use wreq_util::Emulation;

/// Outcome of a single HTTP exchange that reached the server.
/// Anything but `200 OK` is a failure, other 2xx codes included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Success(String),
    HttpFailure { status: u16, body: String },
}

#[derive(Debug, Clone)]
pub enum SearchOutcome {
    Found(FlightSearchResult),
    HttpFailure { status: u16, body: String },
}

#[derive(Clone)]
pub struct RapidApiFlightsClient {
    client: Arc<wreq::Client>,
}

impl RapidApiFlightsClient {
    pub fn new() -> Result<Self> {
        let client = wreq::Client::builder()
            .emulation(Emulation::Safari18_5)
            .redirect(Policy::default())
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client: Arc::new(client),
        })
    }
}

impl RapidApiFlightsClient {
    /// Issue exactly one request. Only transport failures are errors.
    pub async fn fetch_raw(&self, request: &FlightSearchRequest) -> Result<FetchOutcome> {
        let http_start = std::time::Instant::now();
        tracing::debug!("[fetch_raw] Starting HTTP request to: {}", request.url);

        let mut builder = self.client.get(&request.url);
        for (name, value) in request.headers() {
            builder = builder.header(name, value);
        }
        let response = builder
            .send()
            .await
            .with_context(|| format!("Request to {} failed", request.url))?;

        let status = response.status();
        tracing::debug!(
            "[fetch_raw] HTTP Status: {} {} after {:?}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown"),
            http_start.elapsed()
        );

        let body = response.text().await.context("Read body")?;
        tracing::debug!("[fetch_raw] Response body: {} KB", body.len() / 1024);

        if status != wreq::StatusCode::OK {
            return Ok(FetchOutcome::HttpFailure {
                status: status.as_u16(),
                body,
            });
        }
        Ok(FetchOutcome::Success(body))
    }

    pub async fn search_flights(&self, request: &FlightSearchRequest) -> Result<SearchOutcome> {
        let overall_start = std::time::Instant::now();

        let body = match self.fetch_raw(request).await? {
            FetchOutcome::Success(body) => body,
            FetchOutcome::HttpFailure { status, body } => {
                let body_preview = body.chars().take(500).collect::<String>();
                tracing::error!("HTTP error {}: {}", status, body_preview);
                return Ok(SearchOutcome::HttpFailure { status, body });
            }
        };

        let result = FlightSearchResult::from_json(&body).context("Parse failed")?;
        tracing::info!(
            "Search completed in {:?}: {} itineraries",
            overall_start.elapsed(),
            result.len()
        );
        Ok(SearchOutcome::Found(result))
    }
}
