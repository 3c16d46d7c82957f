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

//! # Flights Query Builder
//!
//! Side-effect free request assembly for the Sky Scrapper flight search.
//! Values are interpolated as-is: nothing is escaped or validated here.

use std::fmt;

use crate::flights_config::FlightMonitorConfig;

pub const API_KEY_HEADER: &str = "X-RapidAPI-Key";
pub const API_HOST_HEADER: &str = "X-RapidAPI-Host";

#[derive(Clone, PartialEq, Eq)]
pub struct FlightSearchRequest {
    pub url: String,
    pub api_key: String,
    pub api_host: String,
}

impl FlightSearchRequest {
    pub fn from_config(config: &FlightMonitorConfig) -> Self {
        let query = [
            ("fromEntityId", &config.from_entity_id),
            ("toEntityId", &config.to_entity_id),
            ("departDate", &config.depart_date),
            ("returnDate", &config.return_date),
            ("market", &config.market),
            ("locale", &config.locale),
            ("currency", &config.currency),
            ("adults", &config.adults),
            (
                "includeOriginNearbyAirports",
                &config.include_origin_nearby_airports,
            ),
            ("sort", &config.sort),
            ("stops", &config.stops),
        ]
        .iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join("&");

        Self {
            url: format!("{}?{}", config.base_url, query),
            api_key: config.rapidapi_key.clone(),
            api_host: config.rapidapi_host.clone(),
        }
    }

    pub fn headers(&self) -> [(&'static str, &str); 2] {
        [
            (API_KEY_HEADER, self.api_key.as_str()),
            (API_HOST_HEADER, self.api_host.as_str()),
        ]
    }
}

impl fmt::Debug for FlightSearchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlightSearchRequest")
            .field("url", &self.url)
            .field("api_key", &"<redacted>")
            .field("api_host", &self.api_host)
            .finish()
    }
}
