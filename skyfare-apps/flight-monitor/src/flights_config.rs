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

//! # Flight Monitor Configuration
//!
//! Reads the search parameters and API credentials from the process
//! environment, optionally seeded from a dotenv file.

use std::fmt;
use std::path::Path;

/// File read by the CLI when no `--env-file` is given.
pub const DEFAULT_ENV_FILE: &str = "environment.env";

/// Populate the process environment from a dotenv file.
///
/// Variables already set in the environment win over the file. A missing or
/// unreadable file only logs a warning: the run continues with whatever the
/// environment already holds.
pub fn load_env_file(path: impl AsRef<Path>) {
    let path = path.as_ref();
    match dotenv::from_path(path) {
        Ok(()) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(e) => tracing::warn!("Could not load {}: {}", path.display(), e),
    }
}

#[derive(Clone, Default, PartialEq, Eq)]
pub struct FlightMonitorConfig {
    pub base_url: String,
    pub from_entity_id: String,
    pub to_entity_id: String,
    pub depart_date: String,
    pub return_date: String,
    pub market: String,
    pub locale: String,
    pub currency: String,
    pub adults: String,
    pub include_origin_nearby_airports: String,
    pub sort: String,
    pub stops: String,
    pub rapidapi_key: String,
    pub rapidapi_host: String,
}

impl FlightMonitorConfig {
    /// Environment keys, in the order the fields are declared.
    pub const KEYS: [&'static str; 14] = [
        "BASE_URL",
        "FROM_ENTITY_ID",
        "TO_ENTITY_ID",
        "DEPART_DATE",
        "RETURN_DATE",
        "MARKET",
        "LOCALE",
        "CURRENCY",
        "ADULTS",
        "INCLUDE_ORIGIN_NEARBY_AIRPORTS",
        "SORT",
        "STOPS",
        "RAPIDAPI_KEY",
        "RAPIDAPI_HOST",
    ];

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Absent keys become empty strings.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).unwrap_or_default();
        Self {
            base_url: get("BASE_URL"),
            from_entity_id: get("FROM_ENTITY_ID"),
            to_entity_id: get("TO_ENTITY_ID"),
            depart_date: get("DEPART_DATE"),
            return_date: get("RETURN_DATE"),
            market: get("MARKET"),
            locale: get("LOCALE"),
            currency: get("CURRENCY"),
            adults: get("ADULTS"),
            include_origin_nearby_airports: get("INCLUDE_ORIGIN_NEARBY_AIRPORTS"),
            sort: get("SORT"),
            stops: get("STOPS"),
            rapidapi_key: get("RAPIDAPI_KEY"),
            rapidapi_host: get("RAPIDAPI_HOST"),
        }
    }

    fn values(&self) -> [&str; 14] {
        [
            self.base_url.as_str(),
            self.from_entity_id.as_str(),
            self.to_entity_id.as_str(),
            self.depart_date.as_str(),
            self.return_date.as_str(),
            self.market.as_str(),
            self.locale.as_str(),
            self.currency.as_str(),
            self.adults.as_str(),
            self.include_origin_nearby_airports.as_str(),
            self.sort.as_str(),
            self.stops.as_str(),
            self.rapidapi_key.as_str(),
            self.rapidapi_host.as_str(),
        ]
    }

    /// Keys whose value is empty. Reported, never enforced.
    pub fn missing_keys(&self) -> Vec<&'static str> {
        Self::KEYS
            .iter()
            .zip(self.values())
            .filter(|(_, value)| value.is_empty())
            .map(|(key, _)| *key)
            .collect()
    }
}

impl fmt::Debug for FlightMonitorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlightMonitorConfig")
            .field("base_url", &self.base_url)
            .field("from_entity_id", &self.from_entity_id)
            .field("to_entity_id", &self.to_entity_id)
            .field("depart_date", &self.depart_date)
            .field("return_date", &self.return_date)
            .field("market", &self.market)
            .field("locale", &self.locale)
            .field("currency", &self.currency)
            .field("adults", &self.adults)
            .field(
                "include_origin_nearby_airports",
                &self.include_origin_nearby_airports,
            )
            .field("sort", &self.sort)
            .field("stops", &self.stops)
            .field("rapidapi_key", &"<redacted>")
            .field("rapidapi_host", &self.rapidapi_host)
            .finish()
    }
}
