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

//! # Flights Results Parser
//!
//! Side-effect free decoding of the flight search JSON response.
//! Every field is optional: the API omits whatever it does not know.

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlightSearchResult {
    #[serde(default)]
    pub data: Option<ResultData>,
    #[serde(skip)]
    pub raw_response: String,
}

impl FlightSearchResult {
    pub fn from_json(body: &str) -> Result<Self> {
        let mut result: Self =
            serde_json::from_str(body).context("Response body is not a flight search result")?;
        result.raw_response = body.to_string();
        tracing::debug!(
            "Decoded {} itineraries from {} bytes",
            result.itineraries().len(),
            body.len()
        );
        Ok(result)
    }

    /// Itineraries at `data.itineraries`, or an empty slice when absent.
    pub fn itineraries(&self) -> &[Itinerary] {
        self.data
            .as_ref()
            .and_then(|d| d.itineraries.as_deref())
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.itineraries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.itineraries().is_empty()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultData {
    #[serde(default)]
    pub itineraries: Option<Vec<Itinerary>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Itinerary {
    /// Opaque itinerary id, passed through from the API for logging.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub price: Option<Price>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub legs: Vec<Leg>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Price {
    #[serde(default)]
    pub raw: Option<f64>,
    #[serde(default)]
    pub formatted: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    #[serde(default)]
    pub departure: Option<String>,
    #[serde(default)]
    pub arrival: Option<String>,
    #[serde(default)]
    pub departure_terminal: Option<String>,
    #[serde(default)]
    pub arrival_terminal: Option<String>,
    #[serde(default)]
    pub carriers: Option<Carriers>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Carriers {
    #[serde(default, deserialize_with = "null_as_default")]
    pub marketing: Vec<Carrier>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Carrier {
    #[serde(default)]
    pub name: Option<String>,
}

impl Itinerary {
    /// Sort key: the raw price, or positive infinity when unpriced.
    pub fn raw_price(&self) -> f64 {
        self.price
            .as_ref()
            .and_then(|p| p.raw)
            .unwrap_or(f64::INFINITY)
    }

    pub fn formatted_price(&self) -> &str {
        self.price
            .as_ref()
            .and_then(|p| p.formatted.as_deref())
            .unwrap_or("N/A")
    }

    /// Name of the first marketing carrier of the first leg.
    pub fn airline(&self) -> &str {
        self.outbound()
            .and_then(|leg| leg.carriers.as_ref())
            .and_then(|c| c.marketing.first())
            .and_then(|carrier| carrier.name.as_deref())
            .unwrap_or("Unknown")
    }

    pub fn outbound(&self) -> Option<&Leg> {
        self.legs.first()
    }

    pub fn inbound(&self) -> Option<&Leg> {
        self.legs.get(1)
    }
}

fn non_empty(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}

impl Leg {
    /// `(departure, arrival)` terminals, if at least one of them is known.
    pub fn terminals(&self) -> Option<(Option<&str>, Option<&str>)> {
        let departure = non_empty(&self.departure_terminal);
        let arrival = non_empty(&self.arrival_terminal);
        if departure.is_none() && arrival.is_none() {
            None
        } else {
            Some((departure, arrival))
        }
    }
}
