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

//! # Cheapest Itinerary Ranking

use crate::flights_results_parser::Itinerary;

pub const DEFAULT_TOP_N: usize = 3;

#[derive(Debug, Clone)]
pub enum Ranking<'a> {
    /// The response carried no itineraries at all.
    NoItineraries,
    /// Cheapest first, at most `n` entries.
    Top(Vec<&'a Itinerary>),
}

impl<'a> Ranking<'a> {
    pub fn itineraries(&self) -> &[&'a Itinerary] {
        match self {
            Ranking::NoItineraries => &[],
            Ranking::Top(top) => top.as_slice(),
        }
    }
}

/// Select the `n` cheapest itineraries, ascending by raw price.
///
/// Unpriced itineraries sort last. The sort is stable, so equal prices keep
/// their response order. The input slice is left untouched.
pub fn top_cheapest(itineraries: &[Itinerary], n: usize) -> Ranking<'_> {
    if itineraries.is_empty() {
        tracing::warn!("No itineraries found in the response.");
        return Ranking::NoItineraries;
    }

    let mut sorted: Vec<&Itinerary> = itineraries.iter().collect();
    sorted.sort_by(|a, b| a.raw_price().total_cmp(&b.raw_price()));
    sorted.truncate(n);

    if let Some(cheapest) = sorted.first() {
        tracing::debug!(
            "Cheapest itinerary {} at {}",
            cheapest.id.as_deref().unwrap_or("<no id>"),
            cheapest.formatted_price()
        );
    }

    tracing::debug!(
        "Ranked {} itineraries, keeping {}",
        itineraries.len(),
        sorted.len()
    );
    Ranking::Top(sorted)
}
