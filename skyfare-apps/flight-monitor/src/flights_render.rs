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

//! # Flights Report Rendering
//!
//! Turns ranked itineraries into the console report.

use std::borrow::Cow;
use std::io::{self, Write};

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::flights_rank::Ranking;
use crate::flights_results_parser::{Itinerary, Leg};

const DISPLAY_FORMAT: &str = "%d %b %Y, %I:%M %p";

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

fn parse_iso8601(s: &str) -> Option<NaiveDateTime> {
    // Offsets are dropped, the wall-clock time is printed as written.
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Format an ISO-8601 timestamp as `01 Jun 2024, 02:30 PM`.
///
/// Input that does not parse is handed back unchanged.
pub fn format_datetime(s: &str) -> Cow<'_, str> {
    match parse_iso8601(s) {
        Some(dt) => Cow::Owned(dt.format(DISPLAY_FORMAT).to_string()),
        None => {
            tracing::debug!("Keeping unparsable timestamp as-is: '{}'", s);
            Cow::Borrowed(s)
        }
    }
}

pub fn header_line(top_n: usize) -> String {
    format!("Top {} Cheapest Direct Flights:", top_n)
}

fn fmt_timestamp(ts: &Option<String>) -> Cow<'_, str> {
    ts.as_deref().map_or(Cow::Borrowed("N/A"), format_datetime)
}

fn leg_line(label: &str, leg: Option<&Leg>) -> String {
    let (departure, arrival) = match leg {
        Some(leg) => (fmt_timestamp(&leg.departure), fmt_timestamp(&leg.arrival)),
        None => (Cow::Borrowed("N/A"), Cow::Borrowed("N/A")),
    };
    let mut line = format!("   {}: {} -> {}", label, departure, arrival);
    if let Some((dep_terminal, arr_terminal)) = leg.and_then(Leg::terminals) {
        line.push_str(&format!(
            " (Terminal: {} -> {})",
            dep_terminal.unwrap_or("N/A"),
            arr_terminal.unwrap_or("N/A")
        ));
    }
    line
}

/// Lines for one itinerary: summary, outbound, and inbound when there is a second leg.
pub fn render_itinerary(rank: usize, itinerary: &Itinerary) -> Vec<String> {
    let mut lines = vec![
        format!(
            "{}. Airline: {}, Price: {}",
            rank,
            itinerary.airline(),
            itinerary.formatted_price()
        ),
        leg_line("Outbound", itinerary.outbound()),
    ];
    if let Some(inbound) = itinerary.inbound() {
        lines.push(leg_line("Inbound", Some(inbound)));
    }
    lines
}

/// Write every itinerary, ranked from 1. Writes nothing for an empty list.
pub fn render_flights<W: Write>(out: &mut W, itineraries: &[&Itinerary]) -> io::Result<()> {
    for (idx, itinerary) in itineraries.iter().enumerate() {
        for line in render_itinerary(idx + 1, itinerary) {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}

/// Full console report: the empty-response notice if any, the header, then the itineraries.
pub fn render_report<W: Write>(out: &mut W, ranking: &Ranking, top_n: usize) -> io::Result<()> {
    if let Ranking::NoItineraries = ranking {
        writeln!(out, "No itineraries found in the response.")?;
    }
    writeln!(out, "{}", header_line(top_n))?;
    render_flights(out, ranking.itineraries())
}

pub fn render_fetch_failure<W: Write>(out: &mut W, status: u16, body: &str) -> io::Result<()> {
    writeln!(out, "Error fetching data: {} {}", status, body)
}
