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

// Library for skyfare-flight-monitor
// Fetch, rank and print the cheapest itineraries of a Sky Scrapper search.

mod flights_config;
mod flights_query_builder;
mod flights_rank;
mod flights_render;
mod flights_results_parser;
mod flights_search;

pub use flights_config::{FlightMonitorConfig, load_env_file, DEFAULT_ENV_FILE};
pub use flights_query_builder::FlightSearchRequest;
pub use flights_rank::{top_cheapest, Ranking, DEFAULT_TOP_N};
pub use flights_render::{
    format_datetime, header_line, render_fetch_failure, render_flights, render_itinerary,
    render_report,
};
pub use flights_results_parser::{
    Carrier, Carriers, FlightSearchResult, Itinerary, Leg, Price, ResultData,
};
pub use flights_search::{FetchOutcome, RapidApiFlightsClient, SearchOutcome};
