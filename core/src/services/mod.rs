//! Service façades, one per resource group.
//!
//! # Design
//! Every operation comes in two halves: `build_*` produces the
//! `HttpRequest` without I/O, and the plain-named method sends it through
//! the shared `Requester` and returns the typed response. Option structs
//! have one `Option` per setting; each unset field falls back to its own
//! documented default, independently of the others.

pub mod deals;
pub mod games;
pub mod lookup;
pub mod shops;
pub mod stats;

pub use deals::{DealSort, DealsOptions, DealsService};
pub use games::{
    BundlesOptions, GameLookup, GamesService, HistoryLogOptions, OverviewOptions, PricesOptions,
    SearchOptions, StoreLowOptions,
};
pub use lookup::LookupService;
pub use shops::ShopsService;
pub use stats::{PageOptions, StatsService, WaitlistOptions};

use crate::config::DEFAULT_COUNTRY;
use crate::query::QueryParams;

/// Options for operations whose only setting is the country.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryOptions {
    /// Two letter country code, defaults to `US`.
    pub country: Option<String>,
}

impl CountryOptions {
    pub fn new(country: &str) -> Self {
        Self {
            country: Some(country.to_string()),
        }
    }

    pub fn params(&self) -> QueryParams {
        QueryParams::new().with("country", country_or_default(&self.country))
    }
}

pub(crate) fn country_or_default(country: &Option<String>) -> &str {
    country.as_deref().unwrap_or(DEFAULT_COUNTRY)
}
