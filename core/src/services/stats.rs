use crate::config::{DEFAULT_BUCKET_CUT, DEFAULT_BUCKET_PRICE, DEFAULT_LIMIT, DEFAULT_OFFSET};
use crate::error::Result;
use crate::http::HttpRequest;
use crate::query::QueryParams;
use crate::requester::Requester;
use crate::types::{RankedGame, WaitlistStats};

use super::country_or_default;

const ROUTE: &str = "stats";

/// Defaults: country `US`, 5-unit price buckets, 5% cut buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaitlistOptions {
    pub country: Option<String>,
    pub bucket_price: Option<u32>,
    pub bucket_cut: Option<u32>,
}

impl WaitlistOptions {
    pub fn params(&self) -> QueryParams {
        QueryParams::new()
            .with("country", country_or_default(&self.country))
            .with("bucket_price", self.bucket_price.unwrap_or(DEFAULT_BUCKET_PRICE))
            .with("bucket_cut", self.bucket_cut.unwrap_or(DEFAULT_BUCKET_CUT))
    }
}

/// Paging for rankings. Defaults: offset 0, limit 20.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageOptions {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl PageOptions {
    pub fn new(offset: u32, limit: u32) -> Self {
        Self {
            offset: Some(offset),
            limit: Some(limit),
        }
    }

    pub fn params(&self) -> QueryParams {
        QueryParams::new()
            .with("offset", self.offset.unwrap_or(DEFAULT_OFFSET))
            .with("limit", self.limit.unwrap_or(DEFAULT_LIMIT))
    }
}

/// Waitlist statistics and popularity rankings.
#[derive(Debug, Clone)]
pub struct StatsService {
    requester: Requester,
}

impl StatsService {
    pub(crate) fn new(requester: Requester) -> Self {
        Self { requester }
    }

    pub fn build_waitlist(&self, id: &str, options: &WaitlistOptions) -> Result<HttpRequest> {
        let params = QueryParams::new().with("id", id).merge(options.params());
        self.requester.build_get(ROUTE, "/waitlist/v1", &params)
    }

    /// How many users waitlist the game and at which price/cut limits.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn waitlist(&self, id: &str, options: &WaitlistOptions) -> Result<WaitlistStats> {
        let request = self.build_waitlist(id, options)?;
        self.requester.execute(request)
    }

    pub fn build_most_waitlisted(&self, options: &PageOptions) -> Result<HttpRequest> {
        self.requester.build_get(ROUTE, "/most-waitlisted/v1", &options.params())
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub fn most_waitlisted(&self, options: &PageOptions) -> Result<Vec<RankedGame>> {
        let request = self.build_most_waitlisted(options)?;
        self.requester.execute(request)
    }

    pub fn build_most_collected(&self, options: &PageOptions) -> Result<HttpRequest> {
        self.requester.build_get(ROUTE, "/most-collected/v1", &options.params())
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub fn most_collected(&self, options: &PageOptions) -> Result<Vec<RankedGame>> {
        let request = self.build_most_collected(options)?;
        self.requester.execute(request)
    }

    pub fn build_most_popular(&self, options: &PageOptions) -> Result<HttpRequest> {
        self.requester.build_get(ROUTE, "/most-popular/v1", &options.params())
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub fn most_popular(&self, options: &PageOptions) -> Result<Vec<RankedGame>> {
        let request = self.build_most_popular(options)?;
        self.requester.execute(request)
    }
}
