use crate::config::{DEFAULT_LIMIT, DEFAULT_OFFSET};
use crate::error::Result;
use crate::http::HttpRequest;
use crate::query::QueryParams;
use crate::requester::Requester;
use crate::types::DealsList;

use super::country_or_default;

const ROUTE: &str = "deals";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DealSort {
    /// Highest cut first.
    #[default]
    Cut,
    /// Lowest price first.
    Price,
}

impl DealSort {
    pub fn as_str(self) -> &'static str {
        match self {
            DealSort::Cut => "cut",
            DealSort::Price => "price",
        }
    }
}

/// Settings for the deals listing. Unset fields use: country `US`,
/// offset 0, limit 20, sort by cut, no non-deals, no mature games, all shops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealsOptions {
    pub country: Option<String>,
    pub offset: Option<u32>,
    /// Page size, 1 to 200 on the server side.
    pub limit: Option<u32>,
    pub sort: Option<DealSort>,
    /// Include prices that are not discounted.
    pub nondeals: Option<bool>,
    pub mature: Option<bool>,
    pub shops: Option<Vec<u32>>,
}

impl DealsOptions {
    pub fn params(&self) -> QueryParams {
        QueryParams::new()
            .with("country", country_or_default(&self.country))
            .with("offset", self.offset.unwrap_or(DEFAULT_OFFSET))
            .with("limit", self.limit.unwrap_or(DEFAULT_LIMIT))
            .with("sort", self.sort.unwrap_or_default().as_str())
            .with("nondeals", self.nondeals.unwrap_or(false))
            .with("mature", self.mature.unwrap_or(false))
            .with_opt("shops", self.shops.as_ref())
    }
}

/// Current deals across shops.
#[derive(Debug, Clone)]
pub struct DealsService {
    requester: Requester,
}

impl DealsService {
    pub(crate) fn new(requester: Requester) -> Self {
        Self { requester }
    }

    pub fn build_list(&self, options: &DealsOptions) -> Result<HttpRequest> {
        self.requester.build_get(ROUTE, "/v2", &options.params())
    }

    /// One page of current deals.
    ///
    /// Each game appears at most once, at its best current price, even when
    /// another shop would rank differently under the requested sort.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn list(&self, options: &DealsOptions) -> Result<DealsList> {
        let request = self.build_list(options)?;
        self.requester.execute(request)
    }
}
