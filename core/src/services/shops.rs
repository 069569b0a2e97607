use crate::error::Result;
use crate::http::HttpRequest;
use crate::requester::Requester;
use crate::types::ShopListItem;

use super::CountryOptions;

const ROUTE: &str = "service/shops";

/// Shops known to the API.
#[derive(Debug, Clone)]
pub struct ShopsService {
    requester: Requester,
}

impl ShopsService {
    pub(crate) fn new(requester: Requester) -> Self {
        Self { requester }
    }

    pub fn build_list(&self, options: &CountryOptions) -> Result<HttpRequest> {
        self.requester.build_get(ROUTE, "/v1", &options.params())
    }

    /// Every shop available in the given country.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn list(&self, options: &CountryOptions) -> Result<Vec<ShopListItem>> {
        let request = self.build_list(options)?;
        self.requester.execute(request)
    }
}
