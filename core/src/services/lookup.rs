use crate::error::Result;
use crate::http::HttpRequest;
use crate::query::QueryParams;
use crate::requester::Requester;
use crate::types::{ShopIdLookup, TitleLookup};

const ROUTE: &str = "lookup";

/// Bulk id resolution by title or by shop-specific id.
#[derive(Debug, Clone)]
pub struct LookupService {
    requester: Requester,
}

impl LookupService {
    pub(crate) fn new(requester: Requester) -> Self {
        Self { requester }
    }

    pub fn build_ids_by_titles(&self, titles: &[String]) -> Result<HttpRequest> {
        self.requester.build_post(ROUTE, "/id/title/v1", &QueryParams::new(), titles)
    }

    /// Resolve titles to game ids. Matching is done by the server and is
    /// not a search: typos and variations may not match.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn ids_by_titles(&self, titles: &[String]) -> Result<TitleLookup> {
        let request = self.build_ids_by_titles(titles)?;
        self.requester.execute(request)
    }

    /// The shop id is a path segment, unlike every other lookup.
    pub fn build_ids_by_shop_ids(&self, shop_id: u32, shop_game_ids: &[String]) -> Result<HttpRequest> {
        let path = format!("/id/shop/{shop_id}/v1");
        self.requester.build_post(ROUTE, &path, &QueryParams::new(), shop_game_ids)
    }

    /// Resolve a shop's own game ids (e.g. `app/292030` on Steam) to game ids.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn ids_by_shop_ids(&self, shop_id: u32, shop_game_ids: &[String]) -> Result<ShopIdLookup> {
        let request = self.build_ids_by_shop_ids(shop_id, shop_game_ids)?;
        self.requester.execute(request)
    }
}
