use chrono::{DateTime, SecondsFormat, Utc};

use crate::config::{DEFAULT_SEARCH_RESULTS, DEFAULT_VOUCHERS};
use crate::error::Result;
use crate::http::HttpRequest;
use crate::query::QueryParams;
use crate::requester::Requester;
use crate::types::{
    Bundle, Game, GameInfo, GamePrices, GameSubscriptions, HistoricLowPrice, HistoricStoreLowPrice,
    HistoryLogEntry, LookupGameResponse, PriceOverview,
};

use super::{country_or_default, CountryOptions};

const ROUTE: &str = "games";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum number of results, defaults to 20. The server caps it at
    /// 100 and treats values below 1 as 1.
    pub results: Option<i32>,
}

/// How to identify a game in a single lookup. The two forms are exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameLookup {
    /// Steam app id.
    AppId(u64),
    /// Exact title; any fuzziness is up to the server.
    Title(String),
}

impl GameLookup {
    fn params(&self) -> QueryParams {
        match self {
            GameLookup::AppId(appid) => QueryParams::new().with("appid", *appid),
            GameLookup::Title(title) => QueryParams::new().with("title", title),
        }
    }
}

/// Defaults: country `US`, all prices, vouchers allowed, no capacity
/// limit, all shops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PricesOptions {
    pub country: Option<String>,
    /// Only load discounted prices.
    pub deals: Option<bool>,
    /// Allow prices that require a voucher.
    pub vouchers: Option<bool>,
    /// Prices to load per game; `0` or unset means no limit.
    pub capacity: Option<u32>,
    pub shops: Option<Vec<u32>>,
}

impl PricesOptions {
    pub fn params(&self) -> QueryParams {
        QueryParams::new()
            .with("country", country_or_default(&self.country))
            .with("deals", self.deals.unwrap_or(false))
            .with("vouchers", self.vouchers.unwrap_or(DEFAULT_VOUCHERS))
            .with_opt("capacity", self.capacity)
            .with_opt("shops", self.shops.as_ref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverviewOptions {
    pub country: Option<String>,
    pub shops: Option<Vec<u32>>,
    pub vouchers: Option<bool>,
}

impl OverviewOptions {
    pub fn params(&self) -> QueryParams {
        QueryParams::new()
            .with("country", country_or_default(&self.country))
            .with_opt("shops", self.shops.as_ref())
            .with("vouchers", self.vouchers.unwrap_or(DEFAULT_VOUCHERS))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreLowOptions {
    pub country: Option<String>,
    pub shops: Option<Vec<u32>>,
}

impl StoreLowOptions {
    pub fn params(&self) -> QueryParams {
        QueryParams::new()
            .with("country", country_or_default(&self.country))
            .with_opt("shops", self.shops.as_ref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryLogOptions {
    pub country: Option<String>,
    pub shops: Option<Vec<u32>>,
    /// Only entries after this instant. The server falls back to the last
    /// three months when unset.
    pub since: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundlesOptions {
    pub country: Option<String>,
    /// Include bundles that already ended.
    pub expired: Option<bool>,
}

/// Format `since` in whole seconds. The server rejects fractional seconds.
pub fn format_since(since: &DateTime<Utc>) -> String {
    since.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Game search, details, prices and price history.
#[derive(Debug, Clone)]
pub struct GamesService {
    requester: Requester,
}

impl GamesService {
    pub(crate) fn new(requester: Requester) -> Self {
        Self { requester }
    }

    pub fn build_search(&self, title: &str, options: &SearchOptions) -> Result<HttpRequest> {
        let params = QueryParams::new()
            .with("title", title)
            .with("results", options.results.unwrap_or(DEFAULT_SEARCH_RESULTS));
        self.requester.build_get(ROUTE, "/search/v1", &params)
    }

    /// Games whose title matches `title`. No match gives an empty list.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn search(&self, title: &str, options: &SearchOptions) -> Result<Vec<Game>> {
        let request = self.build_search(title, options)?;
        self.requester.execute(request)
    }

    pub fn build_lookup(&self, query: &GameLookup) -> Result<HttpRequest> {
        self.requester.build_get(ROUTE, "/lookup/v1", &query.params())
    }

    /// Find one game by Steam app id or title. A miss comes back as
    /// `found: false` without a game, not as an error.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn lookup(&self, query: &GameLookup) -> Result<LookupGameResponse> {
        let request = self.build_lookup(query)?;
        self.requester.execute(request)
    }

    pub fn build_info(&self, id: &str) -> Result<HttpRequest> {
        self.requester.build_get(ROUTE, "/info/v2", &QueryParams::new().with("id", id))
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub fn info(&self, id: &str) -> Result<GameInfo> {
        let request = self.build_info(id)?;
        self.requester.execute(request)
    }

    pub fn build_prices(&self, ids: &[String], options: &PricesOptions) -> Result<HttpRequest> {
        self.requester.build_post(ROUTE, "/prices/v3", &options.params(), ids)
    }

    /// Current prices per shop for each game. The server rejects an empty
    /// id list.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn prices(&self, ids: &[String], options: &PricesOptions) -> Result<Vec<GamePrices>> {
        let request = self.build_prices(ids, options)?;
        self.requester.execute(request)
    }

    pub fn build_overview(&self, ids: &[String], options: &OverviewOptions) -> Result<HttpRequest> {
        self.requester.build_post(ROUTE, "/overview/v2", &options.params(), ids)
    }

    /// Best current price and historical low per game, plus active bundles
    /// that contain any of them.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn overview(&self, ids: &[String], options: &OverviewOptions) -> Result<PriceOverview> {
        let request = self.build_overview(ids, options)?;
        self.requester.execute(request)
    }

    pub fn build_history_low(&self, ids: &[String], options: &CountryOptions) -> Result<HttpRequest> {
        self.requester.build_post(ROUTE, "/historylow/v1", &options.params(), ids)
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub fn history_low(&self, ids: &[String], options: &CountryOptions) -> Result<Vec<HistoricLowPrice>> {
        let request = self.build_history_low(ids, options)?;
        self.requester.execute(request)
    }

    pub fn build_store_low(&self, ids: &[String], options: &StoreLowOptions) -> Result<HttpRequest> {
        self.requester.build_post(ROUTE, "/storelow/v2", &options.params(), ids)
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub fn store_low(&self, ids: &[String], options: &StoreLowOptions) -> Result<Vec<HistoricStoreLowPrice>> {
        let request = self.build_store_low(ids, options)?;
        self.requester.execute(request)
    }

    pub fn build_history_log(&self, id: &str, options: &HistoryLogOptions) -> Result<HttpRequest> {
        let params = QueryParams::new()
            .with("id", id)
            .with("country", country_or_default(&options.country))
            .with_opt("shops", options.shops.as_ref())
            .with_opt("since", options.since.as_ref().map(format_since));
        self.requester.build_get(ROUTE, "/history/v2", &params)
    }

    /// Price changes for one game, newest first.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn history_log(&self, id: &str, options: &HistoryLogOptions) -> Result<Vec<HistoryLogEntry>> {
        let request = self.build_history_log(id, options)?;
        self.requester.execute(request)
    }

    pub fn build_bundles(&self, id: &str, options: &BundlesOptions) -> Result<HttpRequest> {
        let params = QueryParams::new()
            .with("id", id)
            .with("country", country_or_default(&options.country))
            .with("expired", options.expired.unwrap_or(false));
        self.requester.build_get(ROUTE, "/bundles/v2", &params)
    }

    /// Bundles that include the game.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn bundles(&self, id: &str, options: &BundlesOptions) -> Result<Vec<Bundle>> {
        let request = self.build_bundles(id, options)?;
        self.requester.execute(request)
    }

    pub fn build_subscriptions(&self, ids: &[String], options: &CountryOptions) -> Result<HttpRequest> {
        self.requester.build_post(ROUTE, "/subs/v1", &options.params(), ids)
    }

    /// Subscription services (Game Pass and the like) listing each game.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn subscriptions(&self, ids: &[String], options: &CountryOptions) -> Result<Vec<GameSubscriptions>> {
        let request = self.build_subscriptions(ids, options)?;
        self.requester.execute(request)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::error::ApiError;
    use crate::http::HttpMethod;
    use crate::requester::testing::{requester, RecordingTransport};

    const WITCHER: &str = "018d937f-3a29-72b9-888f-ecbf55a28e80";

    fn service_with(transport: Arc<RecordingTransport>) -> GamesService {
        GamesService::new(requester(transport, true))
    }

    fn service() -> GamesService {
        service_with(RecordingTransport::replying(200, "[]"))
    }

    fn ids() -> Vec<String> {
        vec![WITCHER.to_string()]
    }

    #[test]
    fn search_defaults_to_twenty_results() {
        let req = service().build_search("The Witcher 3", &SearchOptions::default()).unwrap();
        assert_eq!(
            req.url,
            "https://api.example.test/games/search/v1?title=The+Witcher+3&results=20&key=test-key"
        );
    }

    #[test]
    fn lookup_sends_exactly_one_identifier() {
        let by_app = service().build_lookup(&GameLookup::AppId(292030)).unwrap();
        assert_eq!(by_app.query_param("appid").as_deref(), Some("292030"));
        assert_eq!(by_app.query_param("title"), None);

        let by_title = service()
            .build_lookup(&GameLookup::Title("The Witcher 3: Wild Hunt".to_string()))
            .unwrap();
        assert_eq!(by_title.query_param("title").as_deref(), Some("The Witcher 3: Wild Hunt"));
        assert_eq!(by_title.query_param("appid"), None);
    }

    #[test]
    fn lookup_miss_is_not_an_error() {
        let transport = RecordingTransport::replying(200, r#"{"found":false}"#);
        let result = service_with(transport)
            .lookup(&GameLookup::Title("Non Existing Game".to_string()))
            .unwrap();
        assert!(!result.found);
        assert!(result.game.is_none());
    }

    #[test]
    fn prices_posts_ids_with_defaults() {
        let req = service().build_prices(&ids(), &PricesOptions::default()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(
            req.url,
            "https://api.example.test/games/prices/v3?country=US&deals=false&vouchers=true&key=test-key"
        );
        assert_eq!(req.body.as_deref(), Some(format!("[\"{WITCHER}\"]").as_str()));
    }

    #[test]
    fn prices_partial_options_merge_per_field() {
        let options = PricesOptions {
            capacity: Some(2),
            shops: Some(vec![61]),
            ..PricesOptions::default()
        };
        let req = service().build_prices(&ids(), &options).unwrap();
        assert_eq!(req.query_param("capacity").as_deref(), Some("2"));
        assert_eq!(req.query_param("shops").as_deref(), Some("61"));
        assert_eq!(req.query_param("vouchers").as_deref(), Some("true"));
        assert_eq!(req.query_param("country").as_deref(), Some("US"));
    }

    #[test]
    fn empty_id_list_is_sent_and_server_rejection_surfaces() {
        let transport = RecordingTransport::replying(400, r#"{"status":400,"reason_phrase":"Bad Request"}"#);
        let err = service_with(transport.clone())
            .prices(&[], &PricesOptions::default())
            .unwrap_err();
        assert!(matches!(err, ApiError::RequestFailed { status: 400, .. }));
        assert_eq!(transport.last().body.as_deref(), Some("[]"));
    }

    #[test]
    fn history_log_strips_fractional_seconds() {
        let since = DateTime::parse_from_rfc3339("2025-01-01T12:30:15.123Z")
            .unwrap()
            .with_timezone(&Utc);
        let options = HistoryLogOptions {
            since: Some(since),
            ..HistoryLogOptions::default()
        };
        let req = service().build_history_log(WITCHER, &options).unwrap();
        assert_eq!(req.query_param("since").as_deref(), Some("2025-01-01T12:30:15Z"));
        assert!(req.url.ends_with("&key=test-key"), "key must stay last: {}", req.url);
    }

    #[test]
    fn history_log_without_since_omits_it() {
        let options = HistoryLogOptions {
            shops: Some(vec![61, 35]),
            ..HistoryLogOptions::default()
        };
        let req = service().build_history_log(WITCHER, &options).unwrap();
        assert_eq!(req.query_param("since"), None);
        assert_eq!(req.query_param("shops").as_deref(), Some("61,35"));
        assert_eq!(req.query_param("id").as_deref(), Some(WITCHER));
    }

    #[test]
    fn format_since_truncates_rather_than_rounds() {
        let since = DateTime::parse_from_rfc3339("2024-12-31T23:59:59.999Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_since(&since), "2024-12-31T23:59:59Z");
    }

    #[test]
    fn bundles_default_to_active_only() {
        let req = service().build_bundles(WITCHER, &BundlesOptions::default()).unwrap();
        assert_eq!(req.query_param("expired").as_deref(), Some("false"));
        assert_eq!(req.query_param("country").as_deref(), Some("US"));
    }

    #[test]
    fn overview_and_lows_use_versioned_paths() {
        let svc = service();
        assert!(svc
            .build_overview(&ids(), &OverviewOptions::default())
            .unwrap()
            .endpoint()
            .ends_with("/games/overview/v2"));
        assert!(svc
            .build_history_low(&ids(), &CountryOptions::default())
            .unwrap()
            .endpoint()
            .ends_with("/games/historylow/v1"));
        assert!(svc
            .build_store_low(&ids(), &StoreLowOptions::default())
            .unwrap()
            .endpoint()
            .ends_with("/games/storelow/v2"));
        assert!(svc
            .build_subscriptions(&ids(), &CountryOptions::default())
            .unwrap()
            .endpoint()
            .ends_with("/games/subs/v1"));
    }

    #[test]
    fn history_low_decodes_and_validates() {
        let body = format!(
            r#"[{{"id":"{WITCHER}","low":{{"shop":{{"id":61,"name":"Steam"}},
            "price":{{"amount":7.99,"amountInt":799,"currency":"EUR"}},
            "regular":{{"amount":39.99,"amountInt":3999,"currency":"EUR"}},
            "cut":80,"timestamp":"2024-11-27T19:00:00+01:00"}}}}]"#
        );
        let transport = RecordingTransport::replying(200, &body);
        let lows = service_with(transport.clone())
            .history_low(&ids(), &CountryOptions::new("FR"))
            .unwrap();
        assert_eq!(lows[0].low.price.currency, "EUR");
        assert_eq!(lows[0].low.cut, 80);
        assert_eq!(transport.last().query_param("country").as_deref(), Some("FR"));
    }
}
