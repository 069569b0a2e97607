//! End-to-end checks against the mock pricing API.
//!
//! # Design
//! Starts the mock server on a random port, then drives every service
//! through the default `ureq` transport over real HTTP. Response validation
//! is switched on so each decoded payload is also checked for bounds and
//! URL shapes.

use std::net::SocketAddr;
use std::sync::OnceLock;

use chrono::{TimeZone, Utc};
use itad_core::{
    ApiError, BundlesOptions, ClientConfig, CountryOptions, DealSort, DealsOptions, GameLookup,
    HistoryLogOptions, ItadClient, OverviewOptions, PageOptions, PricesOptions, SearchOptions,
    StoreLowOptions, WaitlistOptions,
};
use mock_server::{EXPEDITION_ID, WITCHER_APPID, WITCHER_ID, WITCHER_TITLE};

/// Address of a mock server shared by every test in this file.
fn server() -> SocketAddr {
    static ADDR: OnceLock<SocketAddr> = OnceLock::new();
    *ADDR.get_or_init(|| {
        let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = std_listener.local_addr().unwrap();
        std_listener.set_nonblocking(true).unwrap();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async {
                let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
                mock_server::run(listener).await
            })
            .unwrap();
        });

        addr
    })
}

fn client() -> ItadClient {
    let config = ClientConfig::new()
        .with_base_url(&format!("http://{}", server()))
        .with_validation(true);
    ItadClient::with_config("integration-key", config).unwrap()
}

fn ids(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

#[test]
fn empty_key_fails_before_any_request() {
    let err = ItadClient::with_config("", ClientConfig::new().with_base_url("http://127.0.0.1:1")).unwrap_err();
    assert!(matches!(err, ApiError::Configuration(_)));
}

#[test]
fn shops_list() {
    let shops = client().shops().list(&CountryOptions::default()).unwrap();
    assert_eq!(shops.len(), 3);
    assert_eq!(shops[0].id, 61);
    assert_eq!(shops[0].title, "Steam");
    assert!(shops[0].update.is_some());
    assert!(shops[1].update.is_none());
}

#[test]
fn search_and_lookup() {
    let client = client();

    let games = client
        .games()
        .search("witcher", &SearchOptions { results: Some(5) })
        .unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].id, WITCHER_ID);

    let found = client
        .games()
        .lookup(&GameLookup::AppId(WITCHER_APPID))
        .unwrap();
    assert!(found.found);
    assert_eq!(found.game.unwrap().title, WITCHER_TITLE);

    let miss = client
        .games()
        .lookup(&GameLookup::Title("Non Existing Game".to_string()))
        .unwrap();
    assert!(!miss.found);
    assert!(miss.game.is_none());
}

#[test]
fn game_info_details() {
    let info = client().games().info(WITCHER_ID).unwrap();
    assert_eq!(info.game.id, WITCHER_ID);
    assert_eq!(info.appid, Some(WITCHER_APPID));
    assert_eq!(info.stats.rank, 1);
    assert_eq!(info.players.unwrap().weekly, 4200);
}

#[test]
fn unknown_game_is_request_failed() {
    let err = client().games().info("does-not-exist").unwrap_err();
    match err {
        ApiError::RequestFailed { url, status, .. } => {
            assert_eq!(status, 404);
            assert!(!url.contains("integration-key"), "key leaked: {url}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn prices_limited_to_one_shop() {
    let options = PricesOptions {
        shops: Some(vec![61]),
        ..Default::default()
    };
    let prices = client()
        .games()
        .prices(&ids(&[WITCHER_ID, EXPEDITION_ID]), &options)
        .unwrap();
    assert_eq!(prices.len(), 2);
    assert!(prices
        .iter()
        .flat_map(|p| p.deals.iter())
        .all(|deal| deal.shop.id == 61));
    assert!(prices[0].history_low.all.is_some());
}

#[test]
fn empty_id_list_is_request_failed() {
    let err = client()
        .games()
        .prices(&[], &PricesOptions::default())
        .unwrap_err();
    assert_eq!(err.status(), Some(400));
}

#[test]
fn overview_and_lows() {
    let client = client();
    let both = ids(&[WITCHER_ID, EXPEDITION_ID]);

    let overview = client.games().overview(&both, &OverviewOptions::default()).unwrap();
    assert_eq!(overview.prices.len(), 2);
    assert_eq!(overview.prices[0].bundled, 2);
    assert!(overview.bundles.iter().all(|b| b.expiry.as_deref() != Some("2024-12-31T23:59:59Z")));

    let lows = client.games().history_low(&both, &CountryOptions::new("DE")).unwrap();
    assert_eq!(lows.len(), 2);
    assert_eq!(lows[0].low.price.currency, "EUR");

    let store_lows = client
        .games()
        .store_low(
            &both,
            &StoreLowOptions {
                shops: Some(vec![35]),
                ..Default::default()
            },
        )
        .unwrap();
    assert!(store_lows.iter().all(|s| s.lows.iter().all(|low| low.shop.id == 35)));
}

#[test]
fn history_log_since_with_milliseconds() {
    // 123 ms past midnight: the server only accepts whole seconds.
    let since = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap() + chrono::Duration::milliseconds(123);
    let options = HistoryLogOptions {
        since: Some(since),
        ..Default::default()
    };
    let log = client().games().history_log(WITCHER_ID, &options).unwrap();
    assert_eq!(log.len(), 6);
    assert!(log.iter().all(|entry| entry.timestamp.as_str() >= "2025-01-01T00:00:00Z"));
}

#[test]
fn bundles_and_subscriptions() {
    let client = client();

    let active = client.games().bundles(WITCHER_ID, &BundlesOptions::default()).unwrap();
    assert_eq!(active.len(), 1);
    let all = client
        .games()
        .bundles(
            WITCHER_ID,
            &BundlesOptions {
                expired: Some(true),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(all.len(), 2);

    let subs = client
        .games()
        .subscriptions(&ids(&[WITCHER_ID, EXPEDITION_ID]), &CountryOptions::default())
        .unwrap();
    assert_eq!(subs[0].subs[0].name, "Game Pass");
    assert!(subs[1].subs.is_empty());
}

#[test]
fn deals_page_of_ten() {
    let options = DealsOptions {
        offset: Some(0),
        limit: Some(10),
        ..Default::default()
    };
    let page = client().deals().list(&options).unwrap();
    assert_eq!(page.list.len(), 10);
    assert_eq!(page.next_offset, 10);
    assert!(page.has_more);

    let mut ids: Vec<&str> = page.list.iter().map(|d| d.game.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 10, "a game appeared twice");
}

#[test]
fn deals_sorted_by_price() {
    let options = DealsOptions {
        limit: Some(30),
        sort: Some(DealSort::Price),
        ..Default::default()
    };
    let page = client().deals().list(&options).unwrap();
    let prices: Vec<i64> = page.list.iter().map(|d| d.deal.price.amount_int).collect();
    assert!(prices.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn lookup_ids() {
    let client = client();

    let titles = ids(&[WITCHER_TITLE, "Nothing Like This"]);
    let found = client.lookup().ids_by_titles(&titles).unwrap();
    assert_eq!(found[WITCHER_TITLE].as_deref(), Some(WITCHER_ID));
    assert_eq!(found["Nothing Like This"], None);

    let found = client
        .lookup()
        .ids_by_shop_ids(61, &ids(&["app/292030", "app/1"]))
        .unwrap();
    assert_eq!(found["app/292030"].as_deref(), Some(WITCHER_ID));
    assert_eq!(found["app/1"], None);
}

#[test]
fn rankings_follow_offset() {
    let client = client();

    let ranked = client.stats().most_waitlisted(&PageOptions::new(10, 5)).unwrap();
    let positions: Vec<u64> = ranked.iter().map(|g| g.position).collect();
    assert_eq!(positions, vec![11, 12, 13, 14, 15]);
    assert!(ranked.windows(2).all(|w| w[0].count >= w[1].count));

    assert_eq!(client.stats().most_collected(&PageOptions::default()).unwrap().len(), 20);
    assert_eq!(client.stats().most_popular(&PageOptions::new(0, 3)).unwrap()[0].position, 1);
}

#[test]
fn waitlist_histograms() {
    let options = WaitlistOptions {
        bucket_price: Some(10),
        ..Default::default()
    };
    let stats = client().stats().waitlist(WITCHER_ID, &options).unwrap();
    assert_eq!(stats.count, 100_000);
    assert_eq!(stats.price.currency, "USD");
    assert_eq!(stats.price.buckets[0].price, 10.0);
    assert_eq!(stats.cut.buckets[0].price, 5.0);
}
