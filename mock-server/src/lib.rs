//! In-memory stand-in for the pricing API, served with axum.
//!
//! Answers every endpoint the client calls from a deterministic
//! `Catalog` and enforces the server-side rules the client relies on:
//! a non-empty `key` on every request, non-empty id lists, `since`
//! timestamps in whole seconds, offset/limit paging.

pub mod catalog;

use std::{collections::HashMap, str::FromStr, sync::Arc};

use axum::{
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Map, Value};
use tokio::net::TcpListener;

pub use catalog::{
    Catalog, Currency, Entry, HistoryPoint, EXPEDITION_ID, EXPEDITION_TITLE, STEAM_ID, WITCHER_APPID,
    WITCHER_ID, WITCHER_TITLE,
};
use catalog::{BundleOffer, NOW};

type Db = Arc<Catalog>;
type Params = HashMap<String, String>;
type ApiResult = Result<Json<Value>, StatusCode>;

/// Every emulated endpoint as `(method, path)`.
pub const ROUTES: &[(&str, &str)] = &[
    ("GET", "/games/search/v1"),
    ("GET", "/games/lookup/v1"),
    ("GET", "/games/info/v2"),
    ("POST", "/games/prices/v3"),
    ("POST", "/games/overview/v2"),
    ("POST", "/games/historylow/v1"),
    ("POST", "/games/storelow/v2"),
    ("GET", "/games/history/v2"),
    ("GET", "/games/bundles/v2"),
    ("POST", "/games/subs/v1"),
    ("GET", "/deals/v2"),
    ("POST", "/lookup/id/title/v1"),
    ("POST", "/lookup/id/shop/{shop_id}/v1"),
    ("GET", "/service/shops/v1"),
    ("GET", "/stats/waitlist/v1"),
    ("GET", "/stats/most-waitlisted/v1"),
    ("GET", "/stats/most-collected/v1"),
    ("GET", "/stats/most-popular/v1"),
];

pub fn app() -> Router {
    let db: Db = Arc::new(Catalog::new());
    Router::new()
        .route("/games/search/v1", get(search))
        .route("/games/lookup/v1", get(lookup_game))
        .route("/games/info/v2", get(game_info))
        .route("/games/prices/v3", post(prices))
        .route("/games/overview/v2", post(overview))
        .route("/games/historylow/v1", post(history_low))
        .route("/games/storelow/v2", post(store_low))
        .route("/games/history/v2", get(history_log))
        .route("/games/bundles/v2", get(game_bundles))
        .route("/games/subs/v1", post(subscriptions))
        .route("/deals/v2", get(deals))
        .route("/lookup/id/title/v1", post(ids_by_titles))
        .route("/lookup/id/shop/{shop_id}/v1", post(ids_by_shop))
        .route("/service/shops/v1", get(shops))
        .route("/stats/waitlist/v1", get(waitlist_stats))
        .route("/stats/most-waitlisted/v1", get(most_waitlisted))
        .route("/stats/most-collected/v1", get(most_collected))
        .route("/stats/most-popular/v1", get(most_popular))
        .layer(middleware::from_fn(require_key))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Like `run`, but stops accepting connections once `shutdown` resolves
/// and returns after in-flight requests finish.
pub async fn run_until<F>(listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app()).with_graceful_shutdown(shutdown).await
}

async fn require_key(request: Request, next: Next) -> Result<Response, StatusCode> {
    let has_key = request.uri().query().is_some_and(|query| {
        query
            .split('&')
            .any(|pair| pair.strip_prefix("key=").is_some_and(|key| !key.is_empty()))
    });
    if !has_key {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(next.run(request).await)
}

// ---------------------------------------------------------------------------
// Parameter helpers
// ---------------------------------------------------------------------------

fn currency(params: &Params) -> Result<Currency, StatusCode> {
    let country = params.get("country").map(String::as_str).unwrap_or("US");
    Currency::for_country(country).ok_or(StatusCode::BAD_REQUEST)
}

fn number<T: FromStr>(params: &Params, name: &str, default: T) -> Result<T, StatusCode> {
    match params.get(name) {
        Some(raw) => raw.parse().map_err(|_| StatusCode::BAD_REQUEST),
        None => Ok(default),
    }
}

fn shop_filter(params: &Params) -> Result<Option<Vec<u32>>, StatusCode> {
    params
        .get("shops")
        .map(|raw| {
            raw.split(',')
                .map(|id| id.trim().parse::<u32>().map_err(|_| StatusCode::BAD_REQUEST))
                .collect()
        })
        .transpose()
}

fn allowed(filter: &Option<Vec<u32>>, shop_id: u32) -> bool {
    filter.as_ref().map_or(true, |shops| shops.contains(&shop_id))
}

fn require_entries<'a>(db: &'a Catalog, ids: &[String]) -> Result<Vec<&'a Entry>, StatusCode> {
    if ids.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    ids.iter()
        .map(|id| db.by_id(id).ok_or(StatusCode::BAD_REQUEST))
        .collect()
}

fn require_entry<'a>(db: &'a Catalog, params: &Params) -> Result<&'a Entry, StatusCode> {
    let id = params.get("id").ok_or(StatusCode::BAD_REQUEST)?;
    db.by_id(id).ok_or(StatusCode::NOT_FOUND)
}

/// Ranking and listing pages cap `limit` at `max`.
fn page(params: &Params, max: u32) -> Result<(usize, usize), StatusCode> {
    let offset: u32 = number(params, "offset", 0)?;
    let limit: u32 = number(params, "limit", 20)?;
    Ok((offset as usize, limit.clamp(1, max) as usize))
}

// ---------------------------------------------------------------------------
// JSON builders
// ---------------------------------------------------------------------------

fn shop_json(db: &Catalog, id: u32) -> Value {
    match db.shop(id) {
        Some(shop) => json!(shop),
        None => json!({ "id": id, "name": "Unknown" }),
    }
}

fn game_with(entry: &Entry, extra: Value) -> Value {
    let mut game = json!(entry.game);
    if let (Some(object), Value::Object(extra)) = (game.as_object_mut(), extra) {
        object.extend(extra);
    }
    game
}

fn low_price(entry: &Entry, cur: Currency, since: &str) -> Value {
    entry
        .lowest(|p| p.timestamp.as_str() >= since)
        .map(|p| cur.price(entry.price_cents(p.cut)))
        .unwrap_or(Value::Null)
}

fn low_record(db: &Catalog, entry: &Entry, point: &HistoryPoint, cur: Currency) -> Value {
    json!({
        "shop": shop_json(db, point.shop_id),
        "price": cur.price(entry.price_cents(point.cut)),
        "regular": cur.price(entry.regular_cents),
        "cut": point.cut,
        "timestamp": point.timestamp,
    })
}

fn deal_url(entry: &Entry, shop_id: u32) -> String {
    format!("https://itad.mock.test/{}/{shop_id}/", entry.game.slug)
}

fn offer(db: &Catalog, entry: &Entry, shop_id: u32, cut: i32, cur: Currency) -> Map<String, Value> {
    let store_low = entry
        .lowest(|p| p.shop_id == shop_id)
        .map(|p| cur.price(entry.price_cents(p.cut)))
        .unwrap_or(Value::Null);
    let value = json!({
        "shop": shop_json(db, shop_id),
        "price": cur.price(entry.price_cents(cut)),
        "regular": cur.price(entry.regular_cents),
        "cut": cut,
        "voucher": null,
        "storeLow": store_low,
        "flag": null,
        "drm": [],
        "platforms": [{ "id": 1, "name": "Windows" }],
        "timestamp": "2025-06-26T17:05:33Z",
        "expiry": null,
        "url": deal_url(entry, shop_id),
    });
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn bundle_json(db: &Catalog, bundle: &BundleOffer, cur: Currency) -> Value {
    let games: Vec<Value> = bundle
        .games
        .iter()
        .filter_map(|&i| db.entries.get(i))
        .map(|e| json!(e.game))
        .collect();
    json!({
        "id": bundle.id,
        "title": bundle.title,
        "page": { "id": 6, "name": "Fanatical", "shopId": 6 },
        "url": format!("https://itad.mock.test/bundles/{}/", bundle.id),
        "details": format!("https://isthereanydeal.com/bundles/{}/", bundle.id),
        "isMature": false,
        "publish": bundle.publish,
        "expiry": bundle.expiry,
        "counts": { "games": games.len(), "media": 0 },
        "tiers": [{ "price": cur.price(bundle.tier_cents), "games": games }],
    })
}

// ---------------------------------------------------------------------------
// /games
// ---------------------------------------------------------------------------

async fn search(State(db): State<Db>, Query(params): Query<Params>) -> ApiResult {
    let title = params.get("title").ok_or(StatusCode::BAD_REQUEST)?.to_lowercase();
    let results: i64 = number(&params, "results", 20)?;
    let games: Vec<Value> = db
        .entries
        .iter()
        .filter(|e| e.game.title.to_lowercase().contains(&title))
        .take(results.clamp(1, 100) as usize)
        .map(|e| json!(e.game))
        .collect();
    Ok(Json(json!(games)))
}

async fn lookup_game(State(db): State<Db>, Query(params): Query<Params>) -> ApiResult {
    let entry = if let Some(appid) = params.get("appid") {
        let appid: u64 = appid.parse().map_err(|_| StatusCode::BAD_REQUEST)?;
        db.by_appid(appid)
    } else if let Some(title) = params.get("title") {
        db.by_title(title)
    } else {
        return Err(StatusCode::BAD_REQUEST);
    };
    Ok(Json(match entry {
        Some(entry) => json!({ "found": true, "game": entry.game }),
        None => json!({ "found": false }),
    }))
}

async fn game_info(State(db): State<Db>, Query(params): Query<Params>) -> ApiResult {
    let entry = require_entry(&db, &params)?;
    let rank = db.index_of(&entry.game.id).unwrap_or_default() + 1;
    let extra = json!({
        "earlyAccess": false,
        "achievements": true,
        "tradingCards": entry.appid.is_some(),
        "appid": entry.appid,
        "tags": ["RPG", "Open World"],
        "releaseDate": "2016-08-30",
        "stats": { "rank": rank, "waitlisted": entry.waitlisted, "collected": entry.collected },
        "developers": [{ "id": 1, "name": "Mock Studio" }],
        "publishers": [{ "id": 2, "name": "Mock Publishing" }],
        "reviews": [{
            "score": 93,
            "count": 1000 + entry.collected,
            "source": "Steam",
            "url": format!("https://store.steampowered.com/app/{}/", entry.appid.unwrap_or_default()),
        }],
        "players": { "recent": 120, "day": 900, "week": 4200, "peak": 10300 },
        "urls": { "game": format!("https://isthereanydeal.com/game/{}/info/", entry.game.slug) },
    });
    Ok(Json(game_with(entry, extra)))
}

async fn prices(State(db): State<Db>, Query(params): Query<Params>, Json(ids): Json<Vec<String>>) -> ApiResult {
    let entries = require_entries(&db, &ids)?;
    let cur = currency(&params)?;
    let only_deals: bool = number(&params, "deals", false)?;
    let capacity: usize = number(&params, "capacity", 0)?;
    let shops = shop_filter(&params)?;

    let out: Vec<Value> = entries
        .iter()
        .map(|entry| {
            let mut deals: Vec<Value> = entry
                .cuts
                .iter()
                .filter(|&&(shop, cut)| allowed(&shops, shop) && (!only_deals || cut > 0))
                .map(|&(shop, cut)| Value::Object(offer(&db, entry, shop, cut, cur)))
                .collect();
            if capacity > 0 {
                deals.truncate(capacity);
            }
            json!({
                "id": entry.game.id,
                "historyLow": {
                    "all": low_price(entry, cur, ""),
                    "y1": low_price(entry, cur, "2024-07-01T00:00:00Z"),
                    "m3": low_price(entry, cur, "2025-04-01T00:00:00Z"),
                },
                "deals": deals,
            })
        })
        .collect();
    Ok(Json(json!(out)))
}

async fn overview(State(db): State<Db>, Query(params): Query<Params>, Json(ids): Json<Vec<String>>) -> ApiResult {
    let entries = require_entries(&db, &ids)?;
    let cur = currency(&params)?;
    let shops = shop_filter(&params)?;

    let prices: Vec<Value> = entries
        .iter()
        .map(|entry| {
            let current = entry
                .cuts
                .iter()
                .filter(|&&(shop, _)| allowed(&shops, shop))
                .max_by_key(|&&(_, cut)| cut)
                .map(|&(shop, cut)| Value::Object(offer(&db, entry, shop, cut, cur)))
                .unwrap_or(Value::Null);
            let lowest = entry
                .lowest(|_| true)
                .map(|p| low_record(&db, entry, p, cur))
                .unwrap_or(Value::Null);
            let index = db.index_of(&entry.game.id);
            let bundled = db
                .bundles
                .iter()
                .filter(|b| index.is_some_and(|i| b.games.contains(&i)))
                .count();
            json!({
                "id": entry.game.id,
                "current": current,
                "lowest": lowest,
                "bundled": bundled,
                "urls": { "game": format!("https://isthereanydeal.com/game/{}/info/", entry.game.slug) },
            })
        })
        .collect();

    let indices: Vec<usize> = entries.iter().filter_map(|e| db.index_of(&e.game.id)).collect();
    let bundles: Vec<Value> = db
        .bundles
        .iter()
        .filter(|b| !b.is_expired() && b.games.iter().any(|i| indices.contains(i)))
        .map(|b| bundle_json(&db, b, cur))
        .collect();

    Ok(Json(json!({ "prices": prices, "bundles": bundles })))
}

async fn history_low(State(db): State<Db>, Query(params): Query<Params>, Json(ids): Json<Vec<String>>) -> ApiResult {
    let entries = require_entries(&db, &ids)?;
    let cur = currency(&params)?;
    let out: Vec<Value> = entries
        .iter()
        .filter_map(|entry| {
            let point = entry.lowest(|_| true)?;
            Some(json!({ "id": entry.game.id, "low": low_record(&db, entry, point, cur) }))
        })
        .collect();
    Ok(Json(json!(out)))
}

async fn store_low(State(db): State<Db>, Query(params): Query<Params>, Json(ids): Json<Vec<String>>) -> ApiResult {
    let entries = require_entries(&db, &ids)?;
    let cur = currency(&params)?;
    let shops = shop_filter(&params)?;
    let out: Vec<Value> = entries
        .iter()
        .map(|entry| {
            let lows: Vec<Value> = db
                .shops
                .iter()
                .filter(|shop| allowed(&shops, shop.id))
                .filter_map(|shop| entry.lowest(|p| p.shop_id == shop.id))
                .map(|p| low_record(&db, entry, p, cur))
                .collect();
            json!({ "id": entry.game.id, "lows": lows })
        })
        .collect();
    Ok(Json(json!(out)))
}

/// `since` must be `YYYY-MM-DDTHH:MM:SSZ`; fractional seconds are refused.
fn parse_since(raw: &str) -> Result<&str, StatusCode> {
    let well_formed = raw.len() == 20 && raw.ends_with('Z') && raw.as_bytes()[10] == b'T' && !raw.contains('.');
    if well_formed {
        Ok(raw)
    } else {
        Err(StatusCode::BAD_REQUEST)
    }
}

async fn history_log(State(db): State<Db>, Query(params): Query<Params>) -> ApiResult {
    let entry = require_entry(&db, &params)?;
    let cur = currency(&params)?;
    let shops = shop_filter(&params)?;
    let since = params.get("since").map(|s| parse_since(s)).transpose()?;

    let out: Vec<Value> = entry
        .history
        .iter()
        .filter(|p| allowed(&shops, p.shop_id))
        .filter(|p| since.map_or(true, |since| p.timestamp.as_str() >= since))
        .map(|p| {
            json!({
                "timestamp": p.timestamp,
                "shop": shop_json(&db, p.shop_id),
                "deal": {
                    "price": cur.price(entry.price_cents(p.cut)),
                    "regular": cur.price(entry.regular_cents),
                    "cut": p.cut,
                },
            })
        })
        .collect();
    Ok(Json(json!(out)))
}

async fn game_bundles(State(db): State<Db>, Query(params): Query<Params>) -> ApiResult {
    let entry = require_entry(&db, &params)?;
    let cur = currency(&params)?;
    let expired: bool = number(&params, "expired", false)?;
    let index = db.index_of(&entry.game.id);
    let out: Vec<Value> = db
        .bundles
        .iter()
        .filter(|b| index.is_some_and(|i| b.games.contains(&i)))
        .filter(|b| expired || !b.is_expired())
        .map(|b| bundle_json(&db, b, cur))
        .collect();
    Ok(Json(json!(out)))
}

async fn subscriptions(State(db): State<Db>, Query(params): Query<Params>, Json(ids): Json<Vec<String>>) -> ApiResult {
    let entries = require_entries(&db, &ids)?;
    currency(&params)?;
    let out: Vec<Value> = entries
        .iter()
        .map(|entry| {
            let subs = if entry.game.id == WITCHER_ID {
                json!([{ "id": 1, "name": "Game Pass", "leaving": null }])
            } else {
                json!([])
            };
            json!({ "id": entry.game.id, "subs": subs })
        })
        .collect();
    Ok(Json(json!(out)))
}

// ---------------------------------------------------------------------------
// /deals
// ---------------------------------------------------------------------------

async fn deals(State(db): State<Db>, Query(params): Query<Params>) -> ApiResult {
    let cur = currency(&params)?;
    let (offset, limit) = page(&params, 200)?;
    let nondeals: bool = number(&params, "nondeals", false)?;
    let mature: bool = number(&params, "mature", false)?;
    let shops = shop_filter(&params)?;
    let by_price = match params.get("sort").map(String::as_str).unwrap_or("cut") {
        "cut" => false,
        "price" => true,
        _ => return Err(StatusCode::BAD_REQUEST),
    };

    // One row per game: its best offer among the allowed shops.
    let mut rows: Vec<(&Entry, u32, i32)> = db
        .entries
        .iter()
        .filter(|e| mature || !e.game.mature)
        .filter_map(|e| {
            let (shop, cut) = e
                .cuts
                .iter()
                .copied()
                .filter(|&(shop, _)| allowed(&shops, shop))
                .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))?;
            (nondeals || cut > 0).then_some((e, shop, cut))
        })
        .collect();

    if by_price {
        rows.sort_by_key(|&(e, _, cut)| e.price_cents(cut));
    } else {
        rows.sort_by(|a, b| b.2.cmp(&a.2));
    }

    let total = rows.len();
    let list: Vec<Value> = rows
        .into_iter()
        .skip(offset)
        .take(limit)
        .map(|(entry, shop, cut)| {
            let mut deal = offer(&db, entry, shop, cut, cur);
            deal.insert("historyLow".to_string(), low_price(entry, cur, ""));
            deal.insert("historyLow_1y".to_string(), low_price(entry, cur, "2024-07-01T00:00:00Z"));
            deal.insert("historyLow_3m".to_string(), low_price(entry, cur, "2025-04-01T00:00:00Z"));
            game_with(entry, json!({ "deal": deal }))
        })
        .collect();

    let next_offset = offset + list.len();
    Ok(Json(json!({
        "nextOffset": next_offset,
        "hasMore": next_offset < total,
        "list": list,
    })))
}

// ---------------------------------------------------------------------------
// /lookup
// ---------------------------------------------------------------------------

async fn ids_by_titles(State(db): State<Db>, Json(titles): Json<Vec<String>>) -> ApiResult {
    if titles.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let out: Map<String, Value> = titles
        .into_iter()
        .map(|title| {
            let id = db.by_title(&title).map(|e| json!(e.game.id)).unwrap_or(Value::Null);
            (title, id)
        })
        .collect();
    Ok(Json(Value::Object(out)))
}

async fn ids_by_shop(
    State(db): State<Db>,
    Path(shop_id): Path<u32>,
    Json(shop_game_ids): Json<Vec<String>>,
) -> ApiResult {
    if shop_game_ids.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let out: Map<String, Value> = shop_game_ids
        .into_iter()
        .map(|shop_game_id| {
            let id = shop_game_id
                .strip_prefix("app/")
                .filter(|_| shop_id == STEAM_ID)
                .and_then(|appid| appid.parse::<u64>().ok())
                .and_then(|appid| db.by_appid(appid))
                .map(|e| json!(e.game.id))
                .unwrap_or(Value::Null);
            (shop_game_id, id)
        })
        .collect();
    Ok(Json(Value::Object(out)))
}

// ---------------------------------------------------------------------------
// /service/shops
// ---------------------------------------------------------------------------

async fn shops(State(db): State<Db>, Query(params): Query<Params>) -> ApiResult {
    currency(&params)?;
    let out: Vec<Value> = db
        .shops
        .iter()
        .map(|shop| {
            let deals = db
                .entries
                .iter()
                .filter(|e| e.cuts.iter().any(|&(id, cut)| id == shop.id && cut > 0))
                .count();
            let update = (shop.id == STEAM_ID).then_some(NOW);
            json!({
                "id": shop.id,
                "title": shop.name,
                "games": db.entries.len(),
                "deals": deals,
                "update": update,
            })
        })
        .collect();
    Ok(Json(json!(out)))
}

// ---------------------------------------------------------------------------
// /stats
// ---------------------------------------------------------------------------

/// Split `total` into buckets of `size` using `weights` (percent of total).
fn buckets(total: u64, size: u32, weights: &[u64], cap: Option<u64>) -> Vec<Value> {
    weights
        .iter()
        .enumerate()
        .map(|(k, &weight)| (u64::from(size) * (k as u64 + 1), weight))
        .take_while(|&(bound, _)| cap.map_or(true, |cap| bound <= cap))
        .map(|(bound, weight)| {
            let count = total * weight / 100;
            let percent = if total == 0 {
                0.0
            } else {
                (count as f64 * 10_000.0 / total as f64).round() / 100.0
            };
            json!({ "price": bound, "count": count, "percent": percent })
        })
        .collect()
}

fn average(buckets: &[Value]) -> f64 {
    let (weighted, count) = buckets.iter().fold((0.0, 0.0), |(w, c), b| {
        let price = b["price"].as_f64().unwrap_or_default();
        let count = b["count"].as_f64().unwrap_or_default();
        (w + price * count, c + count)
    });
    if count == 0.0 {
        0.0
    } else {
        (weighted / count * 100.0).round() / 100.0
    }
}

async fn waitlist_stats(State(db): State<Db>, Query(params): Query<Params>) -> ApiResult {
    let entry = require_entry(&db, &params)?;
    let cur = currency(&params)?;
    let bucket_price: u32 = number(&params, "bucket_price", 5)?;
    let bucket_cut: u32 = number(&params, "bucket_cut", 5)?;
    if bucket_price == 0 || bucket_cut == 0 {
        return Err(StatusCode::BAD_REQUEST);
    }

    let total = entry.waitlisted;
    let price_buckets = buckets(total, bucket_price, &[27, 23, 18, 13, 9], None);
    let cut_buckets = buckets(total, bucket_cut, &[35, 25, 20, 10, 5, 5], Some(100));

    Ok(Json(json!({
        "count": total,
        "price": {
            "currency": cur.code,
            "any": total / 10,
            "average": average(&price_buckets),
            "buckets": price_buckets,
        },
        "cut": {
            "average": average(&cut_buckets),
            "buckets": cut_buckets,
        },
    })))
}

fn ranking(db: &Catalog, params: &Params, metric: fn(&Entry) -> u64) -> ApiResult {
    let (offset, limit) = page(params, 500)?;
    let mut ranked: Vec<&Entry> = db.entries.iter().collect();
    ranked.sort_by_key(|e| std::cmp::Reverse(metric(e)));
    let out: Vec<Value> = ranked
        .into_iter()
        .enumerate()
        .skip(offset)
        .take(limit)
        .map(|(i, entry)| game_with(entry, json!({ "position": i + 1, "count": metric(entry) })))
        .collect();
    Ok(Json(json!(out)))
}

async fn most_waitlisted(State(db): State<Db>, Query(params): Query<Params>) -> ApiResult {
    ranking(&db, &params, |e| e.waitlisted)
}

async fn most_collected(State(db): State<Db>, Query(params): Query<Params>) -> ApiResult {
    ranking(&db, &params, |e| e.collected)
}

async fn most_popular(State(db): State<Db>, Query(params): Query<Params>) -> ApiResult {
    ranking(&db, &params, |e| e.popularity)
}
