//! Response contracts for the `games` resource group.

use serde::{Deserialize, Serialize};

use super::common::{Bundle, DealPrice, Drm, Game, GameUrls, LowRecord, Platform, Price, Shop};
use crate::validate::{check_cut, check_url, field, Validate, ValidationResult};

/// Result of a lookup by title or store id. `game` is absent when nothing
/// matched; a miss is not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupGameResponse {
    pub found: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game: Option<Game>,
}

impl Validate for LookupGameResponse {
    fn validate(&self) -> ValidationResult {
        field("game", &self.game)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub rank: u64,
    pub waitlisted: u64,
    pub collected: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub score: Option<u32>,
    pub count: u64,
    pub source: String,
    pub url: String,
}

impl Validate for Review {
    fn validate(&self) -> ValidationResult {
        check_url("url", &self.url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Players {
    pub recent: u64,
    pub day: u64,
    #[serde(alias = "week")]
    pub weekly: u64,
    pub peak: u64,
}

/// Detailed information about one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameInfo {
    #[serde(flatten)]
    pub game: Game,
    pub early_access: bool,
    #[serde(alias = "achivements")]
    pub achievements: bool,
    pub trading_cards: bool,
    /// Steam app id, when the game is sold on Steam.
    pub appid: Option<u64>,
    pub tags: Vec<String>,
    pub release_date: Option<String>,
    pub stats: GameStats,
    pub developers: Vec<Company>,
    pub publishers: Vec<Company>,
    pub reviews: Vec<Review>,
    pub players: Option<Players>,
    pub urls: GameUrls,
}

impl Validate for GameInfo {
    fn validate(&self) -> ValidationResult {
        self.game.validate()?;
        field("reviews", &self.reviews)?;
        field("urls", &self.urls)
    }
}

/// All-time, one-year and three-month lows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryLowSummary {
    pub all: Option<Price>,
    pub y1: Option<Price>,
    pub m3: Option<Price>,
}

/// One shop's current offer for a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopDeal {
    pub shop: Shop,
    pub price: Price,
    pub regular: Price,
    pub cut: i32,
    pub voucher: Option<String>,
    pub store_low: Option<Price>,
    pub flag: Option<String>,
    /// Entries are passed through untouched; their shape varies by shop.
    pub drm: Vec<serde_json::Value>,
    pub platforms: Vec<Platform>,
    pub timestamp: String,
    pub expiry: Option<String>,
    pub url: String,
}

impl Validate for ShopDeal {
    fn validate(&self) -> ValidationResult {
        check_cut("cut", self.cut)
    }
}

/// Current prices of one game across shops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamePrices {
    pub id: String,
    pub history_low: HistoryLowSummary,
    pub deals: Vec<ShopDeal>,
}

impl Validate for GamePrices {
    fn validate(&self) -> ValidationResult {
        field("deals", &self.deals)
    }
}

/// The best current offer for a game in a price overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentPrice {
    pub shop: Shop,
    pub price: Price,
    pub regular: Price,
    pub cut: i32,
    #[serde(default)]
    pub voucher: Option<String>,
    #[serde(default)]
    pub flag: Option<String>,
    #[serde(default)]
    pub drm: Vec<Drm>,
    pub platforms: Vec<Platform>,
    pub timestamp: String,
    pub expiry: Option<String>,
    pub url: String,
}

impl Validate for CurrentPrice {
    fn validate(&self) -> ValidationResult {
        check_cut("cut", self.cut)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewPrice {
    pub id: String,
    pub current: Option<CurrentPrice>,
    pub lowest: Option<LowRecord>,
    pub bundled: u64,
    pub urls: GameUrls,
}

impl Validate for OverviewPrice {
    fn validate(&self) -> ValidationResult {
        field("current", &self.current)?;
        field("lowest", &self.lowest)?;
        field("urls", &self.urls)
    }
}

/// Best current price and historical low per game, plus active bundles
/// containing any of the games.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceOverview {
    pub prices: Vec<OverviewPrice>,
    pub bundles: Vec<Bundle>,
}

impl Validate for PriceOverview {
    fn validate(&self) -> ValidationResult {
        field("prices", &self.prices)?;
        field("bundles", &self.bundles)
    }
}

/// Subscription service id. The server has sent both numeric and string
/// ids; either is kept as received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubscriptionId {
    Number(u64),
    Text(String),
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubscriptionId::Number(id) => write!(f, "{id}"),
            SubscriptionId::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: SubscriptionId,
    pub name: String,
    pub leaving: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSubscriptions {
    pub id: String,
    pub subs: Vec<Subscription>,
}

impl Validate for GameSubscriptions {
    fn validate(&self) -> ValidationResult {
        Ok(())
    }
}

/// A recorded price change at one shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryLogEntry {
    pub timestamp: String,
    pub shop: Shop,
    pub deal: DealPrice,
}

impl Validate for HistoryLogEntry {
    fn validate(&self) -> ValidationResult {
        field("deal", &self.deal)
    }
}
