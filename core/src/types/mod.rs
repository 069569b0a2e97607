//! Response contracts, one module per resource group.
//!
//! # Design
//! Types mirror the server's JSON. Required-but-nullable fields are plain
//! `Option<T>` and serialize back as `null`; fields the server may leave out
//! entirely are `#[serde(default)]` and skipped when absent. JSON
//! intersections (a game plus extra fields) use `#[serde(flatten)]`.

pub mod common;
pub mod deals;
pub mod games;
pub mod lookup;
pub mod shops;
pub mod stats;

pub use common::{
    Assets, Bundle, BundleCounts, BundlePage, BundleTier, DealPrice, Drm, Game, GameType, GameUrls,
    HistoricLowPrice, HistoricStoreLowPrice, LowRecord, Platform, Price, Shop,
};
pub use deals::{DealListing, DealsList, ListedDeal};
pub use games::{
    Company, CurrentPrice, GameInfo, GamePrices, GameStats, GameSubscriptions, HistoryLogEntry,
    HistoryLowSummary, LookupGameResponse, OverviewPrice, Players, PriceOverview, Review, ShopDeal,
    Subscription, SubscriptionId,
};
pub use lookup::{ShopIdLookup, TitleLookup};
pub use shops::ShopListItem;
pub use stats::{Bucket, CutHistogram, PriceHistogram, RankedGame, WaitlistStats};
