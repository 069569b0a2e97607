//! Records shared across resource groups: games, shops, prices, bundles
//! and historical lows.

use serde::{Deserialize, Serialize};

use crate::validate::{check_cut, check_opt_url, field, Validate, ValidationResult};

/// Artwork URLs for a game. Every asset is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Assets {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boxart: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner145: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner300: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner400: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner600: Option<String>,
}

impl Validate for Assets {
    fn validate(&self) -> ValidationResult {
        check_opt_url("boxart", self.boxart.as_deref())?;
        check_opt_url("banner300", self.banner300.as_deref())?;
        check_opt_url("banner400", self.banner400.as_deref())?;
        check_opt_url("banner600", self.banner600.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    Game,
    Dlc,
    Package,
}

/// A game as the API identifies it.
///
/// `id` is the API's own opaque identifier, not a store id such as a
/// Steam app id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: Option<GameType>,
    pub mature: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<Assets>,
}

impl Validate for Game {
    fn validate(&self) -> ValidationResult {
        field("assets", &self.assets)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shop {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drm {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameUrls {
    pub game: String,
}

impl Validate for GameUrls {
    fn validate(&self) -> ValidationResult {
        check_opt_url("game", Some(&self.game))
    }
}

/// An amount of money. `amount_int` is `amount` in minor units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub amount: f64,
    #[serde(rename = "amountInt")]
    pub amount_int: i64,
    pub currency: String,
}

/// Current price, pre-discount price and the cut between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealPrice {
    pub price: Price,
    pub regular: Price,
    pub cut: i32,
}

impl Validate for DealPrice {
    fn validate(&self) -> ValidationResult {
        check_cut("cut", self.cut)
    }
}

/// The lowest price ever recorded at one shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowRecord {
    pub shop: Shop,
    pub price: Price,
    pub regular: Price,
    pub cut: i32,
    pub timestamp: String,
}

impl Validate for LowRecord {
    fn validate(&self) -> ValidationResult {
        check_cut("cut", self.cut)
    }
}

/// Lowest price across all shops for one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricLowPrice {
    pub id: String,
    pub low: LowRecord,
}

impl Validate for HistoricLowPrice {
    fn validate(&self) -> ValidationResult {
        field("low", &self.low)
    }
}

/// Lowest price per shop for one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricStoreLowPrice {
    pub id: String,
    pub lows: Vec<LowRecord>,
}

impl Validate for HistoricStoreLowPrice {
    fn validate(&self) -> ValidationResult {
        field("lows", &self.lows)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundlePage {
    pub id: u32,
    pub name: String,
    pub shop_id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleCounts {
    pub games: u64,
    pub media: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BundleTier {
    pub price: Price,
    pub games: Vec<Game>,
}

impl Validate for BundleTier {
    fn validate(&self) -> ValidationResult {
        field("games", &self.games)
    }
}

/// A bundle offer. `expiry` is `None` for open-ended bundles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    pub id: u64,
    pub title: String,
    pub page: BundlePage,
    pub url: String,
    pub details: String,
    pub is_mature: bool,
    pub publish: String,
    pub expiry: Option<String>,
    pub counts: BundleCounts,
    pub tiers: Vec<BundleTier>,
}

impl Validate for Bundle {
    fn validate(&self) -> ValidationResult {
        field("tiers", &self.tiers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_type_may_be_null() {
        let game: Game = serde_json::from_str(
            r#"{"id":"01","slug":"s","title":"T","type":null,"mature":false}"#,
        )
        .unwrap();
        assert_eq!(game.kind, None);
        assert!(game.assets.is_none());

        let json = serde_json::to_value(&game).unwrap();
        assert!(json["type"].is_null(), "null type must be kept, not dropped");
        assert!(json.get("assets").is_none());
    }

    #[test]
    fn unknown_game_type_is_rejected() {
        let result: Result<Game, _> = serde_json::from_str(
            r#"{"id":"01","slug":"s","title":"T","type":"mod","mature":false}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn bundle_expiry_null_round_trips_as_null() {
        let raw = r#"{
            "id": 7, "title": "B", "page": {"id": 1, "name": "Fanatical", "shopId": 6},
            "url": "https://x.test/b", "details": "https://x.test/d", "isMature": false,
            "publish": "2025-01-01T00:00:00+01:00", "expiry": null,
            "counts": {"games": 1, "media": 0}, "tiers": []
        }"#;
        let bundle: Bundle = serde_json::from_str(raw).unwrap();
        assert_eq!(bundle.page.shop_id, 6);
        assert!(bundle.expiry.is_none());
        let json = serde_json::to_value(&bundle).unwrap();
        assert!(json["expiry"].is_null());
    }

    #[test]
    fn asset_urls_are_checked() {
        let assets = Assets {
            boxart: Some("not a url".to_string()),
            ..Assets::default()
        };
        assert_eq!(assets.validate().unwrap_err().path, "boxart");
    }
}
