//! Response contracts for the `deals` resource group.

use serde::{Deserialize, Serialize};

use super::common::{Drm, Game, Platform, Price, Shop};
use crate::validate::{check_cut, check_url, field, Validate, ValidationResult};

/// The best current offer for a game in the deals listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListedDeal {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shop: Option<Shop>,
    pub price: Price,
    pub regular: Price,
    pub cut: i32,
    pub voucher: Option<String>,
    pub store_low: Option<Price>,
    pub history_low: Option<Price>,
    #[serde(rename = "historyLow_1y")]
    pub history_low_1y: Option<Price>,
    #[serde(rename = "historyLow_3m")]
    pub history_low_3m: Option<Price>,
    pub flag: Option<String>,
    pub drm: Vec<Drm>,
    pub platforms: Vec<Platform>,
    pub timestamp: String,
    pub expiry: Option<String>,
    pub url: String,
}

impl Validate for ListedDeal {
    fn validate(&self) -> ValidationResult {
        check_cut("cut", self.cut)?;
        check_url("url", &self.url)
    }
}

/// A game together with its best current deal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DealListing {
    #[serde(flatten)]
    pub game: Game,
    pub deal: ListedDeal,
}

impl Validate for DealListing {
    fn validate(&self) -> ValidationResult {
        self.game.validate()?;
        field("deal", &self.deal)
    }
}

/// One page of the deals listing. Each game appears at most once.
///
/// `next_offset` and `has_more` are echoed from the server and are not
/// computed locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealsList {
    pub next_offset: u64,
    pub has_more: bool,
    pub list: Vec<DealListing>,
}

impl Validate for DealsList {
    fn validate(&self) -> ValidationResult {
        field("list", &self.list)
    }
}
