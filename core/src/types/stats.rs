//! Response contracts for the `stats` resource group.

use serde::{Deserialize, Serialize};

use super::common::Game;
use crate::validate::{check_min, check_non_negative, check_percent, field, Validate, ValidationResult};

/// One histogram bucket. `percent` is relative to the total waitlist count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub price: f64,
    pub count: u64,
    pub percent: f64,
}

impl Validate for Bucket {
    fn validate(&self) -> ValidationResult {
        check_non_negative("price", self.price)?;
        check_percent("percent", self.percent)
    }
}

/// Waitlist notification price limits, bucketed by price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistogram {
    /// Three letter currency code.
    pub currency: String,
    /// Users that set no price limit.
    pub any: u64,
    pub average: f64,
    pub buckets: Vec<Bucket>,
}

impl Validate for PriceHistogram {
    fn validate(&self) -> ValidationResult {
        check_non_negative("average", self.average)?;
        field("buckets", &self.buckets)
    }
}

/// Waitlist notification cut limits, bucketed by cut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutHistogram {
    pub average: f64,
    pub buckets: Vec<Bucket>,
}

impl Validate for CutHistogram {
    fn validate(&self) -> ValidationResult {
        check_non_negative("average", self.average)?;
        field("buckets", &self.buckets)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaitlistStats {
    pub count: u64,
    pub price: PriceHistogram,
    pub cut: CutHistogram,
}

impl Validate for WaitlistStats {
    fn validate(&self) -> ValidationResult {
        field("price", &self.price)?;
        field("cut", &self.cut)
    }
}

/// A game in a most-waitlisted/collected/popular ranking.
///
/// `position` is 1-based and continues across pages: the first entry of a
/// page requested with `offset` has position `offset + 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedGame {
    pub position: u64,
    pub count: u64,
    #[serde(flatten)]
    pub game: Game,
}

impl Validate for RankedGame {
    fn validate(&self) -> ValidationResult {
        check_min("position", self.position, 1)?;
        self.game.validate()
    }
}
