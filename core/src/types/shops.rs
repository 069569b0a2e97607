//! Response contracts for the `service/shops` resource group.

use serde::{Deserialize, Serialize};

use crate::validate::{Validate, ValidationResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopListItem {
    pub id: u32,
    pub title: String,
    /// Number of games the shop sells.
    pub games: u64,
    /// Number of those games currently discounted.
    pub deals: u64,
    /// Last time the shop's prices were refreshed.
    pub update: Option<String>,
}

impl Validate for ShopListItem {
    fn validate(&self) -> ValidationResult {
        Ok(())
    }
}
