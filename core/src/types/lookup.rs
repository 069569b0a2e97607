//! Response contracts for the `lookup` resource group.
//!
//! Both lookups answer with a JSON object keyed by the submitted value.
//! A key maps to `None` when the server found no matching game.

use std::collections::HashMap;

/// Submitted title to game id.
pub type TitleLookup = HashMap<String, Option<String>>;

/// Submitted shop-specific game id to game id.
pub type ShopIdLookup = HashMap<String, Option<String>>;
