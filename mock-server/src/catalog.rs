//! Deterministic fixture data served by the mock API.
//!
//! Prices are stored in US cents and converted per country on the way out.
//! Timestamps are UTC RFC 3339 strings in whole seconds, so they order
//! lexicographically.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

pub const WITCHER_ID: &str = "018d937f-3a29-72b9-888f-ecbf55a28e80";
pub const WITCHER_TITLE: &str = "The Witcher 3: Wild Hunt - Complete Edition";
pub const WITCHER_APPID: u64 = 292030;
pub const EXPEDITION_ID: &str = "018ffe0d-15a7-7247-bb3c-4e5e1980561f";
pub const EXPEDITION_TITLE: &str = "Clair Obscur: Expedition 33";
pub const STEAM_ID: u32 = 61;

const GAME_COUNT: usize = 60;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Shop {
    pub id: u32,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Assets {
    pub boxart: String,
    pub banner145: String,
    pub banner300: String,
    pub banner400: String,
    pub banner600: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub mature: bool,
    pub assets: Assets,
}

/// A game plus everything the mock needs to answer about it.
#[derive(Clone, Debug)]
pub struct Entry {
    pub game: Game,
    pub appid: Option<u64>,
    pub regular_cents: i64,
    /// Current cut per shop, in shop order.
    pub cuts: Vec<(u32, i32)>,
    pub waitlisted: u64,
    pub collected: u64,
    pub popularity: u64,
    pub history: Vec<HistoryPoint>,
}

#[derive(Clone, Debug)]
pub struct HistoryPoint {
    pub timestamp: String,
    pub shop_id: u32,
    pub cut: i32,
}

impl Entry {
    pub fn price_cents(&self, cut: i32) -> i64 {
        self.regular_cents * i64::from(100 - cut) / 100
    }

    /// Lowest recorded price among history points accepted by `keep`.
    pub fn lowest<F: Fn(&HistoryPoint) -> bool>(&self, keep: F) -> Option<&HistoryPoint> {
        self.history.iter().filter(|p| keep(p)).max_by_key(|p| p.cut)
    }
}

/// Currency a country is priced in, with its rate against USD.
#[derive(Clone, Copy, Debug)]
pub struct Currency {
    pub code: &'static str,
    pub rate: f64,
}

impl Currency {
    pub fn for_country(country: &str) -> Option<Currency> {
        match country {
            "US" => Some(Currency { code: "USD", rate: 1.0 }),
            "GB" => Some(Currency { code: "GBP", rate: 0.8 }),
            "FR" | "DE" | "ES" | "IT" | "NL" => Some(Currency { code: "EUR", rate: 0.9 }),
            "CA" => Some(Currency { code: "CAD", rate: 1.35 }),
            _ => None,
        }
    }

    pub fn price(&self, usd_cents: i64) -> Value {
        let cents = (usd_cents as f64 * self.rate).round() as i64;
        json!({
            "amount": cents as f64 / 100.0,
            "amountInt": cents,
            "currency": self.code,
        })
    }
}

/// A bundle fixture. `games` indexes `Catalog::entries`.
#[derive(Clone, Debug)]
pub struct BundleOffer {
    pub id: u64,
    pub title: String,
    pub games: Vec<usize>,
    pub tier_cents: i64,
    pub publish: String,
    pub expiry: Option<String>,
}

impl BundleOffer {
    pub fn is_expired(&self) -> bool {
        self.expiry.as_deref().is_some_and(|expiry| expiry < NOW)
    }
}

/// The fixed "current time" of the mock.
pub const NOW: &str = "2025-06-30T00:00:00Z";

pub struct Catalog {
    pub shops: Vec<Shop>,
    pub entries: Vec<Entry>,
    pub bundles: Vec<BundleOffer>,
}

impl Catalog {
    pub fn new() -> Self {
        let shops = vec![
            Shop { id: STEAM_ID, name: "Steam".to_string() },
            Shop { id: 35, name: "GOG".to_string() },
            Shop { id: 16, name: "Epic Game Store".to_string() },
        ];
        let entries = (0..GAME_COUNT).map(|i| build_entry(i, &shops)).collect();
        let bundles = vec![
            BundleOffer {
                id: 11001,
                title: "Witcher Collection".to_string(),
                games: vec![0, 3],
                tier_cents: 1499,
                publish: "2025-06-01T17:00:00Z".to_string(),
                expiry: None,
            },
            BundleOffer {
                id: 11002,
                title: "Old Classics".to_string(),
                games: vec![0, 1, 2],
                tier_cents: 999,
                publish: "2024-11-01T17:00:00Z".to_string(),
                expiry: Some("2024-12-31T23:59:59Z".to_string()),
            },
            BundleOffer {
                id: 11003,
                title: "Indie Week".to_string(),
                games: vec![1, 4, 5],
                tier_cents: 499,
                publish: "2025-06-20T17:00:00Z".to_string(),
                expiry: Some("2099-01-01T00:00:00Z".to_string()),
            },
        ];
        Self { shops, entries, bundles }
    }

    pub fn by_id(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.game.id == id)
    }

    pub fn by_title(&self, title: &str) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|e| e.game.title.eq_ignore_ascii_case(title.trim()))
    }

    pub fn by_appid(&self, appid: u64) -> Option<&Entry> {
        self.entries.iter().find(|e| e.appid == Some(appid))
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.game.id == id)
    }

    pub fn shop(&self, id: u32) -> Option<&Shop> {
        self.shops.iter().find(|s| s.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

fn build_entry(i: usize, shops: &[Shop]) -> Entry {
    let (id, title) = match i {
        0 => (WITCHER_ID.to_string(), WITCHER_TITLE.to_string()),
        1 => (EXPEDITION_ID.to_string(), EXPEDITION_TITLE.to_string()),
        _ => (
            Uuid::from_u128(0x0190_0000_0000_7000_8000_0000_0000_0000 + i as u128).to_string(),
            format!("Mock Game {i:02}"),
        ),
    };
    let slug = slugify(&title);
    let kind = match i % 10 {
        9 => Some("dlc".to_string()),
        7 if i > 20 => None,
        _ => Some("game".to_string()),
    };
    let asset = |size: &str| format!("https://assets.mock.test/{slug}/{size}.jpg");
    let game = Game {
        id,
        slug: slug.clone(),
        title,
        kind,
        mature: i % 17 == 5,
        assets: Assets {
            boxart: asset("boxart"),
            banner145: asset("banner145"),
            banner300: asset("banner300"),
            banner400: asset("banner400"),
            banner600: asset("banner600"),
        },
    };

    let cuts: Vec<(u32, i32)> = shops
        .iter()
        .enumerate()
        .map(|(j, shop)| (shop.id, (((i * 7 + j * 13) % 9) * 10) as i32))
        .collect();

    let history = (0..18)
        .map(|m| {
            let (year, month) = if m < 12 { (2024, m + 1) } else { (2025, m - 11) };
            let (shop_id, _) = cuts[m % cuts.len()];
            HistoryPoint {
                timestamp: format!("{year}-{month:02}-15T12:00:00Z"),
                shop_id,
                cut: (((i + m * 3) % 10) * 9) as i32,
            }
        })
        .rev()
        .collect();

    Entry {
        game,
        appid: if i == 0 { Some(WITCHER_APPID) } else { Some(1_000_000 + i as u64) },
        regular_cents: 999 + ((i as i64 * 500) % 5000),
        cuts,
        waitlisted: 100_000 - i as u64 * 1_000,
        collected: 50_000 + (i as u64 * 7_919) % 40_000,
        popularity: (i as u64 * 104_729) % 997,
        history,
    }
}

fn slugify(title: &str) -> String {
    let mut slug = String::new();
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_matches('-').to_string()
}
