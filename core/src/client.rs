//! Entry point bundling the five services behind one API key.

use std::sync::Arc;

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::http::{Transport, UreqTransport};
use crate::requester::Requester;
use crate::services::{DealsService, GamesService, LookupService, ShopsService, StatsService};

/// Client for the pricing API.
///
/// Holds only immutable data; clones share the same transport and may be
/// used from several threads at once.
#[derive(Debug, Clone)]
pub struct ItadClient {
    games: GamesService,
    deals: DealsService,
    lookup: LookupService,
    shops: ShopsService,
    stats: StatsService,
}

impl ItadClient {
    /// Client against the public API with the default `ureq` transport.
    pub fn new(api_key: &str) -> Result<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    pub fn with_config(api_key: &str, config: ClientConfig) -> Result<Self> {
        Self::with_transport(api_key, config, Arc::new(UreqTransport::new()))
    }

    /// Fails with `ApiError::Configuration` when `api_key` is empty or blank.
    pub fn with_transport(api_key: &str, config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(ApiError::Configuration("API key is required".to_string()));
        }

        tracing::debug!(base_url = %config.base_url, validate = config.validate, "creating client");

        let requester = Requester::new(api_key.to_string(), config, transport);
        Ok(Self {
            games: GamesService::new(requester.clone()),
            deals: DealsService::new(requester.clone()),
            lookup: LookupService::new(requester.clone()),
            shops: ShopsService::new(requester.clone()),
            stats: StatsService::new(requester),
        })
    }

    pub fn games(&self) -> &GamesService {
        &self.games
    }

    pub fn deals(&self) -> &DealsService {
        &self.deals
    }

    pub fn lookup(&self) -> &LookupService {
        &self.lookup
    }

    pub fn shops(&self) -> &ShopsService {
        &self.shops
    }

    pub fn stats(&self) -> &StatsService {
        &self.stats
    }
}
