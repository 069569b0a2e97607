//! Typed, blocking client for the IsThereAnyDeal game pricing API.
//!
//! # Overview
//! Five services (`games`, `deals`, `lookup`, `shops`, `stats`) each map
//! one operation to one HTTP round trip: build the URL with the API key
//! appended last, send the request, check the status and decode the JSON
//! into the matching response type.
//!
//! # Design
//! - `ItadClient` owns nothing mutable. Services share one `Requester`
//!   holding the key, the `ClientConfig` and an injected `Transport`.
//! - Every operation has a `build_*` twin that returns the `HttpRequest`
//!   without sending it, so request construction is testable without I/O.
//! - No caching, retries or rate limiting: a failed call fails once and the
//!   caller decides whether to resubmit.
//! - Response contracts can optionally be checked with `Validate`
//!   (`ClientConfig::validate`).

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod query;
pub mod requester;
pub mod services;
pub mod types;
pub mod validate;

pub use client::ItadClient;
pub use config::ClientConfig;
pub use error::{ApiError, Result};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
pub use query::{QueryParams, QueryValue};
pub use services::{
    BundlesOptions, CountryOptions, DealSort, DealsOptions, GameLookup, HistoryLogOptions, OverviewOptions,
    PageOptions, PricesOptions, SearchOptions, StoreLowOptions, WaitlistOptions,
};
pub use validate::{Validate, ValidationError};
