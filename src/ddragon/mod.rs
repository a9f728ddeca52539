mod http;

use std::collections::BTreeMap;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

pub use self::http::HttpClient;

pub const BASE_URL: &str = "https://ddragon.leagueoflegends.com";

/// One champion record from the `data` map of tft-champion.json. Data Dragon
/// ships more fields than these; anything we don't composite is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Champion {
    pub name: String,
    pub tier: u32,
    pub image: ChampionImage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChampionImage {
    /// Filename of the full-size portrait on the CDN, e.g. "TFT10_Jinx.TFT_Set10.png".
    pub full: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChampionCatalog {
    pub data: BTreeMap<String, Champion>,
}

/// Read-only surface of the Data Dragon API that the pipeline consumes.
#[async_trait]
pub trait DdragonClient {
    /// Returns the newest version token from the versions endpoint, which is
    /// ordered newest-first.
    async fn latest_version(&self) -> Result<String>;

    async fn champion_catalog(&self, version: &str) -> Result<ChampionCatalog>;

    /// Downloads the raw bytes of a champion portrait from the CDN.
    async fn download_portrait(&self, version: &str, filename: &str) -> Result<Vec<u8>>;
}

#[derive(Debug, Error)]
pub enum DdragonError {
    #[error("Data Dragon HTTP error")]
    Http {
        #[from]
        source: reqwest::Error,
    },

    #[error("Data Dragon returned success, but had malformed JSON response: {body}")]
    BadResponseJson {
        body: String,
        source: serde_json::Error,
    },

    #[error("Data Dragon returned HTTP {status} with body: {body}")]
    ResponseError { status: StatusCode, body: String },

    #[error("Data Dragon returned an empty version list")]
    EmptyVersionList,
}
