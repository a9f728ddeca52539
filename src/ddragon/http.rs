use anyhow::Result;
use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::{ChampionCatalog, DdragonClient, DdragonError, BASE_URL};

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Issues a GET and turns any non-success status into an error carrying
    /// the response body, so the caller never sees a half-failed response.
    async fn get_checked(&self, url: &str) -> Result<Response> {
        debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(DdragonError::from)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DdragonError::ResponseError { status, body }.into());
        }

        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self
            .get_checked(url)
            .await?
            .text()
            .await
            .map_err(DdragonError::from)?;

        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(source) => Err(DdragonError::BadResponseJson { body, source }.into()),
        }
    }
}

#[async_trait]
impl DdragonClient for HttpClient {
    async fn latest_version(&self) -> Result<String> {
        let url = format!("{}/api/versions.json", BASE_URL);
        let mut versions: Vec<String> = self.get_json(&url).await?;

        if versions.is_empty() {
            return Err(DdragonError::EmptyVersionList.into());
        }

        Ok(versions.remove(0))
    }

    async fn champion_catalog(&self, version: &str) -> Result<ChampionCatalog> {
        let url = format!("{}/cdn/{}/data/en_US/tft-champion.json", BASE_URL, version);
        self.get_json(&url).await
    }

    async fn download_portrait(&self, version: &str, filename: &str) -> Result<Vec<u8>> {
        let url = format!("{}/cdn/{}/img/tft-champion/{}", BASE_URL, version, filename);
        let response = self.get_checked(&url).await?;
        let bytes = response.bytes().await.map_err(DdragonError::from)?;

        Ok(bytes.to_vec())
    }
}
