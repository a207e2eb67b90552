// WakaTime coding activity: two stats windows fetched concurrently and
// merged into one payload. All-or-nothing; a failed window fails the whole
// summary.

use base64::Engine;
use base64::engine::general_purpose;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::instrument;

use crate::config::WakatimeConfig;
use crate::error::{Error, Result};
use crate::models::{ActivitySummary, AllTimeStats, CodingStats, DataEnvelope};

const USER_AGENT: &str = concat!("devdash/", env!("CARGO_PKG_VERSION"));

pub struct WakatimeRepo {
    client: Client,
    config: WakatimeConfig,
}

impl WakatimeRepo {
    pub fn new(config: WakatimeConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(Error::Network)?;
        Ok(Self { client, config })
    }

    /// WakaTime authenticates with `Basic <base64(api_key)>`.
    fn auth_header(&self) -> Result<String> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| Error::Config("WAKATIME_API_KEY not set".into()))?;
        Ok(format!("Basic {}", general_purpose::STANDARD.encode(key)))
    }

    /// Builds the full /api/wakatime payload. The two windows are fetched
    /// with a structured join; both outcomes are observed before either
    /// error is reported (no early cancellation).
    #[instrument(skip(self), fields(repo = "wakatime", operation = "get_summary"))]
    pub async fn get_summary(&self) -> Result<ActivitySummary> {
        let auth = self.auth_header()?;

        let (last_7_days, all_time) = tokio::join!(
            self.fetch::<CodingStats>("users/current/stats/last_7_days", &auth),
            self.fetch::<AllTimeStats>("users/current/all_time_since_today", &auth),
        );

        Ok(ActivitySummary {
            stats_7_days: last_7_days?,
            stats_all_time: all_time?,
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str, auth: &str) -> Result<T> {
        let url = format!("{}/{}", self.config.api_url.trim_end_matches('/'), path);
        let response = self
            .client
            .get(&url)
            .header(reqwest::header::AUTHORIZATION, auth)
            .send()
            .await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Wakatime(format!("{path}: {status}: {body}")));
        }
        let envelope: DataEnvelope<T> = response.json().await?;
        Ok(envelope.data)
    }
}
