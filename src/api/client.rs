//! HTTP client for the prediction service
//!
//! Plain JSON over REST: three GET endpoints and one POST. Every call is a
//! single attempt; callers decide how to degrade on failure.

use super::{ApiError, PredictionApi};
use crate::state::{FormValues, Insights, ModelStats, OptionSet, PredictionResponse};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

const STATS_PATH: &str = "api/stats";
const OPTIONS_PATH: &str = "api/options";
const PREDICT_PATH: &str = "api/predict";
const INSIGHTS_PATH: &str = "static/visualizations/insights.json";

/// Client for the prediction service REST API
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client rooted at `base_url`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        // Paths are joined relative to the base, so it must end with a slash
        let mut base = base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base).map_err(|e| ApiError::InvalidUrl(format!("{base}: {e}")))?;

        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidUrl(format!("{path}: {e}")))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        tracing::debug!("GET {url}");

        let response = self.http.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl PredictionApi for ApiClient {
    async fn fetch_stats(&self) -> Result<ModelStats, ApiError> {
        self.get_json(STATS_PATH).await
    }

    async fn fetch_options(&self) -> Result<OptionSet, ApiError> {
        self.get_json(OPTIONS_PATH).await
    }

    async fn fetch_insights(&self) -> Result<Insights, ApiError> {
        self.get_json(INSIGHTS_PATH).await
    }

    async fn predict(&self, values: &FormValues) -> Result<PredictionResponse, ApiError> {
        let url = self.endpoint(PREDICT_PATH)?;
        tracing::debug!("POST {url}");

        let response = self.http.post(url).json(values).send().await?;
        // Failures come back as 400 with a JSON body, so the status is not checked
        tracing::debug!("Prediction responded with {}", response.status());

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
