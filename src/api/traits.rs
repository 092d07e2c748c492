//! Trait abstraction for the prediction service to enable mocking in tests

use super::ApiError;
use crate::state::{FormValues, Insights, ModelStats, OptionSet, PredictionResponse};
use async_trait::async_trait;

/// Operations offered by the prediction service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PredictionApi: Send + Sync {
    /// Fetch model accuracy (`GET /api/stats`)
    async fn fetch_stats(&self) -> Result<ModelStats, ApiError>;

    /// Fetch the choices for every categorical field (`GET /api/options`)
    async fn fetch_options(&self) -> Result<OptionSet, ApiError>;

    /// Fetch the published feature findings
    async fn fetch_insights(&self) -> Result<Insights, ApiError>;

    /// Request a price prediction for the given field values (`POST /api/predict`)
    ///
    /// Failures reported by the service come back as `Ok` with `success: false`.
    async fn predict(&self, values: &FormValues) -> Result<PredictionResponse, ApiError>;
}
