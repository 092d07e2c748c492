//! REST client for the prediction service

mod client;
mod error;
mod traits;

pub use client::ApiClient;
pub use error::ApiError;
pub use traits::PredictionApi;

#[cfg(test)]
pub use traits::MockPredictionApi;
