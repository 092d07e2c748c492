//! Application state definitions

use super::animation::ReadoutBoard;
use super::forms::PredictionForm;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Option key (hyphenated, e.g. `fuel-type`) to its ordered choices
pub type OptionSet = HashMap<String, Vec<String>>;

/// Model accuracy figures served by `/api/stats`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelStats {
    /// R² on the training split, 0..1
    pub train_score: f64,
    /// R² on the test split, 0..1
    pub test_score: f64,
}

impl ModelStats {
    /// Score as a percentage rounded to one decimal place
    pub fn as_percent(score: f64) -> f64 {
        (score * 1000.0).round() / 10.0
    }
}

/// A feature that drives the predicted price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    /// Relative importance, 0..1
    pub importance: f64,
    #[serde(default)]
    pub description: String,
}

/// Findings published alongside the model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    #[serde(default)]
    pub top_features: Vec<Feature>,
}

/// Response of `/api/predict`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    #[serde(default)]
    pub success: bool,
    pub predicted_price: Option<f64>,
    pub currency: Option<String>,
    pub error: Option<String>,
}

/// What the result panel shows
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultPanel {
    /// Waiting for the first analysis
    #[default]
    Standby,
    /// A prediction is on screen
    Active { price: f64, currency: String },
}

impl ResultPanel {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Form
    pub form: PredictionForm,

    // Data
    pub stats: Option<ModelStats>,
    pub findings: Vec<Feature>,

    // Display
    pub readouts: ReadoutBoard,
    pub result: ResultPanel,

    // UI state
    pub api_connected: bool,
    pub analyzing: bool,
    pub status_message: Option<String>,
    /// Index of the finding shown at the top of the findings panel
    pub findings_scroll: usize,
    error_queue: Vec<String>,
}

impl AppState {
    /// Queue an error for the blocking error dialog
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push(message);
    }

    /// Error currently shown, if any
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.first().map(String::as_str)
    }

    /// Dismiss the error currently shown
    pub fn dismiss_error(&mut self) {
        if !self.error_queue.is_empty() {
            self.error_queue.remove(0);
        }
    }

    pub fn has_error(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn scroll_findings_down(&mut self) {
        if self.findings_scroll + 1 < self.findings.len() {
            self.findings_scroll += 1;
        }
    }

    pub fn scroll_findings_up(&mut self) {
        self.findings_scroll = self.findings_scroll.saturating_sub(1);
    }
}
