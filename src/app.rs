//! Application state and core logic

use crate::api::{ApiError, PredictionApi};
use crate::config::AppConfig;
use crate::state::{
    AnimationRequest, AppState, Clock, Form, FormStateManager, ModelStats, PredictionResponse,
    Readout, ResultPanel, ValueAnimator,
};
use crate::storage::KeyValueStore;
use crossterm::event::{KeyCode, KeyEvent};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot::{self, error::TryRecvError};

type PredictionResult = Result<PredictionResponse, ApiError>;

const ACCURACY_METER_DURATION: Duration = Duration::from_millis(2000);
const SCORE_DURATION: Duration = Duration::from_millis(1500);
const PRICE_DURATION: Duration = Duration::from_millis(1500);
const CONFIDENCE_DURATION: Duration = Duration::from_millis(500);

const PREDICTION_FAILED: &str = "Prediction failed";
const CONNECTION_FAILED: &str = "Failed to connect to the server";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Prediction service
    api: Arc<dyn PredictionApi>,
    /// Store for persisted form values
    store: Arc<dyn KeyValueStore>,
    /// Choice population and form persistence
    forms: FormStateManager,
    /// Drives the animated readouts
    animator: ValueAnimator,
    config: AppConfig,
    /// Whether the app should quit
    quit: bool,
    /// Set by the submit key, consumed by the run loop after the next draw
    submit_requested: bool,
    /// Outcome of the prediction request running in the background
    pending: Option<oneshot::Receiver<PredictionResult>>,
}

impl App {
    /// Create a new App instance
    pub fn new(
        config: AppConfig,
        api: Arc<dyn PredictionApi>,
        store: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let forms = FormStateManager::new(config.label_style(), config.option_bindings());

        Self {
            state: AppState::default(),
            api,
            store,
            forms,
            animator: ValueAnimator::new(clock),
            config,
            quit: false,
            submit_requested: false,
            pending: None,
        }
    }

    /// Startup sequence: restore the form, then fetch stats, options and insights
    pub async fn load(&mut self) {
        if self.config.restore_form_state() {
            self.forms
                .load_state(&mut self.state.form, self.store.as_ref());
        }

        self.load_model_stats().await;
        self.load_options().await;
        self.load_insights().await;

        tracing::info!("AutoValuate initialized");
    }

    async fn load_model_stats(&mut self) {
        match self.api.fetch_stats().await {
            Ok(stats) => {
                let test_score = ModelStats::as_percent(stats.test_score);
                let train_score = ModelStats::as_percent(stats.train_score);

                self.animate(
                    AnimationRequest::new(
                        Readout::AccuracyMeter,
                        0.0,
                        test_score,
                        ACCURACY_METER_DURATION,
                    )
                    .with_suffix("%"),
                );
                self.animate(
                    AnimationRequest::new(Readout::TrainScore, 0.0, train_score, SCORE_DURATION)
                        .with_suffix("%"),
                );
                self.animate(
                    AnimationRequest::new(Readout::TestScore, 0.0, test_score, SCORE_DURATION)
                        .with_suffix("%"),
                );

                self.state.stats = Some(stats);
                self.state.api_connected = true;
            }
            Err(err) => {
                tracing::error!("Error loading stats: {err}");
                for readout in [Readout::AccuracyMeter, Readout::TrainScore, Readout::TestScore] {
                    self.state.readouts.set_text(readout, "N/A");
                }
            }
        }
    }

    async fn load_options(&mut self) {
        match self.api.fetch_options().await {
            Ok(options) => self.forms.bind_options(&mut self.state.form, &options),
            Err(err) => tracing::error!("Error loading options: {err}"),
        }
    }

    async fn load_insights(&mut self) {
        match self.api.fetch_insights().await {
            Ok(insights) => {
                self.state.findings = insights.top_features;
                self.state.findings_scroll = 0;
            }
            Err(err) => tracing::error!("Error loading insights: {err}"),
        }
    }

    fn animate(&mut self, request: AnimationRequest) {
        self.animator.animate(request, &mut self.state.readouts);
    }

    /// Advance running animations; called once per frame
    pub fn tick(&mut self) {
        self.animator.tick(&mut self.state.readouts);
    }

    /// Whether frames or a prediction are pending (the run loop polls faster while true)
    pub fn is_busy(&self) -> bool {
        self.animator.is_animating() || self.pending.is_some()
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Mark the form as analyzing; the request is sent by [`App::start_prediction`]
    pub fn request_submit(&mut self) {
        if self.state.analyzing {
            return;
        }
        self.state.analyzing = true;
        self.submit_requested = true;
    }

    /// Take a pending submit request
    pub fn take_submit_request(&mut self) -> bool {
        std::mem::take(&mut self.submit_requested)
    }

    /// Send the form to the prediction service on a background task.
    ///
    /// The outcome is applied by [`App::poll_prediction`].
    pub fn start_prediction(&mut self) {
        if self.pending.is_some() {
            return;
        }
        self.state.analyzing = true;

        let api = Arc::clone(&self.api);
        let values = self.state.form.values();
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            // The receiver is gone only if the app has shut down
            let _ = tx.send(api.predict(&values).await);
        });
        self.pending = Some(rx);
    }

    /// Apply the prediction outcome once the background request has finished
    pub fn poll_prediction(&mut self) {
        let Some(rx) = self.pending.as_mut() else {
            return;
        };

        match rx.try_recv() {
            Ok(result) => {
                self.pending = None;
                self.finish_prediction(result);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Closed) => {
                tracing::error!("Prediction task ended without a result");
                self.pending = None;
                self.push_error(CONNECTION_FAILED);
                self.state.analyzing = false;
            }
        }
    }

    fn finish_prediction(&mut self, result: PredictionResult) {
        match result {
            Ok(response) => match (response.success, response.predicted_price) {
                (true, Some(price)) => {
                    let currency = response.currency.unwrap_or_else(|| "USD".to_string());
                    self.display_result(price, currency);
                }
                _ => {
                    let message = response
                        .error
                        .filter(|e| !e.is_empty())
                        .unwrap_or_else(|| PREDICTION_FAILED.to_string());
                    tracing::warn!("Prediction rejected: {message}");
                    self.push_error(message);
                }
            },
            Err(err) => {
                tracing::error!("Prediction request failed: {err}");
                self.push_error(CONNECTION_FAILED);
            }
        }

        self.state.analyzing = false;
    }

    fn display_result(&mut self, price: f64, currency: String) {
        self.state.result = ResultPanel::Active { price, currency };
        self.state.status_message = Some("Analysis complete".to_string());

        self.animate(AnimationRequest::new(Readout::Price, 0.0, price, PRICE_DURATION).currency());
        let confidence = self.config.confidence_percent();
        self.animate(
            AnimationRequest::new(Readout::Confidence, 0.0, confidence, CONFIDENCE_DURATION)
                .with_suffix("%"),
        );
    }

    /// Return the result panel to standby
    pub fn reset_analysis(&mut self) {
        self.state.result = ResultPanel::Standby;
        self.state.status_message = None;
        for readout in [Readout::Price, Readout::Confidence] {
            self.animator.cancel(readout);
            self.state.readouts.clear(readout);
        }
    }

    fn persist_form(&self) {
        self.forms.save_state(&self.state.form, self.store.as_ref());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // The error dialog blocks everything until dismissed
        if self.state.has_error() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        let changed = match key.code {
            _ if crate::platform::is_submit_shortcut(&key) => {
                self.request_submit();
                false
            }
            KeyCode::Enter => {
                self.request_submit();
                false
            }
            KeyCode::Tab | KeyCode::Down => {
                self.state.form.next_field();
                false
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.state.form.prev_field();
                false
            }
            KeyCode::Right => self
                .state
                .form
                .get_active_field_mut()
                .and_then(|f| f.as_choice_mut())
                .is_some_and(|choice| choice.next()),
            KeyCode::Left => self
                .state
                .form
                .get_active_field_mut()
                .and_then(|f| f.as_choice_mut())
                .is_some_and(|choice| choice.prev()),
            KeyCode::PageDown => {
                self.state.scroll_findings_down();
                false
            }
            KeyCode::PageUp => {
                self.state.scroll_findings_up();
                false
            }
            KeyCode::Char('r') => {
                self.reset_analysis();
                false
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.quit = true;
                false
            }
            KeyCode::Char(c) => self
                .state
                .form
                .get_active_field_mut()
                .is_some_and(|f| f.push_char(c)),
            KeyCode::Backspace => self
                .state
                .form
                .get_active_field_mut()
                .is_some_and(|f| f.pop_char()),
            _ => false,
        };

        if changed {
            self.persist_form();
        }
    }
}
