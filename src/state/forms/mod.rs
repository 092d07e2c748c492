//! Form domain layer
//!
//! Type-safe form fields, the prediction form, and the synchronization of
//! its choice lists and persisted values.

mod field;
mod form_state;
mod manager;

pub use field::{FormField, LabelStyle};
pub use form_state::{Form, FormValues, PredictionForm};
pub use manager::{FormStateManager, DEFAULT_OPTION_BINDINGS, FORM_STATE_KEY};
