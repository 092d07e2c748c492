//! Synchronizes the prediction form with server options and local storage

use super::field::LabelStyle;
use super::form_state::{FormValues, PredictionForm};
use crate::state::OptionSet;
use crate::storage::KeyValueStore;

/// Storage key holding the persisted form values
pub const FORM_STATE_KEY: &str = "prediction_form_state";

/// Default mapping from option keys served by the API to form field names
pub const DEFAULT_OPTION_BINDINGS: &[(&str, &str)] = &[
    ("make", "make"),
    ("fuel-type", "fuel_type"),
    ("aspiration", "aspiration"),
    ("body-style", "body_style"),
    ("drive-wheels", "drive_wheels"),
    ("engine-location", "engine_location"),
    ("engine-type", "engine_type"),
    ("fuel-system", "fuel_system"),
];

/// Populates choice lists and persists form values
#[derive(Debug, Clone)]
pub struct FormStateManager {
    label_style: LabelStyle,
    /// (option key, field name)
    bindings: Vec<(String, String)>,
}

impl Default for FormStateManager {
    fn default() -> Self {
        Self::new(
            LabelStyle::default(),
            DEFAULT_OPTION_BINDINGS
                .iter()
                .map(|(key, field)| (key.to_string(), field.to_string()))
                .collect(),
        )
    }
}

impl FormStateManager {
    pub fn new(label_style: LabelStyle, bindings: Vec<(String, String)>) -> Self {
        Self {
            label_style,
            bindings,
        }
    }

    /// Replace the choices of one field.
    ///
    /// The current value is kept if it is still offered, otherwise the first
    /// real choice is selected. Returns false when the field is not a choice
    /// field of the form.
    pub fn populate_options(
        &self,
        form: &mut PredictionForm,
        field_id: &str,
        choices: &[String],
    ) -> bool {
        let Some(choice) = form
            .field_mut(field_id)
            .and_then(|field| field.as_choice_mut())
        else {
            tracing::warn!("No choice field named {field_id}");
            return false;
        };

        let duplicates = choice.set_options(choices, self.label_style);
        if duplicates > 0 {
            tracing::warn!("Dropped {duplicates} duplicate choice(s) for {field_id}");
        }
        true
    }

    /// Populate every bound field from an option set
    pub fn bind_options(&self, form: &mut PredictionForm, options: &OptionSet) {
        for (key, field_id) in &self.bindings {
            match options.get(key) {
                Some(choices) => {
                    self.populate_options(form, field_id, choices);
                }
                None => tracing::warn!("Option set has no entry for {key}"),
            }
        }
    }

    /// Write every field value to the store, replacing the previous snapshot
    pub fn save_state(&self, form: &PredictionForm, store: &dyn KeyValueStore) {
        let values = form.values();
        let result = serde_json::to_string(&values)
            .map_err(crate::storage::StorageError::from)
            .and_then(|json| store.set(FORM_STATE_KEY, &json));

        if let Err(err) = result {
            tracing::warn!("Failed to save form state: {err}");
        }
    }

    /// Restore field values from the store.
    ///
    /// Keys that do not name a form field are ignored. A missing or malformed
    /// snapshot leaves the form untouched.
    pub fn load_state(&self, form: &mut PredictionForm, store: &dyn KeyValueStore) {
        let stored = match store.get(FORM_STATE_KEY) {
            Ok(Some(stored)) => stored,
            Ok(None) => return,
            Err(err) => {
                tracing::warn!("Failed to read form state: {err}");
                return;
            }
        };

        let values: FormValues = match serde_json::from_str(&stored) {
            Ok(values) => values,
            Err(err) => {
                tracing::warn!("Ignoring malformed form state: {err}");
                return;
            }
        };

        let mut restored = 0;
        for (name, value) in values {
            if let Some(field) = form.field_mut(&name) {
                field.set_text(value);
                restored += 1;
            }
        }
        tracing::debug!("Restored {restored} form field(s)");
    }
}
