//! Prediction form state

use super::field::FormField;
use std::collections::BTreeMap;

/// Field name to submitted value
pub type FormValues = BTreeMap<String, String>;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        if count == 0 {
            return;
        }
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Choice fields: (name, label)
const CHOICE_FIELDS: &[(&str, &str)] = &[
    ("make", "Make"),
    ("fuel_type", "Fuel Type"),
    ("aspiration", "Aspiration"),
    ("body_style", "Body Style"),
    ("drive_wheels", "Drive Wheels"),
    ("engine_location", "Engine Location"),
    ("engine_type", "Engine Type"),
    ("fuel_system", "Fuel System"),
];

/// Numeric fields: (name, label, default)
const NUMBER_FIELDS: &[(&str, &str, &str)] = &[
    ("symboling", "Symboling", "0"),
    ("normalized_losses", "Normalized Losses", "120"),
    ("wheel_base", "Wheel Base", "98.8"),
    ("length", "Length", "174.0"),
    ("width", "Width", "65.9"),
    ("height", "Height", "53.7"),
    ("curb_weight", "Curb Weight", "2555"),
    ("engine_size", "Engine Size", "127"),
    ("bore", "Bore", "3.33"),
    ("stroke", "Stroke", "3.25"),
    ("compression_ratio", "Compression Ratio", "10.0"),
    ("horsepower", "Horsepower", "104"),
    ("peak_rpm", "Peak RPM", "5125"),
    ("city_mpg", "City MPG", "25"),
    ("highway_mpg", "Highway MPG", "31"),
    ("num_of_doors", "Doors", "4"),
    ("num_of_cylinders", "Cylinders", "4"),
];

/// Vehicle specification form submitted for a price prediction
#[derive(Debug, Clone)]
pub struct PredictionForm {
    fields: Vec<FormField>,
    pub active_field_index: usize,
}

impl PredictionForm {
    pub fn new() -> Self {
        let choices = CHOICE_FIELDS
            .iter()
            .map(|(name, label)| FormField::choice(name, label));
        let numbers = NUMBER_FIELDS
            .iter()
            .map(|(name, label, default)| FormField::number(name, label, default));

        Self {
            fields: choices.chain(numbers).collect(),
            active_field_index: 0,
        }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Current value of every field, keyed by field name
    pub fn values(&self) -> FormValues {
        self.fields
            .iter()
            .map(|f| (f.name.clone(), f.as_text().to_string()))
            .collect()
    }

    /// Restore every field to its default value
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
        self.active_field_index = 0;
    }
}

impl Default for PredictionForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for PredictionForm {
    fn field_count(&self) -> usize {
        self.fields.len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len().saturating_sub(1));
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.active_field_index)
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }
}
