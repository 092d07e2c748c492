//! Form field value objects

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Display transform applied to option labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    /// `audi` -> `AUDI`
    #[default]
    Uppercase,
    /// `audi` -> `Audi`
    Capitalize,
    /// Label equals the value
    AsIs,
}

impl LabelStyle {
    pub fn apply(self, value: &str) -> String {
        match self {
            Self::Uppercase => value.to_uppercase(),
            Self::Capitalize => {
                let mut chars = value.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
            Self::AsIs => value.to_string(),
        }
    }
}

/// One entry of a choice list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Label of the empty entry at index 0 of every choice list
pub const PLACEHOLDER_LABEL: &str = "(select)";

/// Choice list whose index 0 is always the empty placeholder
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceField {
    options: Vec<SelectOption>,
    /// Current value; may name an option that has not been loaded yet
    value: String,
}

impl Default for ChoiceField {
    fn default() -> Self {
        Self {
            options: vec![SelectOption {
                value: String::new(),
                label: PLACEHOLDER_LABEL.to_string(),
            }],
            value: String::new(),
        }
    }
}

impl ChoiceField {
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Index of the current value among the options
    pub fn selected_index(&self) -> Option<usize> {
        self.options.iter().position(|o| o.value == self.value)
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.selected_index()
            .map(|index| self.options[index].label.as_str())
    }

    /// Replace the choices, keeping the current value when it is still offered.
    ///
    /// Otherwise the first real choice (index 1) is selected. Duplicate
    /// choices are dropped; the number dropped is returned.
    pub fn set_options(&mut self, choices: &[String], style: LabelStyle) -> usize {
        self.options.truncate(1);

        let mut seen = HashSet::new();
        let mut duplicates = 0;
        for choice in choices {
            if seen.insert(choice.as_str()) {
                self.options.push(SelectOption {
                    value: choice.clone(),
                    label: style.apply(choice),
                });
            } else {
                duplicates += 1;
            }
        }

        let keeps_value = self.options.iter().skip(1).any(|o| o.value == self.value);
        if !keeps_value {
            self.value = self
                .options
                .get(1)
                .map(|o| o.value.clone())
                .unwrap_or_default();
        }

        duplicates
    }

    pub fn set_value(&mut self, value: String) {
        self.value = value;
    }

    /// Move to the next real choice (wraps around)
    pub fn next(&mut self) -> bool {
        let count = self.options.len();
        if count <= 1 {
            return false;
        }
        let current = self.selected_index().unwrap_or(0);
        let next = if current + 1 >= count { 1 } else { current + 1 };
        self.value = self.options[next].value.clone();
        true
    }

    /// Move to the previous real choice (wraps around)
    pub fn prev(&mut self) -> bool {
        let count = self.options.len();
        if count <= 1 {
            return false;
        }
        let current = self.selected_index().unwrap_or(0);
        let prev = if current <= 1 { count - 1 } else { current - 1 };
        self.value = self.options[prev].value.clone();
        true
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Free numeric entry, kept as typed
    Number(String),
    Choice(ChoiceField),
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
    default: String,
}

impl FormField {
    /// Create a numeric field holding `default`
    pub fn number(name: &str, label: &str, default: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Number(default.to_string()),
            default: default.to_string(),
        }
    }

    /// Create a choice field with only the placeholder entry
    pub fn choice(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Choice(ChoiceField::default()),
            default: String::new(),
        }
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.value, FieldValue::Choice(_))
    }

    pub fn as_choice(&self) -> Option<&ChoiceField> {
        match &self.value {
            FieldValue::Choice(choice) => Some(choice),
            FieldValue::Number(_) => None,
        }
    }

    pub fn as_choice_mut(&mut self) -> Option<&mut ChoiceField> {
        match &mut self.value {
            FieldValue::Choice(choice) => Some(choice),
            FieldValue::Number(_) => None,
        }
    }

    /// The value submitted for this field
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Number(s) => s,
            FieldValue::Choice(choice) => choice.value(),
        }
    }

    /// Set the value as restored from storage
    pub fn set_text(&mut self, value: String) {
        match &mut self.value {
            FieldValue::Number(s) => *s = value,
            FieldValue::Choice(choice) => choice.set_value(value),
        }
    }

    /// Push a character to a numeric field. Returns whether the value changed.
    pub fn push_char(&mut self, c: char) -> bool {
        match &mut self.value {
            FieldValue::Number(s) => {
                let accepted = c.is_ascii_digit()
                    || (c == '.' && !s.contains('.'))
                    || (c == '-' && s.is_empty());
                if accepted {
                    s.push(c);
                }
                accepted
            }
            FieldValue::Choice(_) => false,
        }
    }

    /// Remove the last character from a numeric field
    pub fn pop_char(&mut self) -> bool {
        match &mut self.value {
            FieldValue::Number(s) => s.pop().is_some(),
            FieldValue::Choice(_) => false,
        }
    }

    /// Restore the default value; choice lists keep their options
    pub fn reset(&mut self) {
        let default = self.default.clone();
        self.set_text(default);
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Number(s) => s.clone(),
            FieldValue::Choice(choice) => choice
                .selected_label()
                .map(str::to_string)
                .unwrap_or_else(|| choice.value().to_string()),
        }
    }
}
