//! Form field value objects

use super::validation::is_valid_email;
use crate::state::{Bilingual, Locale, WizardStep};

/// A selectable option for choice fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    /// Value sent with the lead
    pub value: &'static str,
    pub label: Bilingual,
}

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Choice {
        options: &'static [ChoiceOption],
        selected: Option<usize>,
    },
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// What a field needs before its step counts as valid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Optional,
    /// Non-empty text, a checked flag, or a selected option
    Required,
    /// Non-empty and matching the email pattern
    Email,
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: &'static str,
    pub label: Bilingual,
    pub value: FieldValue,
    pub requirement: Requirement,
    pub step: WizardStep,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &'static str, label: Bilingual, requirement: Requirement) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Text(String::new()),
            requirement,
            step: WizardStep::One,
            is_multiline: false,
        }
    }

    /// Create a new multiline text field
    pub fn multiline(name: &'static str, label: Bilingual, requirement: Requirement) -> Self {
        Self {
            is_multiline: true,
            ..Self::text(name, label, requirement)
        }
    }

    /// Create a new checkbox field
    pub fn flag(name: &'static str, label: Bilingual, requirement: Requirement) -> Self {
        Self {
            value: FieldValue::Flag(false),
            ..Self::text(name, label, requirement)
        }
    }

    /// Create a new choice field with nothing selected
    pub fn choice(
        name: &'static str,
        label: Bilingual,
        options: &'static [ChoiceOption],
        requirement: Requirement,
    ) -> Self {
        Self {
            value: FieldValue::Choice {
                options,
                selected: None,
            },
            ..Self::text(name, label, requirement)
        }
    }

    /// Place the field on a wizard step
    pub fn on_step(mut self, step: WizardStep) -> Self {
        self.step = step;
        self
    }

    /// Get the text value (returns empty string for non-text fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            _ => "",
        }
    }

    /// Get the flag value (returns false for non-flag fields)
    pub fn as_flag(&self) -> bool {
        match &self.value {
            FieldValue::Flag(b) => *b,
            _ => false,
        }
    }

    /// Get the selected option, if any
    pub fn selected_option(&self) -> Option<&ChoiceOption> {
        match &self.value {
            FieldValue::Choice { options, selected } => selected.and_then(|i| options.get(i)),
            _ => None,
        }
    }

    /// Set the text value
    pub fn set_text(&mut self, value: impl Into<String>) {
        if let FieldValue::Text(s) = &mut self.value {
            *s = value.into();
        }
    }

    /// Set the flag value
    pub fn set_flag(&mut self, value: bool) {
        if let FieldValue::Flag(b) = &mut self.value {
            *b = value;
        }
    }

    /// Select an option by its value; unknown values are ignored
    #[cfg(test)]
    pub fn select(&mut self, value: &str) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            if let Some(i) = options.iter().position(|o| o.value == value) {
                *selected = Some(i);
            }
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => {
                if c != '\n' || self.is_multiline {
                    s.push(c);
                }
            }
            FieldValue::Flag(b) => {
                if c == ' ' {
                    *b = !*b;
                }
            }
            FieldValue::Choice { .. } => {
                if c == ' ' {
                    self.cycle(true);
                }
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Choice { selected, .. } => *selected = None,
            FieldValue::Flag(_) => {}
        }
    }

    /// Move a choice field to the next/previous option (wraps around)
    pub fn cycle(&mut self, forward: bool) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            let count = options.len();
            if count == 0 {
                return;
            }
            *selected = Some(match (*selected, forward) {
                (None, true) => 0,
                (None, false) => count - 1,
                (Some(i), true) => (i + 1) % count,
                (Some(0), false) => count - 1,
                (Some(i), false) => i - 1,
            });
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Flag(b) => *b = false,
            FieldValue::Choice { selected, .. } => *selected = None,
        }
    }

    /// Whether the current value meets the field's requirement
    pub fn is_satisfied(&self) -> bool {
        match self.requirement {
            Requirement::Optional => true,
            Requirement::Required => match &self.value {
                FieldValue::Text(s) => !s.is_empty(),
                FieldValue::Flag(b) => *b,
                FieldValue::Choice { selected, .. } => selected.is_some(),
            },
            Requirement::Email => is_valid_email(self.as_text()),
        }
    }

    /// Label with a required marker
    pub fn display_label(&self, locale: Locale) -> String {
        match self.requirement {
            Requirement::Optional => self.label.get(locale).to_string(),
            _ => format!("{} *", self.label.get(locale)),
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self, locale: Locale) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Flag(true) => "[x]".to_string(),
            FieldValue::Flag(false) => "[ ]".to_string(),
            FieldValue::Choice { options, selected } => selected
                .and_then(|i| options.get(i))
                .map(|o| format!("◂ {} ▸", o.label.get(locale)))
                .unwrap_or_default(),
        }
    }

    /// Value as it is sent with the lead
    pub fn to_json(&self) -> serde_json::Value {
        match &self.value {
            FieldValue::Text(s) => serde_json::Value::String(s.clone()),
            FieldValue::Flag(b) => serde_json::Value::Bool(*b),
            FieldValue::Choice { .. } => self
                .selected_option()
                .map(|o| serde_json::Value::String(o.value.to_string()))
                .unwrap_or_else(|| serde_json::Value::String(String::new())),
        }
    }
}
