//! Dropdown configuration.

use serde::Deserialize;

use crate::error::DropdownError;
use crate::widget::FieldNames;

/// Host-supplied settings for a dropdown instance.
///
/// Every field has a default, so a config can be deserialized from a partial
/// JSON object:
///
/// ```
/// use dropdown::DropdownConfig;
///
/// let config: DropdownConfig =
///     serde_json::from_str(r#"{ "text_field": "name", "value_field": "id" }"#).unwrap();
/// assert!(config.search_enabled);
/// assert_eq!(config.max_visible_rows, 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DropdownConfig {
    /// Record field shown as the item label.
    pub text_field: String,

    /// Record field used as the item value.
    pub value_field: String,

    /// Whether typed text filters the list.
    pub search_enabled: bool,

    /// Theme identifier passed through to the view.
    pub theme: Option<String>,

    /// Year lists match typed text as a prefix instead of fuzzily,
    /// and show labels untruncated.
    pub year_mode: bool,

    /// Text shown while the search box is empty.
    pub placeholder: String,

    /// Labels longer than this (in display columns) are truncated.
    /// `None` disables truncation.
    pub max_label_width: Option<usize>,

    /// Rows shown before the list scrolls and the scroll indicator appears.
    pub max_visible_rows: usize,

    /// Queue mapping anomalies as events in addition to logging them.
    pub diagnostics: bool,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            text_field: "text".to_string(),
            value_field: "value".to_string(),
            search_enabled: true,
            theme: None,
            year_mode: false,
            placeholder: String::new(),
            max_label_width: Some(30),
            max_visible_rows: 8,
            diagnostics: false,
        }
    }
}

impl DropdownConfig {
    /// Create a config reading the given label and value fields.
    pub fn new(text_field: impl Into<String>, value_field: impl Into<String>) -> Self {
        Self {
            text_field: text_field.into(),
            value_field: value_field.into(),
            ..Default::default()
        }
    }

    /// Enable or disable search filtering.
    pub fn search_enabled(mut self, enabled: bool) -> Self {
        self.search_enabled = enabled;
        self
    }

    /// Set the theme identifier.
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// Switch to year mode.
    pub fn year_mode(mut self) -> Self {
        self.year_mode = true;
        self
    }

    /// Set the placeholder text.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the label truncation width (`None` to disable).
    pub fn max_label_width(mut self, width: Option<usize>) -> Self {
        self.max_label_width = width;
        self
    }

    /// Set how many rows fit before the list scrolls.
    pub fn max_visible_rows(mut self, rows: usize) -> Self {
        self.max_visible_rows = rows;
        self
    }

    /// Queue mapping diagnostics as events.
    pub fn diagnostics(mut self) -> Self {
        self.diagnostics = true;
        self
    }

    /// The label/value field pair used by the mapper.
    pub fn field_names(&self) -> FieldNames<'_> {
        FieldNames::new(&self.text_field, &self.value_field)
    }

    /// Check the config for values the widget cannot work with.
    pub fn validate(&self) -> Result<(), DropdownError> {
        if self.text_field.trim().is_empty() {
            return Err(DropdownError::EmptyFieldName { role: "text" });
        }
        if self.value_field.trim().is_empty() {
            return Err(DropdownError::EmptyFieldName { role: "value" });
        }
        if self.max_visible_rows == 0 {
            return Err(DropdownError::NoVisibleRows);
        }
        Ok(())
    }
}
