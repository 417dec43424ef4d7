//! Error and diagnostic types.

use crate::view::Part;

/// Errors raised while configuring or wiring a dropdown.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DropdownError {
    /// A field name in the config is empty.
    #[error("The {role} field name must not be empty")]
    EmptyFieldName { role: &'static str },

    /// The list must show at least one row before it scrolls.
    #[error("max_visible_rows must be at least 1")]
    NoVisibleRows,

    /// A part the widget needs was not found in the view.
    #[error("View part '{0}' not found")]
    MissingPart(Part),

    /// A lifecycle hook was called after `destroy`.
    #[error("Dropdown '{0}' was already destroyed")]
    Destroyed(String),
}

/// Non-fatal anomalies found while mapping records.
///
/// Mapping never fails: a missing field falls back to an empty label or a zero
/// value. These are logged and, when `diagnostics` is enabled in the config,
/// also queued as [`DropdownEvent::Diagnostic`](crate::DropdownEvent::Diagnostic).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    /// A record in the collection lacks a readable field.
    #[error("Field '{field}' missing or unreadable on record {position}")]
    MissingField { field: String, position: usize },

    /// The bound model lacks a readable field.
    #[error("Field '{field}' missing or unreadable on bound model")]
    MissingModelField { field: String },

    /// No record carries the value of the selected item.
    #[error("No record has value {value}")]
    NoMatch { value: i64 },
}

impl Diagnostic {
    /// Creates a missing field diagnostic for a collection record.
    pub fn missing(field: impl Into<String>, position: usize) -> Self {
        Self::MissingField {
            field: field.into(),
            position,
        }
    }

    /// Creates a missing field diagnostic for the bound model.
    pub fn missing_on_model(field: impl Into<String>) -> Self {
        Self::MissingModelField {
            field: field.into(),
        }
    }
}
