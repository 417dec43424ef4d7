//! Normalized display items.

/// One selectable entry as shown in the list.
///
/// Built from a source record's label and value fields each time the
/// collection changes; never edited afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DisplayItem {
    pub label: String,
    pub value: i64,
}

impl DisplayItem {
    pub fn new(label: impl Into<String>, value: i64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// The empty selection used when no model is bound.
    pub fn sentinel() -> Self {
        Self::default()
    }

    /// Whether this is the empty selection.
    pub fn is_sentinel(&self) -> bool {
        self.label.is_empty() && self.value == 0
    }
}
