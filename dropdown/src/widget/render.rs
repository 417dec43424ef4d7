//! Rendering for the Dropdown widget.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::record::SourceRecord;
use super::state::Dropdown;

/// Everything a view needs to draw one pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DropdownFrame {
    /// Search-box text.
    pub text: String,
    /// Shown while `text` is empty.
    pub placeholder: String,
    pub theme: Option<String>,
    /// Visible entries, in display order.
    pub rows: Vec<FrameRow>,
    /// More rows than fit; the view should show a scroll indicator.
    pub scrollable: bool,
}

/// One visible entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameRow {
    /// Label, truncated to the configured width.
    pub label: String,
    pub value: i64,
    /// Entry matches the current selection.
    pub selected: bool,
    /// Entry has keyboard focus.
    pub focused: bool,
}

/// Truncate a label to `max_width` display columns, ending in `…` when cut.
pub fn truncate_label(label: &str, max_width: usize) -> String {
    if label.width() <= max_width {
        return label.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in label.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

impl<R: SourceRecord> Dropdown<R> {
    /// Build the frame for the current state.
    pub fn frame(&self) -> DropdownFrame {
        let truncate_to = if self.config.year_mode {
            None
        } else {
            self.config.max_label_width
        };

        let rows: Vec<FrameRow> = self
            .visible_items()
            .enumerate()
            .map(|(index, item)| FrameRow {
                label: match truncate_to {
                    Some(width) => truncate_label(&item.label, width),
                    None => item.label.clone(),
                },
                value: item.value,
                selected: !self.selected.is_sentinel() && *item == self.selected,
                focused: self.cursor == Some(index),
            })
            .collect();

        DropdownFrame {
            text: self.text.clone(),
            placeholder: self.config.placeholder.clone(),
            theme: self.config.theme.clone(),
            scrollable: rows.len() > self.config.max_visible_rows,
            rows,
        }
    }
}
