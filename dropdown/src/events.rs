//! Events emitted to the host and results of handling input.
//!
//! Handlers push [`DropdownEvent`]s onto the widget's queue; the host drains
//! them with `Dropdown::take_events` after each interaction.

use crate::error::Diagnostic;

/// A notification for the host form.
#[derive(Debug, Clone, PartialEq)]
pub enum DropdownEvent<R> {
    /// An entry was committed. Carries the backing record, or `None` when no
    /// record has the entry's value.
    Selection(Option<R>),
    /// The control's touched state changed. `true` means the search box was
    /// left or made empty.
    Touched(bool),
    /// A mapping anomaly, only queued when diagnostics are enabled.
    Diagnostic(Diagnostic),
}

/// Result of handling an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored; the host's default action applies.
    Ignored,
    /// Event was handled; the host must not apply its default action.
    Consumed,
    /// Nothing changed, but the host must not apply its default action
    /// either (e.g. arrow key at the end of the list).
    Suppressed,
}

impl EventResult {
    /// Check if the event was handled (consumed or suppressed). A handled
    /// event must not trigger the host's default action.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}
