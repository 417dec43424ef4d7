//! Dropdown widget state.

use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, trace, warn};

use crate::config::DropdownConfig;
use crate::error::{Diagnostic, DropdownError};
use crate::events::DropdownEvent;
use crate::view::{Class, DropdownView, ListenerId, Part};

use super::filter::{fuzzy_filter, prefix_filter};
use super::item::DisplayItem;
use super::mapper::{map_model_to_item, map_source_to_items};
use super::record::SourceRecord;

/// Unique identifier for a Dropdown widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DropdownId(usize);

impl DropdownId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for DropdownId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__dropdown_{}", self.0)
    }
}

/// Open/closed state of the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DropdownMode {
    /// List hidden.
    #[default]
    Closed,
    /// List shown, no search text.
    Open,
    /// List shown while the search box holds text.
    Searching,
}

/// Where the widget is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(super) enum Lifecycle {
    /// Constructed, view not wired yet.
    #[default]
    Created,
    /// `after_view_init` succeeded.
    Mounted,
    /// `destroy` ran; listeners are gone.
    Destroyed,
}

/// A searchable dropdown over host records of type `R`.
///
/// The widget keeps the mapped items (one per record, same order), the
/// visible subset after search filtering, the current selection and a focus
/// cursor over the visible entries. Handlers take the host view as a
/// parameter and queue [`DropdownEvent`]s, which the host drains with
/// [`take_events`](Self::take_events).
///
/// # Example
///
/// ```
/// use dropdown::prelude::*;
/// use serde_json::json;
///
/// let mut dropdown = Dropdown::new(DropdownConfig::new("name", "id")).unwrap();
/// dropdown.set_records(vec![json!({"name": "A", "id": 1}), json!({"name": "B", "id": 2})]);
///
/// let labels: Vec<&str> = dropdown.items().iter().map(|i| i.label.as_str()).collect();
/// assert_eq!(labels, ["A", "B"]);
/// assert!(dropdown.selected().is_sentinel());
/// ```
#[derive(Debug)]
pub struct Dropdown<R> {
    /// Unique identifier for this dropdown instance
    id: DropdownId,
    pub(super) config: DropdownConfig,
    /// Host records, as last pushed
    pub(super) records: Vec<R>,
    /// Display items, 1:1 with `records`
    pub(super) items: Vec<DisplayItem>,
    /// Indices into `items` that pass the search filter, in display order
    pub(super) visible: Vec<usize>,
    pub(super) selected: DisplayItem,
    /// Text in the search box
    pub(super) text: String,
    /// Filter query; cleared on commit while `text` takes the label
    pub(super) query: String,
    pub(super) mode: DropdownMode,
    /// Visible index of the entry that has focus
    pub(super) cursor: Option<usize>,
    pub(super) navigation_listener: Option<ListenerId>,
    /// Doubles as the bind-once guard for the scroll indicator
    pub(super) scroll_listener: Option<ListenerId>,
    pub(super) lifecycle: Lifecycle,
    events: Vec<DropdownEvent<R>>,
}

impl<R: SourceRecord> Dropdown<R> {
    /// Create an empty dropdown after validating the config.
    pub fn new(config: DropdownConfig) -> Result<Self, DropdownError> {
        config.validate()?;
        let id = DropdownId::new();
        debug!(
            "[{}] created (text_field={}, value_field={})",
            id, config.text_field, config.value_field
        );
        Ok(Self {
            id,
            config,
            records: Vec::new(),
            items: Vec::new(),
            visible: Vec::new(),
            selected: DisplayItem::sentinel(),
            text: String::new(),
            query: String::new(),
            mode: DropdownMode::Closed,
            cursor: None,
            navigation_listener: None,
            scroll_listener: None,
            lifecycle: Lifecycle::Created,
            events: Vec::new(),
        })
    }

    /// Get the unique ID for this dropdown.
    pub fn id(&self) -> DropdownId {
        self.id
    }

    pub fn config(&self) -> &DropdownConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Host inputs
    // -------------------------------------------------------------------------

    /// Replace the source collection and rebuild the display items.
    pub fn set_records(&mut self, records: Vec<R>) {
        let mut diagnostics = Vec::new();
        self.items = map_source_to_items(&records, self.config.field_names(), &mut diagnostics);
        self.records = records;
        self.cursor = None;
        self.refilter();
        debug!("[{}] mapped {} records", self.id, self.items.len());
        self.report(diagnostics);
    }

    /// Sync the selection with a model bound by the host.
    ///
    /// `None` means the host pushed no model and leaves the selection alone;
    /// a model without fields selects the sentinel. Any search in progress is
    /// dropped, as on commit.
    pub fn set_model(&mut self, model: Option<&R>) {
        let Some(model) = model else {
            trace!("[{}] absent model ignored", self.id);
            return;
        };
        let mut diagnostics = Vec::new();
        self.selected = map_model_to_item(model, self.config.field_names(), &mut diagnostics);
        self.text = self.selected.label.clone();
        self.query.clear();
        self.refilter();
        if self.mode == DropdownMode::Searching {
            self.mode = DropdownMode::Open;
        }
        debug!("[{}] model selects {:?}", self.id, self.selected);
        self.report(diagnostics);
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Host records, in the order they were pushed.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// All display items, one per record.
    pub fn items(&self) -> &[DisplayItem] {
        &self.items
    }

    /// Display items passing the current search filter, in display order.
    pub fn visible_items(&self) -> impl Iterator<Item = &DisplayItem> + '_ {
        self.visible.iter().filter_map(|&index| self.items.get(index))
    }

    /// Get the number of visible entries.
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Display item at a visible index.
    pub fn visible_item(&self, index: usize) -> Option<&DisplayItem> {
        self.visible.get(index).and_then(|&i| self.items.get(i))
    }

    /// The current selection (the sentinel when nothing is selected).
    pub fn selected(&self) -> &DisplayItem {
        &self.selected
    }

    /// Text in the search box.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The active filter query.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn mode(&self) -> DropdownMode {
        self.mode
    }

    /// Check if the list is shown.
    pub fn is_open(&self) -> bool {
        self.mode != DropdownMode::Closed
    }

    /// Visible index of the focused entry.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Whether search-box keys reach the navigation handler.
    pub fn navigation_bound(&self) -> bool {
        self.navigation_listener.is_some()
    }

    /// Whether clicks on the scroll indicator are stopped.
    pub fn scroll_guard_bound(&self) -> bool {
        self.scroll_listener.is_some()
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Drain queued events, oldest first.
    pub fn take_events(&mut self) -> Vec<DropdownEvent<R>> {
        std::mem::take(&mut self.events)
    }

    pub(super) fn push_event(&mut self, event: DropdownEvent<R>) {
        self.events.push(event);
    }

    /// Log diagnostics and queue them when enabled.
    pub(super) fn report(&mut self, diagnostics: Vec<Diagnostic>) {
        for diagnostic in diagnostics {
            warn!("[{}] {}", self.id, diagnostic);
            if self.config.diagnostics {
                self.events.push(DropdownEvent::Diagnostic(diagnostic));
            }
        }
    }

    // -------------------------------------------------------------------------
    // Open/close and focus
    // -------------------------------------------------------------------------

    /// Show the list.
    pub fn open(&mut self, view: &mut dyn DropdownView) {
        if self.mode == DropdownMode::Closed {
            view.add_class(Part::Root, Class::Open);
            trace!("[{}] opened", self.id);
        }
        self.mode = if self.query.trim().is_empty() {
            DropdownMode::Open
        } else {
            DropdownMode::Searching
        };
    }

    /// Hide the list. A focused entry loses focus.
    pub fn close(&mut self, view: &mut dyn DropdownView) {
        if self.mode == DropdownMode::Closed {
            return;
        }
        if let Some(cursor) = self.cursor.take() {
            view.blur(Part::Item(cursor));
        }
        view.remove_class(Part::Root, Class::Open);
        self.mode = DropdownMode::Closed;
        trace!("[{}] closed", self.id);
    }

    /// Toggle the list open/closed.
    pub fn toggle(&mut self, view: &mut dyn DropdownView) {
        if self.is_open() {
            self.close(view);
        } else {
            self.open(view);
        }
    }

    /// Focus the entry at a visible index.
    pub(super) fn focus_entry(&mut self, index: usize, view: &mut dyn DropdownView) {
        if let Some(previous) = self.cursor
            && previous != index
        {
            view.blur(Part::Item(previous));
        }
        view.focus(Part::Item(index));
        self.cursor = Some(index);
        trace!("[{}] entry {} focused", self.id, index);
    }

    /// Recompute the visible entries from the query.
    pub(super) fn refilter(&mut self) {
        let query = self.query.trim();
        self.visible = if !self.config.search_enabled || query.is_empty() {
            (0..self.items.len()).collect()
        } else {
            let labels: Vec<String> = self.items.iter().map(|i| i.label.clone()).collect();
            let matches = if self.config.year_mode {
                prefix_filter(query, &labels)
            } else {
                fuzzy_filter(query, &labels)
            };
            matches.into_iter().map(|m| m.index).collect()
        };
        if self.cursor.is_some_and(|cursor| cursor >= self.visible.len()) {
            self.cursor = None;
        }
    }
}
