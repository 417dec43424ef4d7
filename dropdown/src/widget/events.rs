//! Event handling for the Dropdown widget.

use log::{debug, trace};

use crate::error::Diagnostic;
use crate::events::{DropdownEvent, EventResult};
use crate::input::{Key, KeyPress};
use crate::view::{Class, DropdownView, Part};

use super::mapper::map_item_to_source;
use super::record::SourceRecord;
use super::state::{Dropdown, DropdownMode};

impl<R: SourceRecord + Clone> Dropdown<R> {
    // -------------------------------------------------------------------------
    // Search box
    // -------------------------------------------------------------------------

    /// Handle a key press on the search box.
    ///
    /// Down and Tab move focus into the list (opening it if needed); Space
    /// does the same while closed. Everything else, modifier-only presses
    /// included, is left to the host.
    pub fn on_search_key(&mut self, key: &KeyPress, view: &mut dyn DropdownView) -> EventResult {
        if key.is_modifier_only() || key.is_shortcut() {
            return EventResult::Ignored;
        }

        match key.key {
            Key::Down => self.enter_list(view),
            Key::Tab if !key.modifiers.shift => self.enter_list(view),
            Key::Char(' ') if !self.is_open() => self.enter_list(view),
            _ => EventResult::Ignored,
        }
    }

    /// Open the list and focus its first entry.
    fn enter_list(&mut self, view: &mut dyn DropdownView) -> EventResult {
        if self.visible.is_empty() {
            return EventResult::Ignored;
        }
        self.open(view);
        self.focus_entry(0, view);
        self.push_event(DropdownEvent::Touched(false));
        EventResult::Consumed
    }

    /// Handle new search-box text.
    ///
    /// Non-blank text opens the list and filters it. Blank text closes it;
    /// emptying a box that held text also runs the emptiness check.
    pub fn on_search_input(&mut self, text: &str, view: &mut dyn DropdownView) -> EventResult {
        let was_empty = self.text.is_empty();
        self.text = text.to_string();
        self.query = text.to_string();
        self.refilter();
        if text.trim().is_empty() {
            self.close(view);
            if !was_empty {
                self.check_if_selection_is_empty(view);
            }
        } else {
            self.open(view);
        }
        trace!("[{}] input {:?} -> {:?}", self.id(), text, self.mode);
        EventResult::Consumed
    }

    /// Search box gained focus: show the search icon. No entry keeps focus.
    pub fn on_search_focus(&mut self, view: &mut dyn DropdownView) {
        self.cursor = None;
        view.remove_class(Part::SearchIcon, Class::IconCollapsed);
        view.add_class(Part::SearchIcon, Class::IconSearch);
    }

    /// Search box lost focus: show the collapsed icon, then check for an
    /// empty selection.
    pub fn on_search_blur(&mut self, view: &mut dyn DropdownView) {
        view.remove_class(Part::SearchIcon, Class::IconSearch);
        view.add_class(Part::SearchIcon, Class::IconCollapsed);
        self.check_if_selection_is_empty(view);
    }

    /// Icon clicked: hand focus back to the search box.
    pub fn on_icon_click(&mut self, view: &mut dyn DropdownView) {
        view.focus(Part::SearchBox);
    }

    /// Mark the control active when Tab moves focus into it, inactive when
    /// Tab moves focus out. Other keys are ignored.
    pub fn set_component_focus(&mut self, key: &KeyPress, active: bool, view: &mut dyn DropdownView) {
        if !matches!(key.key, Key::Tab | Key::BackTab) {
            return;
        }
        if active {
            view.add_class(Part::SearchBox, Class::Active);
        } else {
            view.remove_class(Part::SearchBox, Class::Active);
        }
    }

    /// An empty search box drops the active highlight and reports the
    /// control as touched.
    fn check_if_selection_is_empty(&mut self, view: &mut dyn DropdownView) {
        if !self.text.is_empty() {
            return;
        }
        if view.has_class(Part::SearchBox, Class::Active) {
            view.remove_class(Part::SearchBox, Class::Active);
        }
        self.push_event(DropdownEvent::Touched(true));
    }

    // -------------------------------------------------------------------------
    // List entries
    // -------------------------------------------------------------------------

    /// Handle a key press on the entry at a visible index.
    ///
    /// Arrows and Tab move between entries without wrapping; at either end the
    /// key is suppressed and focus stays put. Enter commits the entry and
    /// closes the list, Escape closes it and returns focus to the search box.
    /// Any other key is suppressed, except modifier-only presses which are
    /// ignored outright.
    pub fn on_item_key(
        &mut self,
        index: usize,
        key: &KeyPress,
        view: &mut dyn DropdownView,
    ) -> EventResult {
        if key.is_modifier_only() || index >= self.visible.len() {
            return EventResult::Ignored;
        }
        self.cursor = Some(index);

        match key.key {
            Key::Up => self.step_back(index, view),
            Key::Down => {
                let result = self.step_forward(index, view);
                self.push_event(DropdownEvent::Touched(false));
                result
            }
            Key::Tab if key.modifiers.shift => self.step_back(index, view),
            Key::Tab => self.step_forward(index, view),
            Key::BackTab => self.step_back(index, view),
            Key::Enter => {
                self.commit(index, view);
                self.close(view);
                EventResult::Consumed
            }
            Key::Escape => {
                self.close(view);
                view.focus(Part::SearchBox);
                EventResult::Consumed
            }
            _ => EventResult::Suppressed,
        }
    }

    /// Handle a click on the entry at a visible index.
    pub fn on_item_click(&mut self, index: usize, view: &mut dyn DropdownView) -> EventResult {
        if index >= self.visible.len() {
            return EventResult::Ignored;
        }
        self.commit(index, view);
        self.close(view);
        EventResult::Consumed
    }

    fn step_back(&mut self, index: usize, view: &mut dyn DropdownView) -> EventResult {
        if index == 0 {
            return EventResult::Suppressed;
        }
        self.focus_entry(index - 1, view);
        EventResult::Consumed
    }

    fn step_forward(&mut self, index: usize, view: &mut dyn DropdownView) -> EventResult {
        if index + 1 >= self.visible.len() {
            return EventResult::Suppressed;
        }
        self.focus_entry(index + 1, view);
        EventResult::Consumed
    }

    /// Commit the entry at a visible index as the selection.
    ///
    /// Clears the query, blurs the entry, resolves the backing record, writes
    /// the label into the search box, then queues `Selection` followed by
    /// `Touched(false)`.
    fn commit(&mut self, index: usize, view: &mut dyn DropdownView) {
        let Some(&item_index) = self.visible.get(index) else {
            return;
        };
        let Some(item) = self.items.get(item_index).cloned() else {
            return;
        };
        let fields = self.config.field_names();
        let value_read = self
            .records
            .get(item_index)
            .is_some_and(|record| record.number(fields.value_field).is_some());

        self.query.clear();
        view.blur(Part::Item(index));
        self.cursor = None;
        self.selected = item;

        // An entry whose value fell back to 0 has no record to resolve to.
        let mut diagnostics = Vec::new();
        let record = if value_read {
            map_item_to_source(&self.selected, &self.records, fields, &mut diagnostics).cloned()
        } else {
            diagnostics.push(Diagnostic::NoMatch {
                value: self.selected.value,
            });
            None
        };
        self.report(diagnostics);

        self.text = self.selected.label.clone();
        view.set_search_text(&self.text);
        self.refilter();
        if self.mode == DropdownMode::Searching {
            self.mode = DropdownMode::Open;
        }

        debug!(
            "[{}] committed {:?} (record found: {})",
            self.id(),
            self.selected,
            record.is_some()
        );
        self.push_event(DropdownEvent::Selection(record));
        self.push_event(DropdownEvent::Touched(false));
    }
}
