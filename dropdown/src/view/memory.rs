//! In-memory view, used for headless hosts and tests.

use std::collections::{BTreeMap, BTreeSet};

use crate::widget::{DropdownFrame, FrameRow};

use super::{Class, DropdownView, ListenerId, ListenerKind, Part};

/// A [`DropdownView`] that keeps element state in plain collections.
///
/// Starts with the static parts (root, search box, icon, list container).
/// Entry parts follow the last rendered frame, and the scroll indicator exists
/// while that frame is scrollable.
#[derive(Debug)]
pub struct MemoryView {
    parts: BTreeSet<Part>,
    classes: BTreeMap<Part, BTreeSet<Class>>,
    focused: Option<Part>,
    text: String,
    listeners: BTreeMap<usize, (Part, ListenerKind)>,
    next_listener: usize,
    rows: Vec<FrameRow>,
    theme: Option<String>,
    placeholder: String,
    renders: usize,
}

impl MemoryView {
    /// Create a view with the static parts in place.
    pub fn new() -> Self {
        let parts = [Part::Root, Part::SearchBox, Part::SearchIcon, Part::ListContainer]
            .into_iter()
            .collect();
        Self {
            parts,
            classes: BTreeMap::new(),
            focused: None,
            text: String::new(),
            listeners: BTreeMap::new(),
            next_listener: 0,
            rows: Vec::new(),
            theme: None,
            placeholder: String::new(),
            renders: 0,
        }
    }

    /// Remove a static part, e.g. to model a template without a list.
    pub fn without_part(mut self, part: Part) -> Self {
        self.parts.remove(&part);
        self
    }

    /// The part that has focus.
    pub fn focused(&self) -> Option<Part> {
        self.focused
    }

    /// Text currently in the search box.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Rows of the last rendered frame.
    pub fn rows(&self) -> &[FrameRow] {
        &self.rows
    }

    /// Theme of the last rendered frame.
    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    /// Placeholder of the last rendered frame.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Number of render passes seen.
    pub fn render_count(&self) -> usize {
        self.renders
    }

    /// Attached listeners as `(part, kind)` pairs, in attach order.
    pub fn listeners(&self) -> Vec<(Part, ListenerKind)> {
        self.listeners.values().copied().collect()
    }

    /// Whether a listener of the given kind is attached to a part.
    pub fn has_listener(&self, part: Part, kind: ListenerKind) -> bool {
        self.listeners.values().any(|&entry| entry == (part, kind))
    }

    /// Classes on a part, sorted.
    pub fn classes(&self, part: Part) -> Vec<Class> {
        self.classes
            .get(&part)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }
}

impl Default for MemoryView {
    fn default() -> Self {
        Self::new()
    }
}

impl DropdownView for MemoryView {
    fn has_part(&self, part: Part) -> bool {
        self.parts.contains(&part)
    }

    fn add_class(&mut self, part: Part, class: Class) {
        self.classes.entry(part).or_default().insert(class);
    }

    fn remove_class(&mut self, part: Part, class: Class) {
        if let Some(set) = self.classes.get_mut(&part) {
            set.remove(&class);
        }
    }

    fn has_class(&self, part: Part, class: Class) -> bool {
        self.classes
            .get(&part)
            .is_some_and(|set| set.contains(&class))
    }

    fn focus(&mut self, part: Part) {
        if self.parts.contains(&part) {
            self.focused = Some(part);
        } else {
            log::debug!("[memory_view] focus on missing part {}", part);
        }
    }

    fn blur(&mut self, part: Part) {
        if self.focused == Some(part) {
            self.focused = None;
        }
    }

    fn set_search_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn listen(&mut self, part: Part, kind: ListenerKind) -> ListenerId {
        let id = self.next_listener;
        self.next_listener += 1;
        self.listeners.insert(id, (part, kind));
        ListenerId(id)
    }

    fn unlisten(&mut self, id: ListenerId) {
        self.listeners.remove(&id.0);
    }

    fn render(&mut self, frame: &DropdownFrame) {
        self.renders += 1;
        self.parts.retain(|part| !matches!(part, Part::Item(_) | Part::ScrollIndicator));
        self.parts.extend((0..frame.rows.len()).map(Part::Item));
        if frame.scrollable {
            self.parts.insert(Part::ScrollIndicator);
        }
        if let Some(focused) = self.focused
            && !self.parts.contains(&focused)
        {
            self.focused = None;
        }
        self.text = frame.text.clone();
        self.rows = frame.rows.clone();
        self.theme = frame.theme.clone();
        self.placeholder = frame.placeholder.clone();
    }
}
