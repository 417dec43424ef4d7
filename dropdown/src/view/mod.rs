//! The host view seam.
//!
//! A dropdown owns a small subtree of host elements: the search box with its
//! trailing icon, the list container with one entry per visible item, and an
//! optional scroll indicator. The widget never touches elements directly; it
//! addresses them as [`Part`]s through a [`DropdownView`].

mod memory;

use std::fmt;

use crate::widget::DropdownFrame;

pub use memory::MemoryView;

/// A named element of the dropdown's view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Part {
    /// The outer element; carries the `open` class.
    Root,
    /// The text input.
    SearchBox,
    /// The icon after the search box.
    SearchIcon,
    /// The element holding the entries.
    ListContainer,
    /// The entry at a visible (rendered) index.
    Item(usize),
    /// The scrollbar thumb of the list, present only when the list scrolls.
    ScrollIndicator,
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::Root => write!(f, "root"),
            Part::SearchBox => write!(f, "search-box"),
            Part::SearchIcon => write!(f, "search-icon"),
            Part::ListContainer => write!(f, "list-container"),
            Part::Item(index) => write!(f, "item-{}", index),
            Part::ScrollIndicator => write!(f, "scroll-indicator"),
        }
    }
}

/// Visual state classes toggled on parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Class {
    /// The list is shown (on [`Part::Root`]).
    Open,
    /// The control was entered with Tab (on [`Part::SearchBox`]).
    Active,
    /// Icon shows a magnifier while the search box has focus.
    IconSearch,
    /// Icon shows a chevron while the search box is blurred.
    IconCollapsed,
}

impl Class {
    /// The class name as used by stylesheet-driven views.
    pub fn as_str(&self) -> &'static str {
        match self {
            Class::Open => "open",
            Class::Active => "active",
            Class::IconSearch => "icon-search",
            Class::IconCollapsed => "icon-collapsed",
        }
    }
}

/// Listeners the widget attaches to parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Routes search-box key presses to the navigation handler.
    Navigation,
    /// Stops clicks from bubbling past the part.
    StopClickPropagation,
}

/// Handle returned by [`DropdownView::listen`], used to detach the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub usize);

/// Element access for one dropdown instance.
pub trait DropdownView {
    /// Whether the part currently exists in the view.
    fn has_part(&self, part: Part) -> bool;

    /// Add a class to a part. No-op if already present.
    fn add_class(&mut self, part: Part, class: Class);

    /// Remove a class from a part. No-op if absent.
    fn remove_class(&mut self, part: Part, class: Class);

    /// Whether a part carries a class.
    fn has_class(&self, part: Part, class: Class) -> bool;

    /// Move input focus to a part.
    fn focus(&mut self, part: Part);

    /// Remove input focus from a part if it has it.
    fn blur(&mut self, part: Part);

    /// Replace the text shown in the search box.
    fn set_search_text(&mut self, text: &str);

    /// Attach a listener to a part.
    fn listen(&mut self, part: Part, kind: ListenerKind) -> ListenerId;

    /// Detach a listener. Unknown ids are ignored.
    fn unlisten(&mut self, id: ListenerId);

    /// Draw a frame. Called on every render pass.
    fn render(&mut self, frame: &DropdownFrame);
}
