//! Routing of raw host events to a dropdown.
//!
//! [`DropdownHost`] pairs a widget with its view and plays the role of the
//! host's event system: it only forwards search-box keys while the navigation
//! listener is attached, applies default text editing when the widget leaves
//! a key alone, and bubbles scroll-indicator clicks to the root unless the
//! click guard is bound. Every dispatch ends with a render pass.

use log::trace;

use crate::error::DropdownError;
use crate::events::{DropdownEvent, EventResult};
use crate::input::{Key, KeyPress};
use crate::view::{DropdownView, Part};
use crate::widget::{Dropdown, SourceRecord};

/// A raw event addressed to a part of the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// Key pressed while `target` has focus.
    Key { target: Part, key: KeyPress },
    /// Search-box text replaced wholesale (paste, IME, browser input event).
    Input(String),
    /// Part gained focus.
    Focus(Part),
    /// Part lost focus.
    Blur(Part),
    /// Part clicked.
    Click(Part),
    /// Focus entered (`active`) or left the control by keyboard.
    ComponentFocus { key: KeyPress, active: bool },
}

/// A dropdown together with the view it renders into.
#[derive(Debug)]
pub struct DropdownHost<R, V> {
    dropdown: Dropdown<R>,
    view: V,
}

impl<R, V> DropdownHost<R, V>
where
    R: SourceRecord + Clone,
    V: DropdownView,
{
    pub fn new(dropdown: Dropdown<R>, view: V) -> Self {
        Self { dropdown, view }
    }

    pub fn dropdown(&self) -> &Dropdown<R> {
        &self.dropdown
    }

    /// Mutable access for host-driven changes (`set_records`, `set_model`).
    /// Call [`render`](Self::render) afterwards.
    pub fn dropdown_mut(&mut self) -> &mut Dropdown<R> {
        &mut self.dropdown
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Wire the widget to the view and draw the first frame.
    pub fn mount(&mut self) -> Result<(), DropdownError> {
        self.dropdown.after_view_init(&mut self.view)?;
        self.render();
        Ok(())
    }

    /// Detach the widget's listeners.
    pub fn unmount(&mut self) {
        self.dropdown.destroy(&mut self.view);
    }

    /// Draw the current frame, then run the post-render hook.
    pub fn render(&mut self) {
        let frame = self.dropdown.frame();
        self.view.render(&frame);
        self.dropdown.after_render(&mut self.view);
    }

    /// Drain the widget's queued events.
    pub fn take_events(&mut self) -> Vec<DropdownEvent<R>> {
        self.dropdown.take_events()
    }

    /// Route one event and re-render.
    pub fn dispatch(&mut self, event: HostEvent) -> EventResult {
        trace!("[{}] dispatch {:?}", self.dropdown.id(), event);
        let result = match event {
            HostEvent::Key { target, key } => self.dispatch_key(target, &key),
            HostEvent::Input(text) => {
                if self.dropdown.config().search_enabled {
                    self.dropdown.on_search_input(&text, &mut self.view)
                } else {
                    EventResult::Ignored
                }
            }
            HostEvent::Focus(Part::SearchBox) => {
                self.dropdown.on_search_focus(&mut self.view);
                EventResult::Consumed
            }
            HostEvent::Blur(Part::SearchBox) => {
                self.dropdown.on_search_blur(&mut self.view);
                EventResult::Consumed
            }
            HostEvent::Focus(_) | HostEvent::Blur(_) => EventResult::Ignored,
            HostEvent::Click(part) => self.dispatch_click(part),
            HostEvent::ComponentFocus { key, active } => {
                self.dropdown.set_component_focus(&key, active, &mut self.view);
                EventResult::Ignored
            }
        };
        self.render();
        result
    }

    fn dispatch_key(&mut self, target: Part, key: &KeyPress) -> EventResult {
        match target {
            Part::SearchBox => {
                let result = if self.dropdown.navigation_bound() {
                    self.dropdown.on_search_key(key, &mut self.view)
                } else {
                    EventResult::Ignored
                };
                if result.is_handled() {
                    result
                } else {
                    self.edit_text(key)
                }
            }
            Part::Item(index) => self.dropdown.on_item_key(index, key, &mut self.view),
            _ => EventResult::Ignored,
        }
    }

    /// Default action of a key the widget left alone: edit the search text.
    fn edit_text(&mut self, key: &KeyPress) -> EventResult {
        if !self.dropdown.config().search_enabled || key.is_shortcut() {
            return EventResult::Ignored;
        }
        let mut text = self.dropdown.text().to_string();
        match key.key {
            Key::Char(c) => text.push(c),
            Key::Backspace => {
                if text.pop().is_none() {
                    return EventResult::Ignored;
                }
            }
            _ => return EventResult::Ignored,
        }
        self.dropdown.on_search_input(&text, &mut self.view)
    }

    fn dispatch_click(&mut self, part: Part) -> EventResult {
        match part {
            Part::SearchIcon => {
                self.dropdown.on_icon_click(&mut self.view);
                EventResult::Consumed
            }
            Part::Item(index) => self.dropdown.on_item_click(index, &mut self.view),
            Part::ScrollIndicator if self.dropdown.scroll_guard_bound() => EventResult::Consumed,
            // Unguarded indicator clicks bubble up to the root toggle.
            Part::ScrollIndicator | Part::Root => {
                self.dropdown.toggle(&mut self.view);
                EventResult::Consumed
            }
            Part::SearchBox | Part::ListContainer => EventResult::Ignored,
        }
    }
}
