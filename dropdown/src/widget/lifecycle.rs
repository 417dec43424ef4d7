//! Lifecycle hooks for the Dropdown widget.
//!
//! Hosts call these in order: `after_view_init` once the view exists,
//! `after_render` after every render pass, `destroy` on teardown. Each hook is
//! idempotent.

use log::{debug, trace};

use crate::error::DropdownError;
use crate::view::{Class, DropdownView, ListenerKind, Part};

use super::record::SourceRecord;
use super::state::{Dropdown, Lifecycle};

impl<R: SourceRecord> Dropdown<R> {
    /// Wire the widget to its view.
    ///
    /// Requires the search box and list container, attaches the navigation
    /// listener to the search box and puts the icon in its collapsed state.
    pub fn after_view_init(&mut self, view: &mut dyn DropdownView) -> Result<(), DropdownError> {
        if self.lifecycle == Lifecycle::Destroyed {
            return Err(DropdownError::Destroyed(self.id().to_string()));
        }
        for part in [Part::SearchBox, Part::ListContainer] {
            if !view.has_part(part) {
                return Err(DropdownError::MissingPart(part));
            }
        }

        if self.navigation_listener.is_none() {
            self.navigation_listener = Some(view.listen(Part::SearchBox, ListenerKind::Navigation));
            view.add_class(Part::SearchIcon, Class::IconCollapsed);
            debug!("[{}] navigation listener attached", self.id());
        }
        self.lifecycle = Lifecycle::Mounted;
        Ok(())
    }

    /// Bind the scroll-indicator click guard the first time the indicator
    /// exists. Later passes return straight away.
    pub fn after_render(&mut self, view: &mut dyn DropdownView) {
        if self.lifecycle != Lifecycle::Mounted || self.scroll_listener.is_some() {
            return;
        }
        if view.has_part(Part::ScrollIndicator) {
            self.scroll_listener =
                Some(view.listen(Part::ScrollIndicator, ListenerKind::StopClickPropagation));
            debug!("[{}] scroll indicator guard attached", self.id());
        } else {
            trace!("[{}] no scroll indicator yet", self.id());
        }
    }

    /// Detach every listener the widget attached.
    pub fn destroy(&mut self, view: &mut dyn DropdownView) {
        if let Some(id) = self.navigation_listener.take() {
            view.unlisten(id);
        }
        if let Some(id) = self.scroll_listener.take() {
            view.unlisten(id);
        }
        if self.lifecycle != Lifecycle::Destroyed {
            debug!("[{}] destroyed", self.id());
        }
        self.lifecycle = Lifecycle::Destroyed;
    }
}
