//! Searchable, keyboard-navigable dropdown widget.
//!
//! The widget maps a host collection into display items, drives an
//! open/closed/searching state machine from keyboard, mouse and focus input,
//! and queues selection and touched notifications for the host to drain.
//!
//! Rendering and element access go through the [`DropdownView`] trait, so the
//! same widget runs against a terminal, a browser DOM binding or the
//! in-memory [`MemoryView`].

pub mod config;
pub mod error;
pub mod events;
pub mod host;
pub mod input;
pub mod view;
pub mod widget;

pub use config::DropdownConfig;
pub use error::{Diagnostic, DropdownError};
pub use events::{DropdownEvent, EventResult};
pub use host::{DropdownHost, HostEvent};
pub use input::{Key, KeyPress, ModifierKey, Modifiers};
pub use view::{Class, DropdownView, ListenerId, ListenerKind, MemoryView, Part};
pub use widget::{
    DisplayItem, Dropdown, DropdownFrame, DropdownId, DropdownMode, FieldNames, FieldPair,
    FrameRow, SourceRecord,
};

pub mod prelude {
    pub use crate::config::DropdownConfig;
    pub use crate::error::{Diagnostic, DropdownError};
    pub use crate::events::{DropdownEvent, EventResult};
    pub use crate::host::{DropdownHost, HostEvent};
    pub use crate::input::{Key, KeyPress, Modifiers};
    pub use crate::view::{Class, DropdownView, MemoryView, Part};
    pub use crate::widget::{DisplayItem, Dropdown, DropdownMode, SourceRecord};
}
