//! Dropdown widget - searchable select with keyboard navigation.

mod events;
mod filter;
mod item;
mod lifecycle;
mod mapper;
mod record;
mod render;
mod state;

pub use filter::{FilterMatch, fuzzy_filter, prefix_filter};
pub use item::DisplayItem;
pub use mapper::{
    FieldNames, FieldPair, map_item_to_source, map_model_to_item, map_source_to_items, read_pair,
};
pub use record::SourceRecord;
pub use render::{DropdownFrame, FrameRow, truncate_label};
pub use state::{Dropdown, DropdownId, DropdownMode};
