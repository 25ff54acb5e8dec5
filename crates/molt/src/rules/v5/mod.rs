//! PatternFly v4 -> v5 upgrade rules.

mod datalist_remove_selectable_row;
mod empty_state_rename_components;
mod table_remove_has_selectable_row_caption;

pub use datalist_remove_selectable_row::DatalistRemoveSelectableRow;
pub use empty_state_rename_components::EmptyStateRenameComponents;
pub use table_remove_has_selectable_row_caption::TableRemoveHasSelectableRowCaption;
