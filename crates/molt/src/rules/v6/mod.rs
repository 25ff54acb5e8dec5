//! PatternFly v5 -> v6 upgrade rules.

mod page_section_remove_nav_type;

pub use page_section_remove_nav_type::PageSectionRemoveNavType;
