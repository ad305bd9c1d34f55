// Reusable components live here.

pub mod footer;
pub mod header;
pub mod icons;
pub mod scroll_to_top_button;
pub mod theme_toggle;
