//! UI Components
//!
//! Reusable GTK4 widgets for the birthday manager.

mod birthday_list;
mod form_panel;
mod search_bar;
mod status_overlay;

pub use birthday_list::BirthdayList;
pub use form_panel::FormPanel;
pub use search_bar::SearchBar;
pub use status_overlay::StatusOverlay;
