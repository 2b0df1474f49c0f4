mod chrome;
mod form;
mod layout;
mod overlay;

pub use chrome::draw_chrome;
pub use form::draw_form;
pub use layout::{UiLayout, split_layout};
pub use overlay::{MAX_PANEL_ROWS, draw_suggestion_panel};
