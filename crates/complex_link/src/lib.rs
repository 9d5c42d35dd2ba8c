mod element;
mod registry;
mod state;

pub use crate::element::*;
pub use crate::registry::*;
pub use crate::state::*;

pub fn init(cx: &mut gpui::App) {
    registry::init(cx);
}
