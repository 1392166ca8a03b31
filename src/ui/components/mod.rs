//! Individual UI component renderers.

mod dropdown;
mod search_box;

pub use dropdown::render_dropdown;
pub use search_box::render_search_box;
