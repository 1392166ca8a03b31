//! UI rendering layer.
//!
//! Split into a pure view-model derivation (`viewmodel`), terminal output
//! (`renderer`, `components`, `helpers`), and theming (`theme`).

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::{Theme, ThemeColors};
pub use viewmodel::{DropdownLabels, HistoryItem, SearchBoxViewModel};
