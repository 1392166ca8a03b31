//! Top-level render orchestration.
//!
//! Computes the view model from application state and lays out the
//! components: the search box at the top, the dropdown underneath while the
//! widget is focused and enabled.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::viewmodel::SearchBoxViewModel;

/// Row where the search box starts, leaving one blank line at the top.
const TOP_ROW: usize = 2;

/// Renders the full search UI for the current state.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let vm = state.compute_viewmodel();
    render_viewmodel(&vm, state, rows, cols);
}

fn render_viewmodel(vm: &SearchBoxViewModel, state: &AppState, rows: usize, cols: usize) {
    let next_row = components::render_search_box(TOP_ROW, vm, &state.theme, cols);

    if vm.focused && !vm.disabled {
        let available = rows.saturating_sub(next_row);
        components::render_dropdown(next_row + 1, vm, &state.theme, cols, available);
    }
}
