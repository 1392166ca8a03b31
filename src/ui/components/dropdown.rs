//! Dropdown renderer.
//!
//! Renders the panel below the search box: the last-searches list with fuzzy
//! match highlights and relative ages, the provider options row, and the
//! footer hint.

use crate::ui::helpers::{position_cursor, render_highlighted_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{HistoryItem, SearchBoxViewModel};

/// Left indent for dropdown content, aligned with the search box interior.
const INDENT: usize = 3;

/// Renders the dropdown panel starting at the specified row.
///
/// Sections appear in order: the history heading with the clear-history
/// hint, one row per history item, the provider options row, and the footer.
/// Sections without content are skipped entirely. History rows beyond
/// `max_rows` are dropped rather than scrolled.
///
/// # Parameters
///
/// * `row` - Starting row position (1-indexed)
/// * `vm` - Widget configuration
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
/// * `max_rows` - Rows available below the search box
///
/// # Returns
///
/// The next available row position after the dropdown.
pub fn render_dropdown(
    row: usize,
    vm: &SearchBoxViewModel,
    theme: &Theme,
    cols: usize,
    max_rows: usize,
) -> usize {
    let mut row = row;
    let mut remaining = max_rows;

    // Reserve rows for the fixed sections so a short terminal drops history
    // entries first.
    let fixed_rows = usize::from(!vm.history.is_empty())
        + usize::from(!vm.provider_options.is_empty())
        + usize::from(!vm.labels.footer.is_empty());

    if !vm.history.is_empty() && remaining > fixed_rows {
        position_cursor(row, 1);
        print!("{}", " ".repeat(INDENT));
        print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.label_fg));
        print!("{}", vm.labels.last_searches);
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("  ({}: Ctrl+L)", vm.labels.clear_history);
        print!("{}", Theme::reset());
        row += 1;
        remaining -= 1;

        let visible = remaining.saturating_sub(fixed_rows.saturating_sub(1));
        for item in vm.history.iter().take(visible) {
            row = render_history_item(row, item, theme, cols);
            remaining -= 1;
        }
    }

    if !vm.provider_options.is_empty() && remaining > 0 {
        position_cursor(row, 1);
        print!("{}", " ".repeat(INDENT));
        for option in &vm.provider_options {
            let selected = vm
                .selected_provider
                .as_ref()
                .is_some_and(|s| s.key == option.key);
            if selected {
                print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.provider_fg));
                print!("[{}]", option.text);
            } else {
                print!("{}", Theme::fg(&theme.colors.text_dim));
                print!(" {} ", option.text);
            }
            print!("{}", Theme::reset());
            print!(" ");
        }
        row += 1;
        remaining -= 1;
    }

    if !vm.labels.footer.is_empty() && remaining > 0 {
        position_cursor(row, 1);
        print!("{}", " ".repeat(INDENT));
        print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
        print!("{}", vm.labels.footer);
        print!("{}", Theme::reset());
        row += 1;
    }

    row
}

/// Renders one history row: highlighted query on the left, age on the right.
fn render_history_item(row: usize, item: &HistoryItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", " ".repeat(INDENT));
    print!("{}", Theme::fg(&theme.colors.text_normal));
    render_highlighted_text(&item.query, &item.highlight_ranges, theme);

    let used = INDENT + item.query.chars().count();
    let age_col = cols.saturating_sub(item.age.chars().count() + INDENT);
    if age_col > used + 1 {
        position_cursor(row, age_col);
        print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
        print!("{}", item.age);
    }
    print!("{}", Theme::reset());

    row + 1
}
