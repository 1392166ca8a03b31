//! Search input box renderer.
//!
//! Renders the bordered input with placeholder, the selected provider tag,
//! and the loading/offline indicators.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBoxViewModel;

/// Horizontal margin for the search box (spaces on left and right).
const BOX_MARGIN: usize = 2;

/// Renders the search input box at the specified row.
///
/// Displays a 3-line bordered box containing the input text (or the
/// placeholder while empty), the selected provider tag on the right, and a
/// loading indicator while a search is in flight. While disabled the whole
/// box renders in the disabled color with an "offline" tag.
///
/// # Parameters
///
/// * `row` - Starting row position for the box (1-indexed)
/// * `vm` - Widget configuration
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position (row + 3, since the box uses 3 lines)
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────────────────────┐ [margin]
/// [margin] │ query text      ⟳ [Discogs]  │ [margin]
/// [margin] └──────────────────────────────┘ [margin]
/// ```
pub fn render_search_box(row: usize, vm: &SearchBoxViewModel, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    let border_color = if vm.disabled {
        &theme.colors.disabled_fg
    } else if vm.focused {
        &theme.colors.border_focused
    } else {
        &theme.colors.border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let (text, text_color) = if vm.input.is_empty() {
        (vm.placeholder.as_str(), &theme.colors.placeholder_fg)
    } else {
        (vm.input.as_str(), &theme.colors.text_normal)
    };
    let text_color = if vm.disabled {
        &theme.colors.disabled_fg
    } else {
        text_color
    };

    let (tag, tag_color) = status_tag(vm, theme);
    let text_len = text.chars().count() + 1;
    let tag_len = tag.chars().count() + 1;
    let padding = inner_width.saturating_sub(text_len + tag_len);

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::fg(text_color));
    print!(" {text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(tag_color));
    print!("{tag} ");
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}

/// Picks the right-hand status tag and its color.
///
/// Offline beats loading beats the provider tag; only one is shown.
fn status_tag<'a>(vm: &'a SearchBoxViewModel, theme: &'a Theme) -> (String, &'a String) {
    if vm.disabled {
        return ("offline".to_string(), &theme.colors.disabled_fg);
    }
    if vm.loading {
        return ("searching…".to_string(), &theme.colors.loading_fg);
    }
    match &vm.selected_provider {
        Some(option) => (format!("[{}]", option.text), &theme.colors.provider_fg),
        None => (String::new(), &theme.colors.text_dim),
    }
}
