//! Shared rendering utilities.
//!
//! Low-level helpers used across the UI components: cursor positioning and
//! fuzzy-match highlighting with proper ANSI escape sequence management.
//! Highlight ranges operate on character indices, not byte indices, so
//! multi-byte queries render correctly.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\x1b[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Renders text with highlighted character ranges for fuzzy matches.
///
/// Splits the text into highlighted and normal sections based on the provided
/// character ranges. Highlighted sections use the theme's match highlight
/// colors; normal sections inherit whatever style is active.
///
/// # Parameters
///
/// * `text` - The text to render
/// * `ranges` - Character index ranges to highlight `(start, end)` (inclusive start, exclusive end)
/// * `theme` - Active color theme for highlight colors
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end.min(chars.len())].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}
