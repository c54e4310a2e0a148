use ratatui::{
    style::Style,
    text::{Line as TextLine, Span},
};

use crate::{config::Theme, model::Item, view::util::truncate};

/// Generate the view lines for an item: the name, then the detail below it.
/// An empty detail label takes no line.
///
/// The detail is cut to a single line ending in `…` rather than wrapped,
/// so a row's height never depends on the terminal width. Scrolling and
/// click mapping rely on the heights in the row table.
pub fn get_lines(item: &Item, width: usize, theme: &Theme) -> Vec<TextLine<'static>> {
    let indent = " ";
    let text_width = width.saturating_sub(indent.len());

    let mut lines = vec![TextLine::from(vec![
        Span::raw(indent),
        Span::styled(
            truncate(&item.name, text_width),
            Style::default().fg(theme.item_name),
        ),
    ])];

    if !item.detail.is_empty() {
        lines.push(TextLine::from(vec![
            Span::raw(indent),
            Span::styled(
                truncate(&item.detail, text_width),
                Style::default().fg(theme.item_detail),
            ),
        ]));
    }

    lines
}
