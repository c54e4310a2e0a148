use ratatui::{
    style::{Modifier, Style},
    text::{Line as TextLine, Span},
};

use crate::config::Theme;

/// Generate the view lines for a section header
pub fn get_lines(
    title: &str,
    item_count: usize,
    collapsed: bool,
    theme: &Theme,
) -> Vec<TextLine<'static>> {
    // The arrow points right when collapsed and is turned down when expanded
    let arrow = if collapsed { ">" } else { "∨" };

    let header_line = TextLine::from(vec![
        Span::styled(arrow, Style::default().fg(theme.arrow)),
        Span::styled(
            title.to_string(),
            Style::default()
                .fg(theme.section_header)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" ({})", item_count),
            Style::default().fg(theme.section_count),
        ),
    ]);

    vec![header_line]
}
