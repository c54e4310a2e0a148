use ratatui::{
    style::{Color, Style},
    text::{Line as TextLine, Span},
};

/// Style used to highlight the row under the cursor
pub fn selection_style(bg: Color) -> Style {
    Style::default().bg(bg)
}

/// Shortens `text` to at most `width` characters, marking the cut with an
/// ellipsis.
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut truncated: String = text.chars().take(width - 1).collect();
    truncated.push('…');
    truncated
}

/// Highlights a whole line, padding it so the highlight spans `width`.
pub fn highlight_line(line: &mut TextLine<'static>, width: usize, style: Style) {
    let line_width: usize = line.spans.iter().map(|s| s.content.chars().count()).sum();
    let padding = width.saturating_sub(line_width);
    if padding > 0 {
        line.spans.push(Span::styled(" ".repeat(padding), style));
    }
    line.style = style;
}
