use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line as TextLine, Span},
    widgets::Paragraph,
    Frame,
};

use crate::config::Theme;

const HINT: &str = " ? help  q quit ";

/// Render the status bar at the bottom of the screen
///
/// Layout:
/// - Left: Section under the cursor and its state
/// - Right: Row position and key hint
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    section: Option<(&str, bool)>,
    position: (usize, usize),
    theme: &Theme,
) {
    let line = status_line(area.width as usize, section, position, theme);
    frame.render_widget(Paragraph::new(line), area);
}

fn status_line(
    width: usize,
    section: Option<(&str, bool)>,
    (row, rows): (usize, usize),
    theme: &Theme,
) -> TextLine<'static> {
    let bar_style = Style::default()
        .fg(theme.status_bar_fg)
        .bg(theme.status_bar_bg);

    let section_text = match section {
        Some((name, true)) => format!(" {} (collapsed) ", name),
        Some((name, false)) => format!(" {} ", name),
        None => String::from(" "),
    };
    let right_text = format!(" {}/{} {}", row, rows, HINT);

    let used = section_text.chars().count() + right_text.chars().count();
    let padding = width.saturating_sub(used);

    TextLine::from(vec![
        Span::styled(
            section_text,
            Style::default().fg(theme.status_bar_bg).bg(theme.arrow),
        ),
        Span::styled(" ".repeat(padding), bar_style),
        Span::styled(right_text, bar_style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &TextLine) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_status_line_fills_width() {
        let line = status_line(60, Some(("Mac", false)), (1, 19), &Theme::default());
        let text = text(&line);
        assert_eq!(text.chars().count(), 60);
        assert!(text.starts_with(" Mac "));
        assert!(text.ends_with(" 1/19  ? help  q quit "));
    }

    #[test]
    fn test_status_line_shows_collapsed_state() {
        let line = status_line(60, Some(("iPad", true)), (2, 3), &Theme::default());
        assert!(text(&line).starts_with(" iPad (collapsed) "));
    }
}
