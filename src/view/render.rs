use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line as TextLine, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::{config::Theme, model::popup::PopupContent};

mod help_popup;

/// Calculate a rectangle in the bottom half of the screen, centered horizontally
fn bottom_half_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + area.height.saturating_sub(height);
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Render a modal popup overlay along the bottom of `area`
pub fn render_popup(popup: &PopupContent, frame: &mut Frame, area: Rect, theme: &Theme) {
    let (title, columns) = match popup {
        PopupContent::Help => (help_popup::TITLE, help_popup::columns(theme)),
    };

    let column_title_style = Style::default()
        .fg(theme.section_header)
        .add_modifier(Modifier::BOLD);

    let content_height = columns.iter().map(|c| c.height()).max().unwrap_or(0);
    let popup_height = (content_height + 2) as u16; // +2 for border
    let popup_area = bottom_half_rect(area.width, popup_height, area);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let popup_block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.popup_border));
    let inner_area = popup_block.inner(popup_area);
    frame.render_widget(popup_block, popup_area);

    let column_count = columns.len() as u32;
    let column_areas = Layout::horizontal(
        (0..column_count).map(|_| Constraint::Ratio(1, column_count)),
    )
    .split(inner_area);

    for (column, column_area) in columns.into_iter().zip(column_areas.iter()) {
        let mut lines = vec![TextLine::from(Span::styled(column.title, column_title_style))];
        lines.extend(column.bindings);
        let paragraph = Paragraph::new(lines).style(Style::default().fg(theme.text));
        frame.render_widget(paragraph, *column_area);
    }
}
