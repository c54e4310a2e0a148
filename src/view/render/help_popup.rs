use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::config::Theme;

pub const TITLE: &str = "Help";

const SECTIONS: &[(&str, &str)] = &[
    ("Tab     ", "Collapse/expand section"),
    ("Enter   ", "Collapse/expand section"),
    ("Space   ", "Collapse/expand section"),
    ("Click   ", "Select row, toggle on header"),
];

const MOVEMENT: &[(&str, &str)] = &[
    ("j/Down  ", "Move down"),
    ("k/Up    ", "Move up"),
    ("Ctrl-d  ", "Half page down"),
    ("Ctrl-u  ", "Half page up"),
    ("gg/Home ", "Go to first row"),
    ("G/End   ", "Go to last row"),
    ("?       ", "Show this help"),
    ("q       ", "Quit"),
];

/// One titled group of key bindings, drawn side by side with the others.
pub struct HelpColumn {
    pub title: &'static str,
    pub bindings: Vec<Line<'static>>,
}

impl HelpColumn {
    fn new(title: &'static str, bindings: &[(&'static str, &'static str)], theme: &Theme) -> Self {
        let key_style = Style::default()
            .fg(theme.key_hint)
            .add_modifier(Modifier::BOLD);
        let bindings = bindings
            .iter()
            .map(|(key, description)| {
                Line::from(vec![
                    Span::styled(format!("  {}", key), key_style),
                    Span::raw(*description),
                ])
            })
            .collect();
        Self { title, bindings }
    }

    /// Lines taken by the column, its title included
    pub fn height(&self) -> usize {
        self.bindings.len() + 1
    }
}

pub fn columns(theme: &Theme) -> Vec<HelpColumn> {
    vec![
        HelpColumn::new("Sections", SECTIONS, theme),
        HelpColumn::new("Movement", MOVEMENT, theme),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_columns() {
        let columns = columns(&Theme::default());
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].title, "Sections");
        // Movement column plus its title
        assert_eq!(columns[1].height(), MOVEMENT.len() + 1);
    }
}
