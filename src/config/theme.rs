use ratatui::style::Color;

/// Represents all semantic color roles in the application
#[derive(Debug, Clone)]
pub struct Theme {
    // Section header colors
    pub section_header: Color,
    pub section_count: Color,
    pub arrow: Color,

    // Row colors
    pub item_name: Color,
    pub item_detail: Color,

    // Popups
    pub key_hint: Color,
    pub popup_border: Color,

    // Status bar
    pub status_bar_fg: Color,
    pub status_bar_bg: Color,

    // Misc
    pub text: Color,

    // Selection
    pub selection_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    /// The default theme using the terminal's base palette
    pub fn default_theme() -> Self {
        Self {
            section_header: Color::Yellow,
            section_count: Color::DarkGray,
            arrow: Color::Yellow,
            item_name: Color::Reset,
            item_detail: Color::DarkGray,
            key_hint: Color::Blue,
            popup_border: Color::Blue,
            status_bar_fg: Color::White,
            status_bar_bg: Color::Rgb(40, 40, 50),
            text: Color::Reset,
            selection_bg: Color::Rgb(60, 60, 80),
        }
    }

    /// Catppuccin Frappe theme
    pub fn catppuccin_frappe() -> Self {
        Self {
            section_header: Color::Rgb(229, 200, 144), // Yellow
            section_count: Color::Rgb(131, 139, 167),  // Overlay1
            arrow: Color::Rgb(239, 159, 118),          // Peach
            item_name: Color::Rgb(198, 208, 245),      // Text
            item_detail: Color::Rgb(165, 173, 206),    // Subtext0
            key_hint: Color::Rgb(140, 170, 238),       // Blue
            popup_border: Color::Rgb(140, 170, 238),   // Blue
            status_bar_fg: Color::Rgb(198, 208, 245),  // Text
            status_bar_bg: Color::Rgb(41, 44, 60),     // Mantle
            text: Color::Rgb(198, 208, 245),           // Text
            selection_bg: Color::Rgb(65, 69, 89),      // Surface0
        }
    }

    /// Catppuccin Mocha theme
    pub fn catppuccin_mocha() -> Self {
        Self {
            section_header: Color::Rgb(249, 226, 175), // Yellow
            section_count: Color::Rgb(127, 132, 156),  // Overlay1
            arrow: Color::Rgb(250, 179, 135),          // Peach
            item_name: Color::Rgb(205, 214, 244),      // Text
            item_detail: Color::Rgb(166, 173, 200),    // Subtext0
            key_hint: Color::Rgb(137, 180, 250),       // Blue
            popup_border: Color::Rgb(137, 180, 250),   // Blue
            status_bar_fg: Color::Rgb(205, 214, 244),  // Text
            status_bar_bg: Color::Rgb(24, 24, 37),     // Mantle
            text: Color::Rgb(205, 214, 244),           // Text
            selection_bg: Color::Rgb(49, 50, 68),      // Surface0
        }
    }

    /// Get a built-in theme by name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().replace('_', "-").as_str() {
            "default" => Some(Self::default_theme()),
            "catppuccin-frappe" => Some(Self::catppuccin_frappe()),
            "catppuccin-mocha" => Some(Self::catppuccin_mocha()),
            _ => None,
        }
    }
}
