use std::path::{Path, PathBuf};

use ratatui::style::Color;
use serde::Deserialize;
use tracing::{info, warn};

use super::theme::Theme;

/// Parse a color string into a ratatui Color.
///
/// Accepts whatever ratatui itself parses (named colors, `#rrggbb`, ANSI
/// index) plus the short `#rgb` and `rgb(r, g, b)` forms.
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim().to_lowercase();

    if let Some(hex) = s.strip_prefix('#').filter(|hex| hex.len() == 3 && hex.is_ascii()) {
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|c| c * 17);
        return Some(Color::Rgb(channel(0)?, channel(1)?, channel(2)?));
    }

    if let Some(inner) = s.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
        let channels = inner
            .split(',')
            .map(|part| part.trim().parse::<u8>().ok())
            .collect::<Option<Vec<_>>>()?;
        return match channels[..] {
            [r, g, b] => Some(Color::Rgb(r, g, b)),
            _ => None,
        };
    }

    s.parse().ok()
}

/// Color overrides in the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ColorOverrides {
    pub section_header: Option<String>,
    pub section_count: Option<String>,
    pub arrow: Option<String>,
    pub item_name: Option<String>,
    pub item_detail: Option<String>,
    pub key_hint: Option<String>,
    pub popup_border: Option<String>,
    pub status_bar_fg: Option<String>,
    pub status_bar_bg: Option<String>,
    pub text: Option<String>,
    pub selection_bg: Option<String>,
}

/// Main config structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme_name")]
    pub theme: String,

    #[serde(default)]
    pub colors: ColorOverrides,
}

fn default_theme_name() -> String {
    "default".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            colors: ColorOverrides::default(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sectioned").join("config.toml"))
    }

    /// Load config from `path` when one is given on the command line;
    /// errors there are reported. Otherwise the default path is tried and
    /// anything wrong with it falls back to the default config.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::load_from_path(path);
        }

        let Some(path) = Self::default_path().filter(|p| p.exists()) else {
            return Ok(Self::default());
        };
        match Self::load_from_path(&path) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring invalid config file");
                Ok(Self::default())
            }
        }
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;
        let config: Self =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        info!(path = %path.display(), theme = %config.theme, "loaded config");
        Ok(config)
    }

    /// Resolve the theme with overrides applied
    pub fn resolve_theme(&self) -> Theme {
        let mut theme = Theme::from_name(&self.theme).unwrap_or_else(|| {
            warn!(theme = %self.theme, "unknown theme, using default");
            Theme::default_theme()
        });

        macro_rules! apply_override {
            ($($field:ident),+ $(,)?) => {
                $(
                    if let Some(color) = self.colors.$field.as_deref().and_then(parse_color) {
                        theme.$field = color;
                    }
                )+
            };
        }

        apply_override!(
            section_header,
            section_count,
            arrow,
            item_name,
            item_detail,
            key_hint,
            popup_border,
            status_bar_fg,
            status_bar_bg,
            text,
            selection_bg,
        );

        theme
    }
}

#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}
