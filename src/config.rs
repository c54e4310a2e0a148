mod loader;
mod theme;

pub use loader::{ColorOverrides, Config, ConfigError};
pub use theme::Theme;
