use ratatui::style::Color;

use crate::config::{ConfigError, ThemeConfig};

pub const ACCENT: Color = Color::Rgb(0xf5, 0xc5, 0x18);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const SEPARATOR: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

/// Colours and spacing handed to every view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
    pub separator: Color,
    pub error: Color,
    pub highlight: Color,
    /// Vertical gap between stacked regions, in rows.
    pub padding_small: u16,
    /// Horizontal inset of text blocks, in columns.
    pub padding_large: u16,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: ACCENT,
            text: TEXT,
            muted: MUTED,
            separator: SEPARATOR,
            error: STATUS_ERROR,
            highlight: ACTIVE_HIGHLIGHT,
            padding_small: 1,
            padding_large: 3,
        }
    }
}

impl Theme {
    /// Built-in theme with the overrides from `config` applied.
    pub fn from_config(config: &ThemeConfig) -> Result<Self, ConfigError> {
        let base = Theme::default();
        Ok(Self {
            accent: color_or(config.accent.as_deref(), "accent", base.accent)?,
            text: color_or(config.text.as_deref(), "text", base.text)?,
            muted: color_or(config.muted.as_deref(), "muted", base.muted)?,
            separator: color_or(config.separator.as_deref(), "separator", base.separator)?,
            error: color_or(config.error.as_deref(), "error", base.error)?,
            highlight: color_or(config.highlight.as_deref(), "highlight", base.highlight)?,
            padding_small: config.padding_small.unwrap_or(base.padding_small),
            padding_large: config.padding_large.unwrap_or(base.padding_large),
        })
    }
}

fn color_or(value: Option<&str>, key: &str, fallback: Color) -> Result<Color, ConfigError> {
    match value {
        None => Ok(fallback),
        Some(raw) => raw
            .trim()
            .parse::<Color>()
            .map_err(|_| ConfigError::ValidationError {
                message: format!("theme.{} is not a colour: '{}'", key, raw),
            }),
    }
}
