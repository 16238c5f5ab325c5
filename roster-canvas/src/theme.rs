//! Theme - layout metrics and semantic colors.
//!
//! Every layout and measurement call receives the theme explicitly, so two
//! scenes with different themes can coexist in one process.
//!
//! Themes are loaded from JSON. Each field is optional and falls back to the
//! selected variant's preset:
//!
//! ```json
//! { "variant": "light", "padding": 6, "foreground_color": "#202020" }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ThemeError;
use crate::primitives::Color;

/// Directory name under the platform config dir.
const CONFIG_DIR_NAME: &str = "roster";
const THEME_FILE_NAME: &str = "theme.json";

/// Preset palette a theme file starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

/// Layout metrics and colors consulted by canvas objects and widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Gap between stacked objects and between a list header and its rows.
    pub padding: f32,
    /// Base font size; text without an explicit size uses this.
    pub text_size: f32,
    /// Advance of one display cell at `text_size`.
    pub char_width: f32,
    /// Line height at `text_size`.
    pub line_height: f32,
    /// Side length of the smallest viewport a scroll container reports.
    pub scroll_min_size: f32,
    pub background_color: Color,
    pub foreground_color: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            padding: 4.0,
            text_size: 14.0,
            char_width: 8.4,
            line_height: 18.0,
            scroll_min_size: 32.0,
            background_color: Color::rgb(0.08, 0.08, 0.10),
            foreground_color: Color::rgb(0.9, 0.9, 0.9),
        }
    }

    pub fn light() -> Self {
        Self {
            background_color: Color::rgb(0.94, 0.95, 0.96),
            foreground_color: Color::rgb(0.16, 0.16, 0.18),
            ..Self::dark()
        }
    }

    pub fn for_variant(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Dark => Self::dark(),
            ThemeVariant::Light => Self::light(),
        }
    }

    /// Scale factor for text drawn at `size` relative to the base font size.
    #[inline]
    pub fn text_scale(&self, size: f32) -> f32 {
        if self.text_size > 0.0 {
            size / self.text_size
        } else {
            1.0
        }
    }

    /// Default theme file location (`<config_dir>/roster/theme.json`).
    pub fn default_path() -> Result<PathBuf, ThemeError> {
        let dir = dirs::config_dir().ok_or(ThemeError::NoConfigDir)?;
        Ok(dir.join(CONFIG_DIR_NAME).join(THEME_FILE_NAME))
    }

    /// Load the theme from the default location, or the default theme if no
    /// file exists there.
    pub fn load_default() -> Result<Self, ThemeError> {
        let path = match Self::default_path() {
            Ok(path) => path,
            Err(ThemeError::NoConfigDir) => {
                tracing::warn!("No config directory, using default theme");
                return Ok(Self::default());
            }
            Err(e) => return Err(e),
        };

        if !path.exists() {
            tracing::debug!(?path, "Theme file not found, using default theme");
            return Ok(Self::default());
        }

        Self::load(&path)
    }

    /// Load a theme from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let content = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ThemeFile = serde_json::from_str(&content).map_err(|source| ThemeError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let theme = file.into_theme()?;
        tracing::debug!(?path, "Loaded theme");
        Ok(theme)
    }

    /// Parse a theme from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        let file: ThemeFile = serde_json::from_str(json).map_err(ThemeError::Json)?;
        file.into_theme()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

// =========================================================================
// On-disk representation
// =========================================================================

/// A color in a theme file: either `"#rrggbb[aa]"` or `{ "r": .., "g": .., "b": .. }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ColorValue {
    Hex(String),
    Components(Color),
}

impl ColorValue {
    fn resolve(self, field: &'static str) -> Result<Color, ThemeError> {
        match self {
            ColorValue::Components(color) => Ok(color),
            ColorValue::Hex(value) => {
                Color::from_hex(&value).ok_or(ThemeError::InvalidColor { field, value })
            }
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
    #[serde(default)]
    variant: ThemeVariant,
    padding: Option<f32>,
    text_size: Option<f32>,
    char_width: Option<f32>,
    line_height: Option<f32>,
    scroll_min_size: Option<f32>,
    background_color: Option<ColorValue>,
    foreground_color: Option<ColorValue>,
}

impl ThemeFile {
    fn into_theme(self) -> Result<Theme, ThemeError> {
        let mut theme = Theme::for_variant(self.variant);
        if let Some(v) = self.padding {
            theme.padding = v;
        }
        if let Some(v) = self.text_size {
            theme.text_size = v;
        }
        if let Some(v) = self.char_width {
            theme.char_width = v;
        }
        if let Some(v) = self.line_height {
            theme.line_height = v;
        }
        if let Some(v) = self.scroll_min_size {
            theme.scroll_min_size = v;
        }
        if let Some(v) = self.background_color {
            theme.background_color = v.resolve("background_color")?;
        }
        if let Some(v) = self.foreground_color {
            theme.foreground_color = v.resolve("foreground_color")?;
        }
        Ok(theme)
    }
}
