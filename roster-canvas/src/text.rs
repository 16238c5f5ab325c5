//! Text - a single run of styled text.
//!
//! Text is measured with fixed per-cell metrics from the theme rather than by
//! shaping, the same approximation the layout pass uses everywhere.

use unicode_width::UnicodeWidthChar;

use crate::batch::PrimitiveBatch;
use crate::canvas::CanvasObject;
use crate::primitives::{Color, Point, Size};
use crate::theme::Theme;

/// Estimate display width in cell units (1 for Latin, 2 for CJK, 0 for combining marks).
pub fn unicode_display_width(text: &str) -> f32 {
    text.chars()
        .map(|c| UnicodeWidthChar::width(c).unwrap_or(0) as f32)
        .sum()
}

/// Measure a single line of text at `font_size` under `theme` metrics.
pub fn measure_text(text: &str, font_size: f32, theme: &Theme) -> Size {
    let scale = theme.text_scale(font_size);
    Size::new(
        unicode_display_width(text) * theme.char_width * scale,
        theme.line_height * scale,
    )
}

/// Horizontal placement of text within its allocated width.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Leading,
    Trailing,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
}

/// A text leaf object.
#[derive(Debug, Clone)]
pub struct Text {
    pub text: String,
    pub color: Color,
    pub style: TextStyle,
    pub alignment: TextAlign,
    /// Font size override; `None` uses the theme's base size.
    pub text_size: Option<f32>,
    position: Point,
    size: Size,
}

impl Text {
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
            style: TextStyle::default(),
            alignment: TextAlign::default(),
            text_size: None,
            position: Point::ORIGIN,
            size: Size::ZERO,
        }
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_alignment(mut self, alignment: TextAlign) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.text_size = Some(size);
        self
    }

    fn font_size(&self, theme: &Theme) -> f32 {
        self.text_size.unwrap_or(theme.text_size)
    }

    /// Horizontal offset of the run within the allocated width.
    fn align_offset(&self, text_width: f32) -> f32 {
        match self.alignment {
            TextAlign::Leading => 0.0,
            TextAlign::Trailing => (self.size.width - text_width).max(0.0),
        }
    }
}

impl CanvasObject for Text {
    fn min_size(&self, theme: &Theme) -> Size {
        measure_text(&self.text, self.font_size(theme), theme)
    }

    fn position(&self) -> Point {
        self.position
    }

    fn size(&self) -> Size {
        self.size
    }

    fn move_to(&mut self, position: Point) {
        self.position = position;
    }

    fn resize(&mut self, size: Size, _theme: &Theme) {
        self.size = size;
    }

    fn paint(&self, batch: &mut PrimitiveBatch, origin: Point, theme: &Theme) {
        if self.text.trim().is_empty() || self.color.is_transparent() {
            return;
        }
        let font_size = self.font_size(theme);
        let text_width = self.min_size(theme).width;
        let at = origin + self.position + Point::new(self.align_offset(text_width), 0.0);
        batch.add_text_styled(
            self.text.as_str(),
            at,
            self.color,
            font_size,
            self.style.bold,
            self.style.italic,
        );
    }
}
