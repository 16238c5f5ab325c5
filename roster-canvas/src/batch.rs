//! Primitive Batch - the output of a paint pass.
//!
//! Canvas objects paint into a batch of backend-neutral primitives. A
//! rendering backend consumes the batch; tests and the demo inspect it.

use crate::primitives::{Color, Point, Rect};

/// A batch of primitives produced by one paint pass.
#[derive(Debug, Default, Clone)]
pub struct PrimitiveBatch {
    solid_rects: Vec<SolidRect>,
    text_runs: Vec<TextRun>,

    /// Clip stack for nested container clipping.
    /// Each entry is a clip rect; the effective clip is the intersection of all.
    clip_stack: Vec<Rect>,
}

/// A solid rectangle primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidRect {
    pub rect: Rect,
    pub color: Color,
    pub clip_rect: Option<Rect>,
}

/// A pre-positioned text run.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub position: Point,
    pub color: Color,
    pub font_size: f32,
    pub clip_rect: Option<Rect>,
    pub bold: bool,
    pub italic: bool,
}

impl TextRun {
    /// Whether the active clip rect hides this run entirely.
    pub fn is_clipped_out(&self) -> bool {
        self.clip_rect
            .is_some_and(|clip| clip.width <= 0.0 || clip.height <= 0.0)
    }
}

impl PrimitiveBatch {
    /// Create an empty primitive batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all primitives.
    pub fn clear(&mut self) {
        self.solid_rects.clear();
        self.text_runs.clear();
        self.clip_stack.clear();
    }

    pub fn solid_rects(&self) -> &[SolidRect] {
        &self.solid_rects
    }

    pub fn text_runs(&self) -> &[TextRun] {
        &self.text_runs
    }

    /// Total number of primitives in the batch.
    pub fn len(&self) -> usize {
        self.solid_rects.len() + self.text_runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // =========================================================================
    // Clip stack
    // =========================================================================

    /// Push a clip rectangle. All subsequently added primitives will be clipped
    /// to the intersection of all active clip rects.
    pub fn push_clip(&mut self, rect: Rect) {
        self.clip_stack.push(rect);
    }

    /// Pop the most recent clip rectangle.
    pub fn pop_clip(&mut self) {
        self.clip_stack.pop();
    }

    /// Get the current effective clip rect (intersection of all stack entries).
    /// Returns `None` if no clip is active.
    pub fn current_clip(&self) -> Option<Rect> {
        let (first, rest) = self.clip_stack.split_first()?;
        let mut clip = *first;
        for r in rest {
            match clip.intersection(r) {
                Some(c) => clip = c,
                // Empty intersection: clip everything.
                None => return Some(Rect::new(clip.x, clip.y, 0.0, 0.0)),
            }
        }
        Some(clip)
    }

    // =========================================================================
    // Primitive add methods
    // =========================================================================

    /// Add a solid rectangle.
    #[inline]
    pub fn add_solid_rect(&mut self, rect: Rect, color: Color) -> &mut Self {
        let clip_rect = self.current_clip();
        self.solid_rects.push(SolidRect { rect, color, clip_rect });
        self
    }

    /// Add a pre-positioned text run at the given font size.
    #[inline]
    pub fn add_text(&mut self, text: impl Into<String>, position: Point, color: Color, font_size: f32) -> &mut Self {
        self.add_text_styled(text, position, color, font_size, false, false)
    }

    /// Add a styled text run with bold/italic support.
    #[inline]
    pub fn add_text_styled(
        &mut self,
        text: impl Into<String>,
        position: Point,
        color: Color,
        font_size: f32,
        bold: bool,
        italic: bool,
    ) -> &mut Self {
        let clip_rect = self.current_clip();
        self.text_runs.push(TextRun {
            text: text.into(),
            position,
            color,
            font_size,
            clip_rect,
            bold,
            italic,
        });
        self
    }
}
