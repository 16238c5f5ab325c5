//! Scroll Container
//!
//! Wraps a single object and shows a vertically scrollable, clipped window
//! onto it. The content is stretched to the viewport width and to at least
//! the viewport height; anything taller can be scrolled into view.

use crate::batch::PrimitiveBatch;
use crate::canvas::{CanvasObject, ObjectRef};
use crate::primitives::{Point, Rect, Size};
use crate::theme::Theme;

pub struct ScrollContainer {
    content: ObjectRef,
    /// Current scroll offset (0 = top).
    offset: f32,
    position: Point,
    size: Size,
}

impl ScrollContainer {
    pub fn new(content: ObjectRef) -> Self {
        Self {
            content,
            offset: 0.0,
            position: Point::ORIGIN,
            size: Size::ZERO,
        }
    }

    pub fn content(&self) -> &ObjectRef {
        &self.content
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Largest valid offset for the current content and viewport.
    pub fn max_offset(&self) -> f32 {
        let content_height = self.content.borrow().size().height;
        (content_height - self.size.height).max(0.0)
    }

    // =====================================================================
    // Scroll operations
    // =====================================================================

    /// Scroll by a delta (positive = scroll content up, towards the start).
    pub fn scroll_by(&mut self, delta: f32) {
        self.scroll_to(self.offset - delta);
    }

    /// Scroll to an absolute offset, clamped to the scrollable range.
    pub fn scroll_to(&mut self, offset: f32) {
        self.offset = offset.clamp(0.0, self.max_offset());
        self.place_content();
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_to(0.0);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_to(self.max_offset());
    }

    fn place_content(&mut self) {
        self.content.borrow_mut().move_to(Point::new(0.0, -self.offset));
    }

    fn layout(&mut self, theme: &Theme) {
        let content_min = self.content.borrow().min_size(theme);
        let content_size = Size::new(self.size.width, content_min.height.max(self.size.height));
        self.content.borrow_mut().resize(content_size, theme);
        // Content may have shrunk under the current offset.
        self.offset = self.offset.clamp(0.0, self.max_offset());
        self.place_content();
        tracing::trace!(offset = self.offset, max = self.max_offset(), "scroll layout");
    }
}

impl CanvasObject for ScrollContainer {
    fn min_size(&self, theme: &Theme) -> Size {
        Size::new(theme.scroll_min_size, theme.scroll_min_size)
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

    fn resize(&mut self, size: Size, theme: &Theme) {
        self.size = size;
        self.layout(theme);
    }

    fn refresh(&mut self, theme: &Theme) {
        self.layout(theme);
        self.content.borrow_mut().refresh(theme);
    }

    fn paint(&self, batch: &mut PrimitiveBatch, origin: Point, theme: &Theme) {
        let origin = origin + self.position;
        batch.push_clip(Rect::from_origin_size(origin, self.size));
        self.content.borrow().paint(batch, origin, theme);
        batch.pop_clip();
    }

    fn children(&self) -> Vec<ObjectRef> {
        vec![self.content.clone()]
    }
}
