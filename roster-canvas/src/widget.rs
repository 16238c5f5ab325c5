//! Widget System
//!
//! A widget pairs a piece of state with a [`WidgetRenderer`] that turns that
//! state into positioned canvas objects.
//!
//! # Lifecycle
//!
//! 1. The widget builds its renderer through [`Widget::create_renderer`] and
//!    attaches it to its [`BaseWidget`].
//! 2. The host resizes the widget; the base forwards the new size to
//!    [`WidgetRenderer::layout`].
//! 3. Mutations call [`BaseWidget::request_redraw`]. The scene services the
//!    request on its next frame by calling [`WidgetRenderer::refresh`].
//! 4. Dropping the widget calls [`WidgetRenderer::destroy`].

use crate::batch::PrimitiveBatch;
use crate::canvas::{CanvasObject, ObjectRef};
use crate::primitives::{Color, Point, Rect, Size};
use crate::theme::Theme;

/// Turns a widget's state into positioned, sized canvas objects.
pub trait WidgetRenderer {
    /// The size the widget should not shrink below.
    fn min_size(&self, theme: &Theme) -> Size;

    /// Position and size every object for the given widget size.
    fn layout(&mut self, size: Size, theme: &Theme);

    /// Color painted behind the objects.
    fn background_color(&self, theme: &Theme) -> Color;

    /// The objects this renderer manages, in paint order.
    fn objects(&self) -> Vec<ObjectRef>;

    /// Re-layout at `size` and refresh the managed objects.
    fn refresh(&mut self, size: Size, theme: &Theme);

    /// Release renderer resources. Called once when the widget is dropped.
    fn destroy(&mut self) {}
}

/// A canvas object whose visuals come from a renderer.
pub trait Widget: CanvasObject {
    fn create_renderer(&self) -> Box<dyn WidgetRenderer>;
}

/// Shared state and [`CanvasObject`] plumbing for widgets.
///
/// Widgets embed a `BaseWidget` and forward their `CanvasObject` methods to
/// it after attaching their renderer.
#[derive(Default)]
pub struct BaseWidget {
    position: Point,
    size: Size,
    renderer: Option<Box<dyn WidgetRenderer>>,
    redraw_requested: bool,
}

impl BaseWidget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_renderer(&self) -> bool {
        self.renderer.is_some()
    }

    /// Attach the widget's renderer, replacing (and destroying) any previous one.
    pub fn attach(&mut self, renderer: Box<dyn WidgetRenderer>) {
        if let Some(mut old) = self.renderer.replace(renderer) {
            old.destroy();
        }
    }

    pub fn renderer(&self) -> Option<&dyn WidgetRenderer> {
        self.renderer.as_deref()
    }

    /// Ask the host to refresh this widget on its next frame.
    pub fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    pub fn redraw_requested(&self) -> bool {
        self.redraw_requested
    }

    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    pub fn min_size(&self, theme: &Theme) -> Size {
        self.renderer
            .as_ref()
            .map_or(Size::ZERO, |r| r.min_size(theme))
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn move_to(&mut self, position: Point) {
        self.position = position;
    }

    /// Store the new size and lay out the renderer. Unchanged sizes are a no-op.
    pub fn resize(&mut self, size: Size, theme: &Theme) {
        if self.size == size {
            return;
        }
        self.size = size;
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.layout(size, theme);
        }
    }

    pub fn refresh(&mut self, theme: &Theme) {
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.refresh(self.size, theme);
        }
    }

    /// Paint the renderer background, then its objects.
    pub fn paint(&self, batch: &mut PrimitiveBatch, origin: Point, theme: &Theme) {
        let Some(renderer) = self.renderer.as_ref() else {
            return;
        };
        let origin = origin + self.position;
        let background = renderer.background_color(theme);
        if !background.is_transparent() {
            batch.add_solid_rect(Rect::from_origin_size(origin, self.size), background);
        }
        for object in renderer.objects() {
            object.borrow().paint(batch, origin, theme);
        }
    }

    pub fn children(&self) -> Vec<ObjectRef> {
        self.renderer
            .as_ref()
            .map(|r| r.objects())
            .unwrap_or_default()
    }
}

impl Drop for BaseWidget {
    fn drop(&mut self) {
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.destroy();
        }
    }
}
