//! Scene - drives layout, redraw servicing and painting for one root object.
//!
//! The scene plays the host's render loop: it owns the theme and the output
//! batch, sizes the root to the viewport, and on every frame services pending
//! redraw requests before repainting.

use crate::batch::PrimitiveBatch;
use crate::canvas::ObjectRef;
use crate::primitives::{Point, Rect, Size};
use crate::theme::Theme;

pub struct Scene {
    root: ObjectRef,
    theme: Theme,
    size: Size,
    batch: PrimitiveBatch,
}

impl Scene {
    pub fn new(root: ObjectRef, theme: Theme) -> Self {
        Self {
            root,
            theme,
            size: Size::ZERO,
            batch: PrimitiveBatch::new(),
        }
    }

    pub fn root(&self) -> &ObjectRef {
        &self.root
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Minimum size of the root under the current theme.
    pub fn min_size(&self) -> Size {
        self.root.borrow().min_size(&self.theme)
    }

    /// Size the root to the viewport.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
        let mut root = self.root.borrow_mut();
        root.move_to(Point::ORIGIN);
        root.resize(size, &self.theme);
    }

    /// Swap the theme and refresh the whole tree under it.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        refresh_all(&self.root, &self.theme);
    }

    /// Service pending redraw requests, depth first. Returns how many were serviced.
    pub fn flush_redraws(&mut self) -> usize {
        let serviced = flush(&self.root, &self.theme);
        if serviced > 0 {
            tracing::trace!(serviced, "serviced redraw requests");
        }
        serviced
    }

    /// Run one frame: service redraws, then repaint the whole tree.
    pub fn frame(&mut self) -> &PrimitiveBatch {
        self.flush_redraws();
        self.batch.clear();
        self.batch
            .add_solid_rect(Rect::from_origin_size(Point::ORIGIN, self.size), self.theme.background_color);
        self.root.borrow().paint(&mut self.batch, Point::ORIGIN, &self.theme);
        &self.batch
    }

    /// The batch painted by the last frame.
    pub fn batch(&self) -> &PrimitiveBatch {
        &self.batch
    }
}

fn flush(object: &ObjectRef, theme: &Theme) -> usize {
    let mut serviced = 0;
    if object.borrow_mut().take_redraw_request() {
        object.borrow_mut().refresh(theme);
        serviced += 1;
    }
    let children = object.borrow().children();
    serviced + children.iter().map(|child| flush(child, theme)).sum::<usize>()
}

fn refresh_all(object: &ObjectRef, theme: &Theme) {
    object.borrow_mut().take_redraw_request();
    object.borrow_mut().refresh(theme);
    let children = object.borrow().children();
    for child in &children {
        refresh_all(child, theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{share, CanvasObject};
    use crate::container::VBox;
    use crate::primitives::Color;
    use crate::text::Text;

    fn theme() -> Theme {
        Theme {
            padding: 4.0,
            char_width: 8.0,
            line_height: 16.0,
            ..Theme::dark()
        }
    }

    #[test]
    fn frame_paints_background_then_tree() {
        let root = share(VBox::new([share(Text::new("hello", Color::WHITE)) as ObjectRef]));
        let mut scene = Scene::new(root, theme());
        scene.resize(Size::new(200.0, 100.0));

        let batch = scene.frame();
        assert_eq!(batch.solid_rects()[0].rect, Rect::new(0.0, 0.0, 200.0, 100.0));
        assert_eq!(batch.text_runs()[0].text, "hello");
    }

    #[test]
    fn set_theme_relayouts() {
        let label = share(Text::new("ab", Color::WHITE));
        let root = share(VBox::new([label.clone() as ObjectRef]));
        let mut scene = Scene::new(root, theme());
        scene.resize(Size::new(200.0, 100.0));
        assert_eq!(label.borrow().size().height, 16.0);

        scene.set_theme(Theme {
            line_height: 20.0,
            ..theme()
        });
        assert_eq!(label.borrow().size().height, 20.0);
        assert_eq!(scene.min_size(), Size::new(16.0, 20.0));
    }

    #[test]
    fn nothing_pending_services_nothing() {
        let root = share(VBox::default());
        let mut scene = Scene::new(root, theme());
        assert_eq!(scene.flush_redraws(), 0);
    }
}
