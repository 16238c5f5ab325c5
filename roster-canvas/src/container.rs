//! VBox - an ordered vertical stack of canvas objects.
//!
//! Children are stacked top to bottom at their minimum height and stretched to
//! the full width, separated by the theme padding.

use crate::batch::PrimitiveBatch;
use crate::canvas::{CanvasObject, ObjectRef};
use crate::primitives::{Point, Size};
use crate::theme::Theme;

#[derive(Default)]
pub struct VBox {
    children: Vec<ObjectRef>,
    position: Point,
    size: Size,
}

impl VBox {
    pub fn new(children: impl IntoIterator<Item = ObjectRef>) -> Self {
        Self {
            children: children.into_iter().collect(),
            position: Point::ORIGIN,
            size: Size::ZERO,
        }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ObjectRef> {
        self.children.get(index)
    }

    pub fn objects(&self) -> &[ObjectRef] {
        &self.children
    }

    pub fn prepend(&mut self, object: ObjectRef) {
        self.children.insert(0, object);
    }

    pub fn append(&mut self, object: ObjectRef) {
        self.children.push(object);
    }

    pub fn pop(&mut self) -> Option<ObjectRef> {
        self.children.pop()
    }

    /// Remove the child at `index`, shifting later children up.
    pub fn remove(&mut self, index: usize) -> Option<ObjectRef> {
        (index < self.children.len()).then(|| self.children.remove(index))
    }

    /// Position every child for the current size.
    fn layout(&mut self, theme: &Theme) {
        let width = self.size.width;
        let mut y = 0.0;
        for child in &self.children {
            let mut child = child.borrow_mut();
            let height = child.min_size(theme).height;
            child.move_to(Point::new(0.0, y));
            child.resize(Size::new(width, height), theme);
            y += height + theme.padding;
        }
        tracing::trace!(children = self.children.len(), width, "vbox layout");
    }
}

impl CanvasObject for VBox {
    fn min_size(&self, theme: &Theme) -> Size {
        let mut min = Size::ZERO;
        for (i, child) in self.children.iter().enumerate() {
            let child_min = child.borrow().min_size(theme);
            min.width = min.width.max(child_min.width);
            min.height += child_min.height;
            if i > 0 {
                min.height += theme.padding;
            }
        }
        min
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
        for child in &self.children {
            child.borrow_mut().refresh(theme);
        }
    }

    fn paint(&self, batch: &mut PrimitiveBatch, origin: Point, theme: &Theme) {
        let origin = origin + self.position;
        for child in &self.children {
            child.borrow().paint(batch, origin, theme);
        }
    }

    fn children(&self) -> Vec<ObjectRef> {
        self.children.clone()
    }
}
