//! Canvas objects - the retained visual tree.
//!
//! Every visual element (text, containers, widgets) implements
//! [`CanvasObject`]. Objects are shared between the code that builds them and
//! the containers that lay them out, so they travel as [`ObjectRef`] handles.
//!
//! Positions are relative to the parent object. Painting receives the
//! parent's absolute origin and adds the object's own position.

use std::cell::RefCell;
use std::rc::Rc;

use crate::batch::PrimitiveBatch;
use crate::primitives::{Point, Size};
use crate::theme::Theme;

/// A shared, mutable handle to any canvas object.
pub type ObjectRef = Rc<RefCell<dyn CanvasObject>>;

/// Wrap an object in a shared handle.
///
/// The returned typed handle coerces to [`ObjectRef`] wherever one is
/// expected, while the caller keeps concrete access to the object.
pub fn share<T: CanvasObject + 'static>(object: T) -> Rc<RefCell<T>> {
    Rc::new(RefCell::new(object))
}

/// Whether two handles refer to the same object.
#[inline]
pub fn same_object(a: &ObjectRef, b: &ObjectRef) -> bool {
    Rc::ptr_eq(a, b)
}

/// A positioned, sized element of the visual tree.
pub trait CanvasObject {
    /// The size this object should not shrink below.
    fn min_size(&self, theme: &Theme) -> Size;

    /// Position relative to the parent.
    fn position(&self) -> Point;

    fn size(&self) -> Size;

    fn move_to(&mut self, position: Point);

    /// Resize the object, laying out any children it owns.
    fn resize(&mut self, size: Size, theme: &Theme);

    /// Re-apply state that may have changed since the last layout.
    fn refresh(&mut self, _theme: &Theme) {}

    /// Paint into `batch`. `origin` is the parent's absolute position.
    fn paint(&self, batch: &mut PrimitiveBatch, origin: Point, theme: &Theme);

    /// Direct children, in paint order.
    fn children(&self) -> Vec<ObjectRef> {
        Vec::new()
    }

    /// Consume a pending redraw request, returning whether one was pending.
    fn take_redraw_request(&mut self) -> bool {
        false
    }
}
