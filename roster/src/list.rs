//! List - a grouped list of canvas objects under a header.
//!
//! Rows are stacked in a [`VBox`]. The scrolling variant wraps that box in a
//! [`ScrollContainer`] so the rows can exceed the space below the header.
//!
//! ```text
//! +---------------------------+  y = 0
//! | header (min height)       |
//! +---------------------------+
//!   padding
//! +---------------------------+  y = header height + padding
//! | rows / scroller           |
//! | (remaining height)        |
//! +---------------------------+
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use roster_canvas::{
    share, BaseWidget, CanvasObject, Color, ObjectRef, Point, PrimitiveBatch, ScrollContainer,
    Size, Theme, VBox, Widget, WidgetRenderer,
};

use crate::error::ListError;

pub struct List {
    base: BaseWidget,
    header: ObjectRef,
    rows: Rc<RefCell<VBox>>,
    scroller: Option<Rc<RefCell<ScrollContainer>>>,
}

impl List {
    /// Create a list showing `children` below `header`.
    pub fn new(header: ObjectRef, children: impl IntoIterator<Item = ObjectRef>) -> Self {
        Self::build(header, children, false)
    }

    /// Create a list whose rows scroll when they need more height than is
    /// available below the header.
    pub fn with_scroller(header: ObjectRef, children: impl IntoIterator<Item = ObjectRef>) -> Self {
        Self::build(header, children, true)
    }

    fn build(header: ObjectRef, children: impl IntoIterator<Item = ObjectRef>, scrolling: bool) -> Self {
        let rows = share(VBox::new(children));
        let scroller = scrolling.then(|| share(ScrollContainer::new(rows.clone())));
        let mut list = Self {
            base: BaseWidget::new(),
            header,
            rows,
            scroller,
        };
        list.extend_base_widget();
        list
    }

    fn extend_base_widget(&mut self) {
        if !self.base.has_renderer() {
            let renderer = self.create_renderer();
            self.base.attach(renderer);
        }
    }

    /// The object laid out below the header: the scroller if present, else the rows.
    fn content(&self) -> ObjectRef {
        match &self.scroller {
            Some(scroller) => scroller.clone() as ObjectRef,
            None => self.rows.clone() as ObjectRef,
        }
    }

    pub fn header(&self) -> &ObjectRef {
        &self.header
    }

    pub fn is_scrolling(&self) -> bool {
        self.scroller.is_some()
    }

    /// The scroll container wrapping the rows, for the scrolling variant.
    pub fn scroller(&self) -> Option<&Rc<RefCell<ScrollContainer>>> {
        self.scroller.as_ref()
    }

    pub fn len(&self) -> usize {
        self.rows.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.borrow().is_empty()
    }

    /// Snapshot of the current rows, top to bottom.
    pub fn rows(&self) -> Vec<ObjectRef> {
        self.rows.borrow().objects().to_vec()
    }

    // =====================================================================
    // Row operations
    // =====================================================================

    /// Insert a row at the top. Returns its index, always 0.
    pub fn prepend(&mut self, object: ObjectRef) -> usize {
        self.rows.borrow_mut().prepend(object);
        self.base.request_redraw();
        tracing::debug!(len = self.len(), "prepended row");
        0
    }

    /// Add a row at the bottom. Returns its index.
    pub fn append(&mut self, object: ObjectRef) -> usize {
        let index = {
            let mut rows = self.rows.borrow_mut();
            rows.append(object);
            rows.len() - 1
        };
        self.base.request_redraw();
        tracing::debug!(index, "appended row");
        index
    }

    /// Remove and return the last row.
    pub fn pop(&mut self) -> Result<ObjectRef, ListError> {
        let row = self.rows.borrow_mut().pop().ok_or(ListError::Empty)?;
        self.base.request_redraw();
        tracing::debug!(len = self.len(), "popped row");
        Ok(row)
    }

    /// The row at `index`.
    pub fn row(&self, index: usize) -> Result<ObjectRef, ListError> {
        let rows = self.rows.borrow();
        rows.get(index)
            .cloned()
            .ok_or_else(|| ListError::IndexOutOfRange { index, len: rows.len() })
    }

    /// Remove and return the row at `index`; later rows move up by one.
    pub fn remove(&mut self, index: usize) -> Result<ObjectRef, ListError> {
        let removed = {
            let mut rows = self.rows.borrow_mut();
            let len = rows.len();
            rows.remove(index)
                .ok_or(ListError::IndexOutOfRange { index, len })?
        };
        self.base.request_redraw();
        tracing::debug!(index, "removed row");
        Ok(removed)
    }
}

impl Widget for List {
    fn create_renderer(&self) -> Box<dyn WidgetRenderer> {
        Box::new(ListRenderer {
            header: self.header.clone(),
            content: self.content(),
        })
    }
}

impl CanvasObject for List {
    fn min_size(&self, theme: &Theme) -> Size {
        self.base.min_size(theme)
    }

    fn position(&self) -> Point {
        self.base.position()
    }

    fn size(&self) -> Size {
        self.base.size()
    }

    fn move_to(&mut self, position: Point) {
        self.base.move_to(position);
    }

    fn resize(&mut self, size: Size, theme: &Theme) {
        self.base.resize(size, theme);
    }

    fn refresh(&mut self, theme: &Theme) {
        self.base.refresh(theme);
    }

    fn paint(&self, batch: &mut PrimitiveBatch, origin: Point, theme: &Theme) {
        self.base.paint(batch, origin, theme);
    }

    fn children(&self) -> Vec<ObjectRef> {
        self.base.children()
    }

    fn take_redraw_request(&mut self) -> bool {
        self.base.take_redraw_request()
    }
}

// =========================================================================
// ListRenderer
// =========================================================================

pub struct ListRenderer {
    header: ObjectRef,
    content: ObjectRef,
}

impl WidgetRenderer for ListRenderer {
    fn min_size(&self, theme: &Theme) -> Size {
        let header = self.header.borrow().min_size(theme);
        let content = self.content.borrow().min_size(theme);
        Size::new(
            header.width.max(content.width),
            header.height + content.height + theme.padding,
        )
    }

    fn layout(&mut self, size: Size, theme: &Theme) {
        let header_height = self.header.borrow().min_size(theme).height;
        {
            let mut header = self.header.borrow_mut();
            header.move_to(Point::ORIGIN);
            header.resize(Size::new(size.width, header_height), theme);
        }

        let top = header_height + theme.padding;
        let mut content = self.content.borrow_mut();
        content.move_to(Point::new(0.0, top));
        content.resize(Size::new(size.width, (size.height - top).max(0.0)), theme);
        tracing::trace!(width = size.width, height = size.height, header_height, "list layout");
    }

    fn background_color(&self, theme: &Theme) -> Color {
        theme.background_color
    }

    fn objects(&self) -> Vec<ObjectRef> {
        vec![self.header.clone(), self.content.clone()]
    }

    fn refresh(&mut self, size: Size, theme: &Theme) {
        self.layout(size, theme);
        self.header.borrow_mut().refresh(theme);
        self.content.borrow_mut().refresh(theme);
    }
}
