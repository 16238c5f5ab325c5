//! Header - a row of column titles for a [`List`](crate::List).
//!
//! Labels are spread evenly across the available width, each drawn bold and
//! right-aligned within its column. A blank spacer after the last label keeps
//! a fixed margin free on the right-hand side.

use std::cell::RefCell;
use std::rc::Rc;

use roster_canvas::{
    share, BaseWidget, CanvasObject, Color, ObjectRef, Point, PrimitiveBatch, Size, Text,
    TextAlign, TextStyle, Theme, Widget, WidgetRenderer,
};

/// Five blank cells reserved after the last column.
const MARGIN_TEXT: &str = "     ";

/// Multiplier applied to the widest text element to size the header.
const MIN_WIDTH_FACTOR: f32 = 3.0;

/// Column titles, displayed left to right in insertion order.
pub struct Header {
    base: BaseWidget,
    labels: Vec<String>,
    color: Color,
}

impl Header {
    pub fn new<I, S>(color: Color, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut header = Self {
            base: BaseWidget::new(),
            labels: labels.into_iter().map(Into::into).collect(),
            color,
        };
        header.extend_base_widget();
        header
    }

    fn extend_base_widget(&mut self) {
        if !self.base.has_renderer() {
            let renderer = self.create_renderer();
            self.base.attach(renderer);
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Widget for Header {
    fn create_renderer(&self) -> Box<dyn WidgetRenderer> {
        Box::new(HeaderRenderer::new(self.color, &self.labels))
    }
}

impl CanvasObject for Header {
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
// HeaderRenderer
// =========================================================================

pub struct HeaderRenderer {
    labels: Vec<Rc<RefCell<Text>>>,
    margin: Rc<RefCell<Text>>,
}

impl HeaderRenderer {
    pub fn new(color: Color, labels: &[String]) -> Self {
        let style = TextStyle {
            bold: true,
            ..TextStyle::default()
        };
        let labels = labels
            .iter()
            .map(|label| {
                share(
                    Text::new(label.as_str(), color)
                        .with_style(style)
                        .with_alignment(TextAlign::Trailing),
                )
            })
            .collect();
        Self {
            labels,
            margin: share(Text::new(MARGIN_TEXT, color)),
        }
    }

    /// One text object per label, in order.
    pub fn labels(&self) -> &[Rc<RefCell<Text>>] {
        &self.labels
    }

    /// The trailing spacer.
    pub fn margin(&self) -> &Rc<RefCell<Text>> {
        &self.margin
    }

    fn margin_width(&self, theme: &Theme) -> f32 {
        self.margin.borrow().min_size(theme).width
    }
}

impl WidgetRenderer for HeaderRenderer {
    /// Three times the widest text element, by the first element's height.
    fn min_size(&self, theme: &Theme) -> Size {
        let widest = self
            .labels
            .iter()
            .map(|label| label.borrow().min_size(theme).width)
            .fold(self.margin_width(theme), f32::max);
        let first = self.labels.first().unwrap_or(&self.margin);
        let height = first.borrow().min_size(theme).height;
        Size::new(MIN_WIDTH_FACTOR * widest, height)
    }

    fn layout(&mut self, size: Size, theme: &Theme) {
        let margin_width = self.margin_width(theme);

        // With no labels only the spacer is placed.
        if !self.labels.is_empty() {
            let column_width = (size.width - margin_width) / self.labels.len() as f32;
            for (i, label) in self.labels.iter().enumerate() {
                let x = if i == 0 { 0.0 } else { column_width * i as f32 };
                let mut label = label.borrow_mut();
                label.move_to(Point::new(x, 0.0));
                label.resize(Size::new(column_width, size.height), theme);
            }
        }

        let mut margin = self.margin.borrow_mut();
        margin.move_to(Point::new(size.width - margin_width, 0.0));
        margin.resize(Size::new(margin_width, size.height), theme);
    }

    fn background_color(&self, theme: &Theme) -> Color {
        theme.background_color
    }

    fn objects(&self) -> Vec<ObjectRef> {
        self.labels
            .iter()
            .map(|label| label.clone() as ObjectRef)
            .chain(std::iter::once(self.margin.clone() as ObjectRef))
            .collect()
    }

    fn refresh(&mut self, size: Size, theme: &Theme) {
        self.layout(size, theme);
        for object in self.objects() {
            object.borrow_mut().refresh(theme);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Whole-number metrics: the spacer is exactly 40 wide.
    fn theme() -> Theme {
        Theme {
            char_width: 8.0,
            line_height: 16.0,
            ..Theme::dark()
        }
    }

    fn renderer(labels: &[&str]) -> HeaderRenderer {
        let labels: Vec<String> = labels.iter().map(|s| s.to_string()).collect();
        HeaderRenderer::new(Color::BLACK, &labels)
    }

    #[test]
    fn builds_bold_trailing_labels_and_a_spacer() {
        let r = renderer(&["Name", "Size"]);
        assert_eq!(r.objects().len(), 3);

        let name = r.labels()[0].borrow();
        assert_eq!(name.text, "Name");
        assert!(name.style.bold);
        assert_eq!(name.alignment, TextAlign::Trailing);
        assert_eq!(name.color, Color::BLACK);

        let margin = r.margin().borrow();
        assert_eq!(margin.text, MARGIN_TEXT);
        assert_eq!(margin.color, Color::BLACK);
        assert!(!margin.style.bold);
    }

    #[test]
    fn two_labels_split_the_width_before_the_margin() {
        let theme = theme();
        let mut r = renderer(&["A", "B"]);
        r.layout(Size::new(200.0, 20.0), &theme);

        let a = r.labels()[0].borrow();
        let b = r.labels()[1].borrow();
        let margin = r.margin().borrow();

        assert_eq!(a.position(), Point::new(0.0, 0.0));
        assert_eq!(a.size(), Size::new(80.0, 20.0));
        assert_eq!(b.position(), Point::new(80.0, 0.0));
        assert_eq!(b.size(), Size::new(80.0, 20.0));
        assert_eq!(margin.position(), Point::new(160.0, 0.0));
        assert_eq!(margin.size(), Size::new(40.0, 20.0));
    }

    #[test]
    fn columns_are_evenly_spaced() {
        let theme = theme();
        let mut r = renderer(&["a", "b", "c", "d"]);
        r.layout(Size::new(440.0, 16.0), &theme);

        for (i, label) in r.labels().iter().enumerate() {
            let label = label.borrow();
            assert_eq!(label.position().x, 100.0 * i as f32);
            assert_eq!(label.size().width, 100.0);
        }
    }

    #[test]
    fn zero_labels_places_only_the_spacer() {
        let theme = theme();
        let mut r = renderer(&[]);
        r.layout(Size::new(100.0, 16.0), &theme);

        assert_eq!(r.objects().len(), 1);
        assert_eq!(r.margin().borrow().position(), Point::new(60.0, 0.0));
        assert_eq!(r.min_size(&theme), Size::new(120.0, 16.0));
    }

    #[test]
    fn min_size_is_three_times_the_widest_element() {
        let theme = theme();
        // "Modified" is 64 wide, wider than the 40 wide spacer.
        let r = renderer(&["Name", "Modified"]);
        assert_eq!(r.min_size(&theme), Size::new(192.0, 16.0));

        // Short labels fall back to the spacer width.
        let r = renderer(&["A"]);
        assert_eq!(r.min_size(&theme), Size::new(120.0, 16.0));
    }

    #[test]
    fn min_size_height_follows_the_first_label() {
        let theme = theme();
        let labels = vec!["big".to_string()];
        let r = HeaderRenderer::new(Color::WHITE, &labels);
        r.labels()[0].borrow_mut().text_size = Some(28.0);
        assert_eq!(r.min_size(&theme).height, 32.0);
    }

    #[test]
    fn header_widget_lays_out_through_its_renderer() {
        let theme = theme();
        let mut header = Header::new(Color::WHITE, ["A", "B"]);
        header.resize(Size::new(200.0, 20.0), &theme);

        let objects = header.children();
        assert_eq!(objects.len(), 3);
        assert_eq!(objects[1].borrow().position(), Point::new(80.0, 0.0));
        assert_eq!(header.min_size(&theme), Size::new(120.0, 16.0));
        assert_eq!(header.labels(), ["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn paint_draws_labels_right_aligned() {
        let theme = theme();
        let mut header = Header::new(Color::WHITE, ["A", "B"]);
        header.resize(Size::new(200.0, 20.0), &theme);

        let mut batch = PrimitiveBatch::new();
        header.paint(&mut batch, Point::ORIGIN, &theme);

        // Background, then one run per label; the blank spacer draws nothing.
        assert_eq!(batch.solid_rects().len(), 1);
        let runs = batch.text_runs();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].position, Point::new(72.0, 0.0));
        assert_eq!(runs[1].position, Point::new(152.0, 0.0));
        assert!(runs.iter().all(|run| run.bold));
    }
}
