//! Integration tests driving the list and header through a scene.
//!
//! These exercise the full path a host takes each frame: mutate the list,
//! let the scene service the redraw request, then inspect the painted batch.

use roster::{Header, List, ListError};
use roster_canvas::{share, same_object, CanvasObject, Color, ObjectRef, Point, Rect, Scene, Size, Text, Theme};

/// Whole-number metrics so positions compare exactly.
fn theme() -> Theme {
    Theme {
        padding: 4.0,
        char_width: 8.0,
        line_height: 16.0,
        scroll_min_size: 32.0,
        ..Theme::dark()
    }
}

fn row(s: &str) -> ObjectRef {
    share(Text::new(s, Color::WHITE))
}

fn run_texts(scene: &Scene) -> Vec<String> {
    scene.batch().text_runs().iter().map(|run| run.text.clone()).collect()
}

#[test]
fn append_prepend_scenario() {
    let header = share(Header::new(Color::BLACK, ["A", "B"]));
    let mut list = List::new(header, []);
    let x = row("x");
    let y = row("y");
    let z = row("z");

    assert_eq!(list.append(x.clone()), 0);
    assert_eq!(list.append(y.clone()), 1);
    assert_eq!(list.prepend(z.clone()), 0);
    assert!(same_object(&list.row(1).unwrap(), &x));
}

#[test]
fn append_returns_the_new_last_index() {
    let mut list = List::new(share(Header::new(Color::BLACK, ["A"])), []);
    for expected in 0..20 {
        let index = list.append(row(&format!("row {expected}")));
        assert_eq!(index, expected);
        assert_eq!(index, list.len() - 1);
    }
}

#[test]
fn header_scenario_at_200_by_20() {
    let theme = theme();
    let mut header = Header::new(Color::BLACK, ["A", "B"]);
    header.resize(Size::new(200.0, 20.0), &theme);

    let margin = Text::new("     ", Color::BLACK).min_size(&theme).width;
    let column = (200.0 - margin) / 2.0;

    let objects = header.children();
    assert_eq!(objects.len(), 3);
    assert_eq!(objects[0].borrow().position().x, 0.0);
    assert_eq!(objects[0].borrow().size().width, column);
    assert_eq!(objects[1].borrow().position().x, column);
    assert_eq!(objects[1].borrow().size().width, column);
    assert_eq!(objects[2].borrow().position().x, 200.0 - margin);
    assert_eq!(objects[2].borrow().size().width, margin);
}

#[test]
fn empty_header_does_not_fault() {
    let theme = theme();
    let mut header = Header::new(Color::BLACK, Vec::<String>::new());
    header.resize(Size::new(10.0, 20.0), &theme);
    assert_eq!(header.children().len(), 1);
    assert_eq!(header.min_size(&theme), Size::new(120.0, 16.0));
}

#[test]
fn frame_services_mutation_redraws() {
    let header = share(Header::new(Color::WHITE, ["Name"]));
    let list = share(List::new(header, [row("first")]));
    let mut scene = Scene::new(list.clone(), theme());
    scene.resize(Size::new(300.0, 200.0));

    scene.frame();
    assert_eq!(run_texts(&scene), ["Name", "first"]);

    let second = row("second");
    list.borrow_mut().append(second.clone());
    assert_eq!(scene.flush_redraws(), 1);
    assert_eq!(scene.flush_redraws(), 0);

    scene.frame();
    assert_eq!(run_texts(&scene), ["Name", "first", "second"]);
    // Header 16 + padding 4, then the second row below the first.
    assert_eq!(second.borrow().position(), Point::new(0.0, 20.0));
    assert_eq!(scene.batch().text_runs()[2].position, Point::new(0.0, 40.0));
}

#[test]
fn failed_operations_leave_the_scene_untouched() {
    let list = share(List::new(share(Header::new(Color::WHITE, ["Name"])), []));
    let mut scene = Scene::new(list.clone(), theme());
    scene.resize(Size::new(300.0, 200.0));

    assert!(matches!(list.borrow_mut().pop(), Err(ListError::Empty)));
    assert_eq!(
        list.borrow_mut().remove(0).err(),
        Some(ListError::IndexOutOfRange { index: 0, len: 0 })
    );
    assert_eq!(scene.flush_redraws(), 0);
}

#[test]
fn scrolling_list_clips_rows_to_the_viewport() {
    let header = share(Header::new(Color::WHITE, ["Name"]));
    let rows: Vec<ObjectRef> = (0..10).map(|i| row(&format!("row {i}"))).collect();
    let list = share(List::with_scroller(header, rows));
    let mut scene = Scene::new(list.clone(), theme());
    scene.resize(Size::new(200.0, 116.0));

    let scroller = list.borrow().scroller().unwrap().clone();
    scroller.borrow_mut().scroll_by(-30.0);

    let batch = scene.frame();
    let viewport = Rect::new(0.0, 20.0, 200.0, 96.0);
    let row_runs: Vec<_> = batch.text_runs().iter().filter(|run| run.text.starts_with("row")).collect();
    assert_eq!(row_runs.len(), 10);
    assert!(row_runs.iter().all(|run| run.clip_rect == Some(viewport)));
    // Content starts below the header, shifted up by the scroll offset.
    assert_eq!(row_runs[0].position, Point::new(0.0, -10.0));
}

#[test]
fn removing_rows_shrinks_the_scroll_range() {
    let header = share(Header::new(Color::WHITE, ["Name"]));
    let rows: Vec<ObjectRef> = (0..10).map(|i| row(&format!("row {i}"))).collect();
    let list = share(List::with_scroller(header, rows));
    let mut scene = Scene::new(list.clone(), theme());
    scene.resize(Size::new(200.0, 116.0));

    let scroller = list.borrow().scroller().unwrap().clone();
    scroller.borrow_mut().scroll_to_bottom();
    assert_eq!(scroller.borrow().offset(), 100.0);

    for _ in 0..5 {
        list.borrow_mut().pop().unwrap();
    }
    scene.frame();

    // Five rows: 5 * 16 + 4 * 4 = 96, exactly the viewport.
    assert_eq!(scroller.borrow().max_offset(), 0.0);
    assert_eq!(scroller.borrow().offset(), 0.0);
}

#[test]
fn nested_lists_refresh_independently() {
    let inner_header = share(Header::new(Color::WHITE, ["Inner"]));
    let inner = share(List::new(inner_header, [row("a")]));
    let outer = share(List::new(share(Header::new(Color::WHITE, ["Outer"])), [inner.clone() as ObjectRef]));
    let mut scene = Scene::new(outer, theme());
    scene.resize(Size::new(300.0, 300.0));
    scene.frame();

    inner.borrow_mut().append(row("b"));
    assert_eq!(scene.flush_redraws(), 1);
    scene.frame();
    assert_eq!(run_texts(&scene), ["Outer", "Inner", "a", "b"]);
}
