//! Roster demo - builds a scrolling file list and prints what each frame paints.
//!
//! Usage: `roster-demo [theme.json]`. Without an argument the theme is read
//! from the platform config directory, falling back to the dark preset.

use std::path::PathBuf;

use anyhow::{Context, Result};
use roster::{Header, List};
use roster_canvas::{share, Color, ObjectRef, PrimitiveBatch, Scene, Size, Text, TextAlign, Theme};
use tracing_subscriber::EnvFilter;

const VIEWPORT: Size = Size::new(480.0, 160.0);

const FILES: &[(&str, &str, &str)] = &[
    ("Cargo.toml", "412B", "2026-10-01"),
    ("DESIGN.md", "6.1K", "2026-10-16"),
    ("roster/src/list.rs", "9.8K", "2026-10-17"),
    ("roster/src/header.rs", "7.2K", "2026-10-17"),
    ("roster-canvas/src/scene.rs", "4.4K", "2026-10-15"),
    ("roster-canvas/src/scroll.rs", "5.9K", "2026-10-15"),
];

fn main() -> Result<()> {
    // Set up logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let theme = load_theme()?;
    tracing::info!(padding = theme.padding, text_size = theme.text_size, "Starting roster demo");

    let header = share(Header::new(theme.foreground_color, ["Name", "Size", "Modified"]));
    let rows = FILES.iter().map(|file| file_row(file, theme.foreground_color));
    let list = share(List::with_scroller(header, rows));

    let mut scene = Scene::new(list.clone(), theme);
    scene.resize(VIEWPORT);
    tracing::info!(min = ?scene.min_size(), "Scene sized");
    print_frame("initial", scene.frame());

    let accent = Color::rgb(0.2, 0.6, 1.0);
    // Parent-directory entry, drawn larger than the file rows.
    list.borrow_mut()
        .prepend(share(Text::new("..", accent).with_size(scene.theme().text_size * 1.25)));
    list.borrow_mut()
        .append(file_row(&("spec.md", "5.0K", "2026-10-17"), accent));
    print_frame("after prepend/append", scene.frame());

    let scroller = list
        .borrow()
        .scroller()
        .cloned()
        .context("list was built without a scroller")?;
    scroller.borrow_mut().scroll_to_bottom();
    tracing::info!(offset = scroller.borrow().offset(), "Scrolled to bottom");
    print_frame("scrolled", scene.frame());

    let removed = list.borrow_mut().remove(1)?;
    tracing::info!(row = %removed_label(&removed), "Removed row 1");
    list.borrow_mut().pop()?;
    print_frame("after remove/pop", scene.frame());

    if let Err(err) = list.borrow().row(99) {
        tracing::warn!(%err, "Out-of-range lookup rejected");
    }

    Ok(())
}

fn load_theme() -> Result<Theme> {
    match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => Theme::load(&path).with_context(|| format!("Failed to load theme: {:?}", path)),
        None => Theme::load_default().context("Failed to load default theme"),
    }
}

/// One row: name on the left, size and date right-aligned in fixed-width cells.
fn file_row((name, size, modified): &(&str, &str, &str), color: Color) -> ObjectRef {
    share(Text::new(format!("{name:<32}{size:>8}{modified:>14}"), color).with_alignment(TextAlign::Leading))
}

fn removed_label(object: &ObjectRef) -> String {
    // Rows are opaque canvas objects; identify them by their painted text.
    let mut batch = PrimitiveBatch::new();
    object
        .borrow()
        .paint(&mut batch, Default::default(), &Theme::default());
    batch
        .text_runs()
        .first()
        .map(|run| run.text.trim_end().to_string())
        .unwrap_or_default()
}

fn print_frame(label: &str, batch: &PrimitiveBatch) {
    println!("== {label}: {} rects, {} text runs", batch.solid_rects().len(), batch.text_runs().len());
    for run in batch.text_runs() {
        let visible = match run.clip_rect {
            Some(clip) => clip.contains(run.position) && !run.is_clipped_out(),
            None => true,
        };
        let marker = if visible { ' ' } else { '~' };
        println!(
            "{marker} ({:>6.1}, {:>6.1}) {}{}",
            run.position.x,
            run.position.y,
            if run.bold { "*" } else { "" },
            run.text.trim_end()
        );
    }
}
