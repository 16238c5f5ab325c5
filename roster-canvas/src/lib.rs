//! Roster Canvas: the retained-mode host layer the roster widgets build on.
//!
//! The canvas layer provides:
//! - Geometry and color primitives
//! - A shared, retained tree of [`CanvasObject`]s (text, box and scroll containers)
//! - The [`Widget`] / [`WidgetRenderer`] contract widgets plug into
//! - A [`Scene`] that services redraw requests and paints into a [`PrimitiveBatch`]
//!
//! # Architecture
//!
//! ```text
//! mutation -> request_redraw() -> Scene::frame() -> refresh() -> paint() -> PrimitiveBatch
//! ```
//!
//! Layout metrics and colors come from an explicit [`Theme`] passed into every
//! layout and paint call.
//!
//! # Threading
//!
//! Objects are shared through `Rc<RefCell<_>>` handles and are therefore
//! confined to the thread that builds the scene.

pub mod primitives;
pub mod error;
pub mod theme;

pub mod batch;
pub mod canvas;
pub mod text;
pub mod container;
pub mod scroll;
pub mod widget;
pub mod scene;

// Re-export core types
pub use primitives::{Color, Point, Rect, Size};
pub use error::ThemeError;
pub use theme::{Theme, ThemeVariant};
pub use batch::{PrimitiveBatch, SolidRect, TextRun};
pub use canvas::{share, same_object, CanvasObject, ObjectRef};
pub use text::{measure_text, Text, TextAlign, TextStyle};
pub use container::VBox;
pub use scroll::ScrollContainer;
pub use widget::{BaseWidget, Widget, WidgetRenderer};
pub use scene::Scene;
