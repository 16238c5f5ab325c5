//! Roster: grouped list and column header widgets.
//!
//! - [`List`] stacks a header above an ordered set of rows, optionally
//!   wrapping the rows in a scroll container.
//! - [`Header`] spreads bold, right-aligned column titles evenly across its
//!   width, leaving a fixed margin on the right.
//!
//! Both are [`roster_canvas::Widget`]s and plug into any
//! [`roster_canvas::Scene`].
//!
//! ```ignore
//! use roster::{Header, List};
//! use roster_canvas::{share, Color, Scene, Size, Text, Theme};
//!
//! let header = share(Header::new(Color::WHITE, ["Name", "Size"]));
//! let list = share(List::with_scroller(header, []));
//! list.borrow_mut().append(share(Text::new("Cargo.toml", Color::WHITE)));
//!
//! let mut scene = Scene::new(list, Theme::load_default()?);
//! scene.resize(Size::new(480.0, 240.0));
//! let batch = scene.frame();
//! ```

pub mod error;
pub mod header;
pub mod list;

pub use error::ListError;
pub use header::{Header, HeaderRenderer};
pub use list::{List, ListRenderer};
