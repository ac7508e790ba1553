//! Styling shared by the presenter's widgets.

pub mod theme;

pub use theme::{Theme, default_theme};
