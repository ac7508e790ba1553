mod builtins;
mod color;
mod registry;
mod types;

pub use builtins::default_theme;
pub use color::{InvalidColor, parse_color};
pub use registry::{by_name, descriptors, names};
pub use types::{Theme, ThemeDefinition, ThemeDescriptor};

impl Default for Theme {
    fn default() -> Self {
        default_theme()
    }
}
