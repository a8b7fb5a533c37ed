mod app_theme;
mod palette;

pub use app_theme::app_theme;
pub use palette::{palette, world_accent, PaletteColors};
