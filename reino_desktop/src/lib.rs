//! Reino Desktop - the Iced front end for the Reino Mágico de Sorrisos kiosk.

pub mod animation;
pub mod canvas;
pub mod constants;
pub mod styles;
pub mod theme;

pub use animation::{
    CarouselState, FaqState, LoadingState, ModalState, ParticleFieldState, Spring, StarfieldState,
    WorldCardState,
};
pub use constants::*;
pub use styles::*;
pub use theme::{app_theme, palette, world_accent, PaletteColors};
