//! Core logic for the Reino Mágico de Sorrisos kiosk.
//!
//! Everything here is UI-free. The starfield produces plain draw
//! commands and the chimes are plain `rodio` sources, so the desktop
//! shell stays a thin iced layer and all of this is testable without
//! a window.

pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod progress;
pub mod sound;
pub mod starfield;

pub use config::{PointerKind, Settings};
pub use error::{CoreError, CoreResult};
pub use progress::{LoadingPhase, LoadingProgress};
pub use sound::SoundService;
pub use starfield::{FramePlan, Scene, Tier, Vec2};
