//! Core types for Backdrop, the animated page background.
//!
//! This crate is platform independent; the browser runtime lives in the
//! `backdrop` crate. It provides:
//! - Geometry and color: [`Point`], [`Size`], [`Color`]
//! - Draw commands and the [`Canvas`] they are painted through
//! - The [`ThemeStore`] and the [`ThemeSignal`] animators sample
//! - Two animators: [`ParticleField`] and [`GridAnimator`]
//! - The [`FrameLoop`] contract with explicit cancellation

mod canvas;
mod color;
pub mod config;
pub mod draw;
pub mod frame;
mod geometry;
pub mod grid;
pub mod particles;
pub mod rng;
pub mod theme;

pub use canvas::{Canvas, RecordingCanvas};
pub use color::Color;
pub use config::{BackdropConfig, ConfigError, GridConfig, ParticleConfig, ThemeConfig};
pub use draw::{DrawCommand, RadialGradient};
pub use frame::{Animator, CancelToken, FrameLoop};
pub use geometry::{Point, Size};
pub use grid::GridAnimator;
pub use particles::{link_alpha, Particle, ParticleField};
pub use rng::SeededRng;
pub use theme::{
    GridPalette, ParticlePalette, PreferenceStorage, ThemeEnvironment, ThemeMode, ThemeReader,
    ThemeSignal, ThemeStore,
};
