//! Browser runtime for Backdrop.
//!
//! This module binds the platform-independent animators and theme store to
//! the DOM: localStorage, `prefers-color-scheme`, Canvas2D and
//! `requestAnimationFrame`.

// WASM-only modules
#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod canvas2d;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod surface;

// Cross-platform modules
pub mod storage;

#[cfg(target_arch = "wasm32")]
pub use app::Backdrop;
#[cfg(target_arch = "wasm32")]
pub use canvas2d::Canvas2DRenderer;
#[cfg(target_arch = "wasm32")]
pub use dom::DomTheme;
#[cfg(target_arch = "wasm32")]
pub use surface::{AnimatedSurface, MountError};
pub use storage::{Storage, StorageError};
