//! Backdrop: animated page background with a persisted light/dark theme.
//!
//! Two decorative canvases sit behind the page content: a particle field
//! linking nearby points, and a scrolling grid with pulse bars. Both follow
//! the theme chosen through `Backdrop::toggle_theme`.
//!
//! # Browser Usage (WASM)
//!
//! ```javascript
//! import init, { Backdrop } from './backdrop.js';
//!
//! async function main() {
//!     await init();
//!     const backdrop = new Backdrop('particles', 'grid');
//!     toggle.onclick = () => backdrop.toggle_theme();
//!     window.addEventListener('pagehide', () => backdrop.unmount());
//! }
//! ```

pub use backdrop_core::*;

pub mod browser;

#[cfg(target_arch = "wasm32")]
pub use browser::{AnimatedSurface, Backdrop, Canvas2DRenderer, DomTheme, MountError};

pub use browser::{Storage, StorageError};
