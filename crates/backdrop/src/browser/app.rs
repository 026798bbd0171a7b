//! WASM page shell: theme store plus the two background animations.

use super::dom::DomTheme;
use super::storage::Storage;
use super::surface::{AnimatedSurface, MountError};
use backdrop_core::rng::DEFAULT_SEED;
use backdrop_core::{BackdropConfig, GridAnimator, ParticleField, SeededRng, ThemeStore};
use wasm_bindgen::prelude::*;

/// Background animations and theme toggle for one page.
#[wasm_bindgen]
pub struct Backdrop {
    theme: ThemeStore<Storage, DomTheme>,
    particles: Option<AnimatedSurface>,
    grid: Option<AnimatedSurface>,
}

#[wasm_bindgen]
impl Backdrop {
    /// Mount with the default configuration.
    ///
    /// A canvas that is missing or has no 2d context is skipped; the rest of
    /// the page keeps working.
    #[wasm_bindgen(constructor)]
    pub fn new(particle_canvas_id: &str, grid_canvas_id: &str) -> Backdrop {
        Self::mount(particle_canvas_id, grid_canvas_id, BackdropConfig::default())
    }

    /// Mount with a JSON configuration. Missing fields take defaults.
    pub fn with_config(
        particle_canvas_id: &str,
        grid_canvas_id: &str,
        config_json: &str,
    ) -> Result<Backdrop, JsValue> {
        let config =
            BackdropConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::mount(particle_canvas_id, grid_canvas_id, config))
    }

    /// Whether dark mode is active.
    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    /// Flip the theme, persist it and return whether dark mode is now active.
    pub fn toggle_theme(&mut self) -> bool {
        let current = self.theme.is_dark();
        self.theme.toggle(current)
    }

    /// Whether the particle field is running.
    pub fn particles_running(&self) -> bool {
        self.particles.as_ref().is_some_and(AnimatedSurface::is_running)
    }

    /// Whether the grid is running.
    pub fn grid_running(&self) -> bool {
        self.grid.as_ref().is_some_and(AnimatedSurface::is_running)
    }

    /// Whether any animation is running.
    pub fn is_running(&self) -> bool {
        self.particles_running() || self.grid_running()
    }

    /// Stop both animations and release their listeners. The theme stays
    /// applied. Calling it twice is harmless.
    pub fn unmount(&mut self) {
        if let Some(mut surface) = self.particles.take() {
            surface.stop();
        }
        if let Some(mut surface) = self.grid.take() {
            surface.stop();
        }
    }
}

impl Backdrop {
    fn mount(particle_canvas_id: &str, grid_canvas_id: &str, config: BackdropConfig) -> Self {
        console_error_panic_hook::set_once();

        let BackdropConfig {
            particles,
            grid,
            theme,
        } = config;

        let mut store = ThemeStore::new(
            Storage::local(),
            DomTheme::new(theme.dark_class),
            theme.storage_key,
        );
        store.initialize();
        let reader = store.reader();

        let mut rng = SeededRng::new(entropy_seed());
        let particle_surface = AnimatedSurface::mount(
            particle_canvas_id,
            |size| ParticleField::new(size, particles, &mut rng),
            reader.clone(),
        );
        let grid_surface =
            AnimatedSurface::mount(grid_canvas_id, |size| GridAnimator::new(size, grid), reader);

        Self {
            theme: store,
            particles: skip_on_error(particle_surface),
            grid: skip_on_error(grid_surface),
        }
    }

    /// The theme store.
    pub fn theme(&self) -> &ThemeStore<Storage, DomTheme> {
        &self.theme
    }
}

fn skip_on_error(result: Result<AnimatedSurface, MountError>) -> Option<AnimatedSurface> {
    match result {
        Ok(surface) => Some(surface),
        Err(err) => {
            web_sys::console::debug_1(&JsValue::from_str(&format!(
                "backdrop: animation not started: {err}"
            )));
            None
        }
    }
}

/// Seed for particle placement from the platform entropy source.
fn entropy_seed() -> u64 {
    let mut bytes = [0u8; 8];
    match getrandom::getrandom(&mut bytes) {
        Ok(()) => u64::from_le_bytes(bytes),
        Err(_) => {
            let fallback = js_sys::Math::random() * u64::MAX as f64;
            if fallback > 0.0 {
                fallback as u64
            } else {
                DEFAULT_SEED
            }
        }
    }
}

/// Initialize panic hook for better error messages.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}
