//! Integration tests for backdrop-core.
//!
//! These drive both animators the way the browser does: a theme store
//! publishes, frame loops sample the signal at frame start.

use backdrop_core::{
    Animator, BackdropConfig, FrameLoop, GridAnimator, GridPalette, ParticleField,
    ParticlePalette, PreferenceStorage, RecordingCanvas, SeededRng, Size, ThemeEnvironment,
    ThemeMode, ThemeStore,
};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::convert::Infallible;

#[derive(Default)]
struct Memory(RefCell<HashMap<String, String>>);

impl PreferenceStorage for Memory {
    type Error = Infallible;

    fn load(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), Infallible> {
        self.0.borrow_mut().insert(key.into(), value.into());
        Ok(())
    }
}

#[derive(Default)]
struct Document {
    dark_class: Cell<bool>,
}

impl ThemeEnvironment for Document {
    fn prefers_dark(&self) -> bool {
        false
    }

    fn apply(&self, mode: ThemeMode) {
        self.dark_class.set(mode.is_dark());
    }
}

#[test]
fn test_theme_toggle_reaches_running_animators() {
    let config = BackdropConfig::default();
    let viewport = Size::new(1024.0, 768.0);

    let mut store = ThemeStore::new(Memory::default(), Document::default(), "theme");
    let reader = store.reader();
    let is_dark = store.initialize();

    let mut particles = FrameLoop::new(ParticleField::new(
        viewport,
        config.particles.clone(),
        &mut SeededRng::new(1),
    ));
    let mut grid = FrameLoop::new(GridAnimator::new(viewport, config.grid.clone()));
    let mut canvas = RecordingCanvas::new();

    grid.tick(reader.get(), &mut canvas);
    let light = GridPalette::for_mode(ThemeMode::Light);
    assert!(canvas.lines().all(|l| l.2 == light.line || l.2 == light.pulse));

    store.toggle(is_dark);
    assert!(store.environment().dark_class.get());

    canvas.reset();
    grid.tick(reader.get(), &mut canvas);
    let dark = GridPalette::for_mode(ThemeMode::Dark);
    assert!(canvas.lines().all(|l| l.2 == dark.line || l.2 == dark.pulse));

    canvas.reset();
    particles.tick(reader.get(), &mut canvas);
    let accent = ParticlePalette::for_mode(ThemeMode::Dark).accent;
    assert!(canvas.lines().all(|l| l.2.b == accent.b && l.2.g == accent.g));
}

#[test]
fn test_cancelled_loops_stop_independently() {
    let viewport = Size::new(320.0, 240.0);
    let config = BackdropConfig::default();
    let mut particles = FrameLoop::new(ParticleField::new(
        viewport,
        config.particles,
        &mut SeededRng::new(2),
    ));
    let mut grid = FrameLoop::new(GridAnimator::new(viewport, config.grid));
    let mut canvas = RecordingCanvas::new();

    for _ in 0..5 {
        assert!(particles.tick(ThemeMode::Light, &mut canvas));
        assert!(grid.tick(ThemeMode::Light, &mut canvas));
    }

    particles.token().cancel();
    canvas.reset();
    assert!(!particles.tick(ThemeMode::Light, &mut canvas));
    assert!(canvas.is_empty());
    assert!(grid.tick(ThemeMode::Light, &mut canvas));

    assert_eq!(particles.frames(), 5);
    assert_eq!(grid.frames(), 6);
}

#[test]
fn test_resize_mid_run_keeps_state() {
    let config = BackdropConfig::default();
    let mut particles = FrameLoop::new(ParticleField::new(
        Size::new(1920.0, 1080.0),
        config.particles,
        &mut SeededRng::new(3),
    ));
    let mut grid = FrameLoop::new(GridAnimator::new(Size::new(1920.0, 1080.0), config.grid));
    let mut canvas = RecordingCanvas::new();

    for _ in 0..20 {
        particles.tick(ThemeMode::Dark, &mut canvas);
        grid.tick(ThemeMode::Dark, &mut canvas);
        canvas.reset();
    }
    let offset = grid.animator().offset();

    particles.resize(Size::new(640.0, 480.0));
    grid.resize(Size::new(640.0, 480.0));

    assert_eq!(particles.animator().len(), 100);
    assert_eq!(particles.animator().viewport(), Size::new(640.0, 480.0));
    assert_eq!(grid.animator().offset(), offset);

    // Stragglers outside the shrunken surface head back in.
    particles.tick(ThemeMode::Dark, &mut canvas);
    let bounds = particles.animator().viewport();
    for p in particles.animator().particles() {
        if p.position.x > bounds.width {
            assert!(p.velocity.x < 0.0);
        }
        if p.position.y > bounds.height {
            assert!(p.velocity.y < 0.0);
        }
    }
}

#[test]
fn test_configured_counts() {
    let config = BackdropConfig::from_json(r#"{"particles": {"count": 12}, "grid": {"pulse_bars": 3}}"#)
        .expect("valid config");
    let field = ParticleField::new(Size::new(100.0, 100.0), config.particles, &mut SeededRng::new(4));
    let grid = GridAnimator::new(Size::new(300.0, 100.0), config.grid);
    assert_eq!(field.len(), 12);
    assert_eq!(grid.pulse_positions(), vec![0.0, 100.0, 200.0]);
}
