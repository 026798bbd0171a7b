//! WASM browser tests - run with `wasm-pack test --headless --chrome`

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use backdrop::{Backdrop, Canvas2DRenderer, DomTheme, DrawCommand, MountError, Point, Size, Storage};
use backdrop::{Color, RadialGradient, ThemeEnvironment, ThemeMode};
use web_sys::HtmlCanvasElement;

fn document() -> web_sys::Document {
    web_sys::window()
        .and_then(|w| w.document())
        .expect("document")
}

fn add_canvas(id: &str) -> HtmlCanvasElement {
    let doc = document();
    if let Some(existing) = doc.get_element_by_id(id) {
        existing.remove();
    }
    let canvas = doc
        .create_element("canvas")
        .expect("create canvas")
        .dyn_into::<HtmlCanvasElement>()
        .expect("is canvas");
    canvas.set_id(id);
    doc.body().expect("body").append_child(&canvas).expect("append");
    canvas
}

fn root_is_dark() -> bool {
    DomTheme::new("dark").document_is_dark()
}

fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

fn fire_resize() {
    let window = web_sys::window().expect("window");
    let event = web_sys::Event::new("resize").expect("event");
    window.dispatch_event(&event).expect("dispatch");
}

// ============================================================================
// Theme
// ============================================================================

#[wasm_bindgen_test]
fn test_stored_preference_applied_on_mount() {
    Storage::local().set("theme", "dark").expect("set");
    add_canvas("p1");
    add_canvas("g1");

    let mut backdrop = Backdrop::new("p1", "g1");
    assert!(backdrop.is_dark());
    assert!(root_is_dark());
    backdrop.unmount();
}

#[wasm_bindgen_test]
fn test_toggle_twice_restores_document_and_storage() {
    Storage::local().set("theme", "light").expect("set");
    add_canvas("p2");
    add_canvas("g2");

    let mut backdrop = Backdrop::new("p2", "g2");
    assert!(!root_is_dark());

    assert!(backdrop.toggle_theme());
    assert!(root_is_dark());
    assert_eq!(Storage::local().get("theme").as_deref(), Some("dark"));

    assert!(!backdrop.toggle_theme());
    assert!(!root_is_dark());
    assert_eq!(Storage::local().get("theme").as_deref(), Some("light"));
    backdrop.unmount();
}

#[wasm_bindgen_test]
fn test_custom_storage_key() {
    Storage::local().remove("site-theme").expect("remove");
    add_canvas("p3");
    add_canvas("g3");

    let mut backdrop =
        Backdrop::with_config("p3", "g3", r#"{"theme": {"storage_key": "site-theme"}}"#)
            .expect("valid config");
    let dark = backdrop.toggle_theme();
    let expected = if dark { "dark" } else { "light" };
    assert_eq!(Storage::local().get("site-theme").as_deref(), Some(expected));
    backdrop.unmount();
}

#[wasm_bindgen_test]
fn test_invalid_config_rejected() {
    assert!(Backdrop::with_config("p", "g", r#"{"grid": {"cell_size": 0}}"#).is_err());
}

// ============================================================================
// Mount / unmount
// ============================================================================

#[wasm_bindgen_test]
fn test_mount_runs_and_unmount_stops() {
    add_canvas("p4");
    add_canvas("g4");
    let mut backdrop = Backdrop::new("p4", "g4");
    assert!(backdrop.particles_running());
    assert!(backdrop.grid_running());

    backdrop.unmount();
    assert!(!backdrop.is_running());
    backdrop.unmount();
}

#[wasm_bindgen_test]
fn test_resize_event_resizes_running_canvas() {
    let canvas = add_canvas("p7");
    add_canvas("g7");
    let mut backdrop = Backdrop::new("p7", "g7");

    canvas.set_width(1);
    fire_resize();
    assert_eq!(f64::from(canvas.width()), viewport_width().trunc());
    assert!(backdrop.particles_running());
    backdrop.unmount();
}

#[wasm_bindgen_test]
fn test_unmount_releases_resize_listener() {
    let canvas = add_canvas("p8");
    add_canvas("g8");
    let mut backdrop = Backdrop::new("p8", "g8");
    backdrop.unmount();

    canvas.set_width(1);
    fire_resize();
    assert_eq!(canvas.width(), 1);
}

#[wasm_bindgen_test]
fn test_dom_theme_reports_applied_class() {
    let theme = DomTheme::new("wasm-test-dark");
    theme.apply(ThemeMode::Dark);
    assert!(theme.document_is_dark());
    theme.apply(ThemeMode::Light);
    assert!(!theme.document_is_dark());
}

#[wasm_bindgen_test]
fn test_missing_canvas_skips_only_that_animator() {
    add_canvas("g5");
    let mut backdrop = Backdrop::new("does-not-exist", "g5");
    assert!(!backdrop.particles_running());
    assert!(backdrop.grid_running());
    backdrop.unmount();
}

#[wasm_bindgen_test]
fn test_mount_sizes_canvas_to_viewport() {
    let canvas = add_canvas("p6");
    add_canvas("g6");
    let mut backdrop = Backdrop::new("p6", "g6");
    assert_eq!(f64::from(canvas.width()), viewport_width().trunc());
    backdrop.unmount();
}

#[wasm_bindgen_test]
fn test_mount_error_messages() {
    assert_eq!(
        MountError::CanvasNotFound("x".into()).to_string(),
        "canvas 'x' not found"
    );
    assert_eq!(MountError::NoContext.to_string(), "no 2d context available");
}

// ============================================================================
// Canvas2D renderer
// ============================================================================

#[wasm_bindgen_test]
fn test_renderer_replays_commands() {
    let canvas = add_canvas("r1");
    let renderer = Canvas2DRenderer::new(canvas).expect("2d context");
    renderer.resize(Size::new(64.0, 32.0));
    assert_eq!(renderer.size(), Size::new(64.0, 32.0));

    renderer.render(&[
        DrawCommand::Clear {
            size: Size::new(64.0, 32.0),
        },
        DrawCommand::line(
            Point::new(0.0, 0.0),
            Point::new(64.0, 32.0),
            Color::rgba8(37, 99, 235, 0.2),
            1.0,
        ),
        DrawCommand::GradientCircle {
            center: Point::new(10.0, 10.0),
            radius: 3.0,
            gradient: RadialGradient {
                inner_radius: 0.0,
                outer_radius: 6.0,
                inner: Color::rgba8(37, 99, 235, 0.5),
                outer: Color::rgba8(30, 58, 138, 0.0),
            },
        },
    ]);
}
