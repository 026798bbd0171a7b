//! A full-viewport canvas driven by one animator.
//!
//! Mounting sizes the canvas to the window, registers a `resize` listener and
//! starts a `requestAnimationFrame` chain. [`AnimatedSurface::stop`] (also run
//! on drop) cancels the token, cancels the pending frame and removes the
//! listener, so no frame runs after teardown.

use super::canvas2d::Canvas2DRenderer;
use backdrop_core::{Animator, CancelToken, FrameLoop, RecordingCanvas, Size, ThemeReader};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, Window};

/// Why an animator could not be mounted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MountError {
    /// No global `window`
    #[error("no window")]
    NoWindow,
    /// No `document` on the window
    #[error("no document")]
    NoDocument,
    /// No element with the requested id
    #[error("canvas '{0}' not found")]
    CanvasNotFound(String),
    /// The element exists but is not a `<canvas>`
    #[error("element '{0}' is not a canvas")]
    NotACanvas(String),
    /// The canvas has no 2d context
    #[error("no 2d context available")]
    NoContext,
    /// The resize listener could not be registered
    #[error("failed to register resize listener")]
    Listener,
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A mounted, running animation.
pub struct AnimatedSurface {
    name: &'static str,
    token: CancelToken,
    frame_id: Rc<Cell<Option<i32>>>,
    frame_callback: FrameCallback,
    resize_listener: Option<Closure<dyn FnMut()>>,
}

impl AnimatedSurface {
    /// Mount `build`'s animator on the canvas with id `canvas_id` and start
    /// its frame loop. `build` receives the initial viewport.
    pub fn mount<A, F>(canvas_id: &str, build: F, theme: ThemeReader) -> Result<Self, MountError>
    where
        A: Animator + 'static,
        F: FnOnce(Size) -> A,
    {
        let window = web_sys::window().ok_or(MountError::NoWindow)?;
        let canvas = find_canvas(&window, canvas_id)?;
        let renderer = Rc::new(Canvas2DRenderer::new(canvas)?);

        let size = viewport_size(&window);
        renderer.resize(size);

        let animator = build(size);
        let name = animator.name();
        let frame_loop = Rc::new(RefCell::new(FrameLoop::new(animator)));
        let token = frame_loop.borrow().token();

        let resize_listener = {
            let frame_loop = Rc::clone(&frame_loop);
            let renderer = Rc::clone(&renderer);
            let window = window.clone();
            Closure::<dyn FnMut()>::new(move || {
                let size = viewport_size(&window);
                renderer.resize(size);
                frame_loop.borrow_mut().resize(size);
            })
        };
        window
            .add_event_listener_with_callback("resize", resize_listener.as_ref().unchecked_ref())
            .map_err(|_| MountError::Listener)?;

        let frame_id = Rc::new(Cell::new(None));
        let frame_callback: FrameCallback = Rc::new(RefCell::new(None));
        {
            let frame_id = Rc::clone(&frame_id);
            let next = Rc::clone(&frame_callback);
            let window = window.clone();
            let mut recording = RecordingCanvas::new();
            *frame_callback.borrow_mut() = Some(Closure::new(move || {
                frame_id.set(None);
                let again = frame_loop.borrow_mut().tick(theme.get(), &mut recording);
                renderer.render(recording.commands());
                recording.reset();
                if again {
                    frame_id.set(request_frame(&window, &next));
                }
            }));
        }
        frame_id.set(request_frame(&window, &frame_callback));

        tracing::debug!(animator = name, canvas = canvas_id, width = size.width, height = size.height, "mounted");

        Ok(Self {
            name,
            token,
            frame_id,
            frame_callback,
            resize_listener: Some(resize_listener),
        })
    }

    /// Animator name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether frames are still being scheduled.
    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Stop the loop and release the resize listener. Idempotent.
    pub fn stop(&mut self) {
        self.token.cancel();
        if let Some(window) = web_sys::window() {
            if let Some(id) = self.frame_id.take() {
                window.cancel_animation_frame(id).ok();
            }
            if let Some(listener) = self.resize_listener.take() {
                window
                    .remove_event_listener_with_callback(
                        "resize",
                        listener.as_ref().unchecked_ref(),
                    )
                    .ok();
            }
        }
        // Dropping the frame closure breaks its self-reference.
        self.frame_callback.borrow_mut().take();
    }
}

impl Drop for AnimatedSurface {
    fn drop(&mut self) {
        self.stop();
    }
}

fn find_canvas(window: &Window, canvas_id: &str) -> Result<HtmlCanvasElement, MountError> {
    window
        .document()
        .ok_or(MountError::NoDocument)?
        .get_element_by_id(canvas_id)
        .ok_or_else(|| MountError::CanvasNotFound(canvas_id.to_string()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| MountError::NotACanvas(canvas_id.to_string()))
}

fn request_frame(window: &Window, callback: &FrameCallback) -> Option<i32> {
    let callback = callback.borrow();
    let closure = callback.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}

/// Window inner dimensions; zero when unavailable.
pub fn viewport_size(window: &Window) -> Size {
    let dimension = |value: Result<JsValue, JsValue>| {
        value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Size::new(dimension(window.inner_width()), dimension(window.inner_height()))
}
