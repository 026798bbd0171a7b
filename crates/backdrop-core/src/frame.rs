//! Per-frame animation contract and loop cancellation.
//!
//! An animator is a self-rescheduling unit of work: the host calls
//! [`Animator::render_frame`] once per display refresh for as long as the
//! loop's [`CancelToken`] stays live. Cancelling the token is the only way
//! to stop a loop and takes effect before the next frame.

use crate::theme::ThemeMode;
use crate::{Canvas, Size};
use std::cell::Cell;
use std::rc::Rc;

/// Shared stop flag for one frame loop.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Rc<Cell<bool>>,
}

impl CancelToken {
    /// A live token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the loop. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    /// Whether [`cancel`](Self::cancel) was called on any clone.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// A decorative animation owning its own state.
pub trait Animator {
    /// Name used in log events.
    fn name(&self) -> &'static str;

    /// Current surface dimensions.
    fn viewport(&self) -> Size;

    /// Track a resized surface. State is kept as is.
    fn resize(&mut self, size: Size);

    /// Advance the simulation by one frame.
    fn advance(&mut self);

    /// Paint the current state.
    fn paint(&self, theme: ThemeMode, canvas: &mut dyn Canvas);

    /// One full frame: clear, advance, paint.
    fn render_frame(&mut self, theme: ThemeMode, canvas: &mut dyn Canvas) {
        canvas.clear(self.viewport());
        self.advance();
        self.paint(theme, canvas);
    }
}

/// Drives an animator with a cancellation check before every frame.
///
/// The browser loop wraps this in a `requestAnimationFrame` callback; tests
/// call [`tick`](Self::tick) directly.
#[derive(Debug)]
pub struct FrameLoop<A> {
    animator: A,
    token: CancelToken,
    frames: u64,
}

impl<A: Animator> FrameLoop<A> {
    /// Wrap `animator` with a fresh token.
    pub fn new(animator: A) -> Self {
        Self {
            animator,
            token: CancelToken::new(),
            frames: 0,
        }
    }

    /// The token stopping this loop.
    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Render one frame unless cancelled. Returns whether the loop should be
    /// scheduled again.
    pub fn tick(&mut self, theme: ThemeMode, canvas: &mut dyn Canvas) -> bool {
        if self.token.is_cancelled() {
            return false;
        }
        self.animator.render_frame(theme, canvas);
        self.frames += 1;
        !self.token.is_cancelled()
    }

    /// Forward a surface resize to the animator.
    pub fn resize(&mut self, size: Size) {
        tracing::trace!(animator = self.animator.name(), width = size.width, height = size.height, "resize");
        self.animator.resize(size);
    }

    /// Frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Whether the loop is still live.
    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// The wrapped animator.
    pub fn animator(&self) -> &A {
        &self.animator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DrawCommand, RecordingCanvas};

    #[derive(Debug, Default)]
    struct Counter {
        size: Size,
        steps: u32,
    }

    impl Animator for Counter {
        fn name(&self) -> &'static str {
            "counter"
        }

        fn viewport(&self) -> Size {
            self.size
        }

        fn resize(&mut self, size: Size) {
            self.size = size;
        }

        fn advance(&mut self) {
            self.steps += 1;
        }

        fn paint(&self, _theme: ThemeMode, _canvas: &mut dyn Canvas) {}
    }

    #[test]
    fn test_token_shared_between_clones() {
        let token = CancelToken::new();
        let other = token.clone();
        assert!(!other.is_cancelled());
        token.cancel();
        assert!(other.is_cancelled());
        token.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_render_frame_clears_first() {
        let mut anim = Counter::default();
        anim.resize(Size::new(4.0, 3.0));
        let mut canvas = RecordingCanvas::new();
        anim.render_frame(ThemeMode::Light, &mut canvas);
        assert_eq!(
            canvas.commands(),
            &[DrawCommand::Clear {
                size: Size::new(4.0, 3.0)
            }]
        );
        assert_eq!(anim.steps, 1);
    }

    #[test]
    fn test_loop_ticks_until_cancelled() {
        let mut frame_loop = FrameLoop::new(Counter::default());
        let mut canvas = RecordingCanvas::new();
        assert!(frame_loop.tick(ThemeMode::Light, &mut canvas));
        assert!(frame_loop.tick(ThemeMode::Light, &mut canvas));

        frame_loop.token().cancel();
        assert!(!frame_loop.tick(ThemeMode::Light, &mut canvas));
        assert!(!frame_loop.tick(ThemeMode::Light, &mut canvas));

        assert_eq!(frame_loop.frames(), 2);
        assert_eq!(frame_loop.animator().steps, 2);
        assert!(!frame_loop.is_running());
    }

    #[test]
    fn test_resize_keeps_state() {
        let mut frame_loop = FrameLoop::new(Counter::default());
        let mut canvas = RecordingCanvas::new();
        frame_loop.tick(ThemeMode::Dark, &mut canvas);
        frame_loop.resize(Size::new(800.0, 600.0));
        assert_eq!(frame_loop.animator().viewport(), Size::new(800.0, 600.0));
        assert_eq!(frame_loop.animator().steps, 1);
    }
}
