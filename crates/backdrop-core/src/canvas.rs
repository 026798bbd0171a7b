//! Canvas abstraction and the recording implementation.

use crate::draw::{DrawCommand, RadialGradient};
use crate::{Color, Point, Size};

/// Drawing surface the animators paint into.
pub trait Canvas {
    /// Clear the whole surface.
    fn clear(&mut self, size: Size);

    /// Stroke a line between two points.
    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32);

    /// Fill a disc with a radial gradient centered on it.
    fn fill_gradient_circle(&mut self, center: Point, radius: f32, gradient: RadialGradient);
}

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// The browser replays the recorded commands through Canvas2D; tests
/// inspect them directly.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop all recorded commands, keeping the allocation for the next frame.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Iterate over recorded lines as `(from, to, color, width)`.
    pub fn lines(&self) -> impl Iterator<Item = (Point, Point, Color, f32)> + '_ {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Line {
                from,
                to,
                color,
                width,
            } => Some((*from, *to, *color, *width)),
            _ => None,
        })
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, size: Size) {
        self.commands.push(DrawCommand::Clear { size });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.commands
            .push(DrawCommand::line(from, to, color, width));
    }

    fn fill_gradient_circle(&mut self, center: Point, radius: f32, gradient: RadialGradient) {
        self.commands.push(DrawCommand::GradientCircle {
            center,
            radius,
            gradient,
        });
    }
}
