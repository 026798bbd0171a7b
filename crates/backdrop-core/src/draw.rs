//! Draw commands produced by the animators.
//!
//! Every frame reduces to these primitives; a backend (Canvas2D in the
//! browser, [`RecordingCanvas`](crate::RecordingCanvas) in tests) replays them.

use crate::{Color, Point, Size};
use serde::{Deserialize, Serialize};

/// Radial gradient between two colors, centered on a shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadialGradient {
    /// Radius at which `inner` applies
    pub inner_radius: f32,
    /// Radius at which `outer` applies
    pub outer_radius: f32,
    /// Color stop at the inner radius
    pub inner: Color,
    /// Color stop at the outer radius
    pub outer: Color,
}

/// A single drawing primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Clear the whole surface.
    Clear {
        /// Surface dimensions at the time of clearing
        size: Size,
    },
    /// Stroke a straight line segment.
    Line {
        /// Start point
        from: Point,
        /// End point
        to: Point,
        /// Stroke color
        color: Color,
        /// Stroke width in pixels
        width: f32,
    },
    /// Fill a disc with a radial gradient.
    GradientCircle {
        /// Disc center, also the gradient center
        center: Point,
        /// Disc radius
        radius: f32,
        /// Fill gradient
        gradient: RadialGradient,
    },
}

impl DrawCommand {
    /// Create a line command.
    #[must_use]
    pub fn line(from: Point, to: Point, color: Color, width: f32) -> Self {
        Self::Line {
            from,
            to,
            color,
            width,
        }
    }

    /// Whether this command is a line.
    #[must_use]
    pub fn is_line(&self) -> bool {
        matches!(self, Self::Line { .. })
    }

    /// Whether this command is a gradient circle.
    #[must_use]
    pub fn is_gradient_circle(&self) -> bool {
        matches!(self, Self::GradientCircle { .. })
    }
}
