//! Scrolling grid with pulse bars.

use crate::config::GridConfig;
use crate::frame::Animator;
use crate::theme::{GridPalette, ThemeMode};
use crate::{Canvas, Point, Size};

/// The grid animator.
#[derive(Debug, Clone)]
pub struct GridAnimator {
    offset: f32,
    viewport: Size,
    config: GridConfig,
    wraps: u64,
}

impl GridAnimator {
    /// Create a grid covering `viewport` with the offset at zero.
    pub fn new(viewport: Size, config: GridConfig) -> Self {
        Self {
            offset: 0.0,
            viewport,
            config,
            wraps: 0,
        }
    }

    /// Scroll offset, always in `[0, cell_size)`.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Times the offset has wrapped back to zero.
    pub fn wraps(&self) -> u64 {
        self.wraps
    }

    /// Configuration in use.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// X positions of the pulse bars, spread evenly and shifted by the
    /// offset. Empty for a zero-width surface.
    pub fn pulse_positions(&self) -> Vec<f32> {
        let width = self.viewport.width;
        let bars = self.config.pulse_bars;
        if width <= 0.0 || bars == 0 {
            return Vec::new();
        }
        let spacing = width / bars as f32;
        (0..bars)
            .map(|i| (self.offset + i as f32 * spacing).rem_euclid(width))
            .collect()
    }

    fn line_positions(&self, extent: f32) -> impl Iterator<Item = f32> {
        let cell = self.config.cell_size;
        let offset = self.offset;
        (-1i32..)
            .map(move |k| k as f32 * cell)
            .take_while(move |base| *base < extent + cell)
            .map(move |base| base + offset)
    }
}

impl Animator for GridAnimator {
    fn name(&self) -> &'static str {
        "grid"
    }

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn resize(&mut self, size: Size) {
        self.viewport = size;
    }

    fn advance(&mut self) {
        self.offset += self.config.scroll_step;
        if self.offset >= self.config.cell_size {
            self.offset = 0.0;
            self.wraps += 1;
        }
    }

    fn paint(&self, theme: ThemeMode, canvas: &mut dyn Canvas) {
        let palette = GridPalette::for_mode(theme);
        let Size { width, height } = self.viewport;

        for x in self.line_positions(width) {
            canvas.draw_line(
                Point::new(x, 0.0),
                Point::new(x, height),
                palette.line,
                self.config.line_width,
            );
        }
        for y in self.line_positions(height) {
            canvas.draw_line(
                Point::new(0.0, y),
                Point::new(width, y),
                palette.line,
                self.config.line_width,
            );
        }

        for x in self.pulse_positions() {
            canvas.draw_line(
                Point::new(x, 0.0),
                Point::new(x, height),
                palette.pulse,
                self.config.pulse_width,
            );
        }
    }
}
