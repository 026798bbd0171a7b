//! Particle field: drifting points with pulsing gradients, linked to their
//! neighbors by fading lines.
//!
//! The link pass compares every unordered pair each frame, O(n²). At the
//! default 100 particles that is 4950 distance checks per frame; the config
//! caps the count at [`MAX_PARTICLES`](crate::config::MAX_PARTICLES).

use crate::config::ParticleConfig;
use crate::draw::RadialGradient;
use crate::frame::Animator;
use crate::rng::SeededRng;
use crate::theme::{ParticlePalette, ThemeMode};
use crate::{Canvas, Point, Size};
use std::f32::consts::TAU;

/// Lowest particle opacity.
pub const PULSE_ALPHA_MIN: f32 = 0.3;
/// Width of the opacity band above [`PULSE_ALPHA_MIN`].
pub const PULSE_ALPHA_SPAN: f32 = 0.4;

/// A single animated point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Position
    pub position: Point,
    /// Velocity per frame
    pub velocity: Point,
    /// Disc radius; the gradient extends to twice this
    pub radius: f32,
    /// Pulse phase in radians
    pub phase: f32,
    /// Phase advance per frame
    pub phase_speed: f32,
}

impl Particle {
    /// Random particle inside `bounds`.
    pub fn random(rng: &mut SeededRng, bounds: Size, config: &ParticleConfig) -> Self {
        let half = config.max_speed / 2.0;
        Self {
            position: Point::new(
                unit_range(rng, bounds.width),
                unit_range(rng, bounds.height),
            ),
            velocity: Point::new(speed(rng, half), speed(rng, half)),
            radius: rng.range(config.min_radius, config.max_radius),
            phase: rng.range(0.0, TAU),
            phase_speed: rng.range(config.min_phase_speed, config.max_phase_speed),
        }
    }

    /// Move one frame, reflecting off the bounds, and advance the phase.
    pub fn step(&mut self, bounds: Size) {
        reflect(&mut self.position.x, &mut self.velocity.x, bounds.width);
        reflect(&mut self.position.y, &mut self.velocity.y, bounds.height);
        self.phase += self.phase_speed;
        if self.phase >= TAU {
            self.phase -= TAU;
        }
    }

    /// Current opacity in `[0.3, 0.7]`.
    #[must_use]
    pub fn pulse_alpha(&self) -> f32 {
        PULSE_ALPHA_MIN + (self.phase.sin() + 1.0) / 2.0 * PULSE_ALPHA_SPAN
    }
}

fn unit_range(rng: &mut SeededRng, max: f32) -> f32 {
    if max > 0.0 {
        rng.range(0.0, max)
    } else {
        0.0
    }
}

fn speed(rng: &mut SeededRng, half: f32) -> f32 {
    if half > 0.0 {
        rng.range(-half, half)
    } else {
        0.0
    }
}

/// Integrate one axis with elastic reflection at `0` and `max`.
///
/// A coordinate that crosses a bound this frame is mirrored back inside.
/// One that was already outside (the surface shrank) only has its velocity
/// turned inward and drifts back on its own. If that step jumps over the
/// whole surface (narrower than one frame's travel) it lands on the far bound.
fn reflect(pos: &mut f32, vel: &mut f32, max: f32) {
    let was_inside = (0.0..=max).contains(pos);
    let mut next = *pos + *vel;
    if next < 0.0 {
        *vel = vel.abs();
        if was_inside {
            next = (-next).min(max);
        } else if *pos > max {
            next = 0.0;
        }
    } else if next > max {
        *vel = -vel.abs();
        if was_inside {
            next = (2.0 * max - next).max(0.0);
        } else if *pos < 0.0 {
            next = max;
        }
    }
    *pos = next;
}

/// Opacity of the line linking two particles `distance` apart.
///
/// Falls linearly from `max_alpha` at zero to nothing at `link_distance`.
#[must_use]
pub fn link_alpha(distance: f32, link_distance: f32, max_alpha: f32) -> f32 {
    if distance >= link_distance {
        0.0
    } else {
        max_alpha * (1.0 - distance / link_distance)
    }
}

/// The particle field animator.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    viewport: Size,
    config: ParticleConfig,
}

impl ParticleField {
    /// Populate a field covering `viewport`.
    pub fn new(viewport: Size, config: ParticleConfig, rng: &mut SeededRng) -> Self {
        let particles = (0..config.count)
            .map(|_| Particle::random(rng, viewport, &config))
            .collect();
        Self {
            particles,
            viewport,
            config,
        }
    }

    /// Build a field from explicit particles.
    pub fn from_particles(viewport: Size, config: ParticleConfig, particles: Vec<Particle>) -> Self {
        Self {
            particles,
            viewport,
            config,
        }
    }

    /// The particles.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of particles.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the field has no particles.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Configuration in use.
    pub fn config(&self) -> &ParticleConfig {
        &self.config
    }

    /// Every linked pair as `(i, j, alpha)` with `i < j`.
    pub fn links(&self) -> Vec<(usize, usize, f32)> {
        let mut links = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                let alpha = link_alpha(
                    a.position.distance(&b.position),
                    self.config.link_distance,
                    self.config.link_max_alpha,
                );
                if alpha > 0.0 {
                    links.push((i, j, alpha));
                }
            }
        }
        links
    }
}

impl Animator for ParticleField {
    fn name(&self) -> &'static str {
        "particles"
    }

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn resize(&mut self, size: Size) {
        self.viewport = size;
    }

    fn advance(&mut self) {
        let bounds = self.viewport;
        for particle in &mut self.particles {
            particle.step(bounds);
        }
    }

    fn paint(&self, theme: ThemeMode, canvas: &mut dyn Canvas) {
        let palette = ParticlePalette::for_mode(theme);

        for particle in &self.particles {
            canvas.fill_gradient_circle(
                particle.position,
                particle.radius,
                RadialGradient {
                    inner_radius: 0.0,
                    outer_radius: particle.radius * 2.0,
                    inner: palette.accent.with_alpha(particle.pulse_alpha()),
                    outer: palette.base.with_alpha(0.0),
                },
            );
        }

        for (i, j, alpha) in self.links() {
            canvas.draw_line(
                self.particles[i].position,
                self.particles[j].position,
                palette.accent.with_alpha(alpha),
                1.0,
            );
        }
    }
}
