// Particle field: drifting dots with reflective edges and a one-shot glow
// pulse when the pointer first comes close.

use super::constants::*;
use super::surface::{Rgba, Surface};
use glam::Vec2;
use rand::Rng;

/// Glow lifecycle of a single particle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Glow {
    #[default]
    Idle,
    /// `frame` counts ticks since the pulse started, `0..GLOW_DURATION_FRAMES`.
    Glowing { frame: u32 },
}

impl Glow {
    #[inline]
    pub fn is_glowing(self) -> bool {
        matches!(self, Glow::Glowing { .. })
    }

    /// Elapsed fraction of the pulse in `[0, 1)`; `0` when idle.
    pub fn progress(self) -> f32 {
        match self {
            Glow::Idle => 0.0,
            Glow::Glowing { frame } => frame as f32 / GLOW_DURATION_FRAMES as f32,
        }
    }

    pub fn radius(self) -> f32 {
        match self {
            Glow::Idle => 0.0,
            Glow::Glowing { .. } => GLOW_MAX_RADIUS * ease_in_out_cubic(self.progress()),
        }
    }

    fn step(self) -> Glow {
        match self {
            Glow::Idle => Glow::Idle,
            Glow::Glowing { frame } => {
                let next = frame + 1;
                if next >= GLOW_DURATION_FRAMES {
                    Glow::Idle
                } else {
                    Glow::Glowing { frame: next }
                }
            }
        }
    }
}

#[inline]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub glow: Glow,
    /// Whether the pointer was inside `POINTER_PROXIMITY` on the previous frame.
    pub near_pointer: bool,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            size: PARTICLE_SIZE,
            glow: Glow::Idle,
            near_pointer: false,
        }
    }

    pub fn random<R: Rng + ?Sized>(bounds: Vec2, rng: &mut R) -> Self {
        let half = PARTICLE_SPEED_SPAN * 0.5;
        let pos = Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y);
        let vel = Vec2::new(rng.gen_range(-half..half), rng.gen_range(-half..half));
        Self::new(pos, vel)
    }

    pub fn advance(&mut self, bounds: Vec2, pointer: Option<Vec2>) {
        self.pos += self.vel;

        // Reflect only; a particle past the edge drifts back in on its own.
        if self.pos.x > bounds.x || self.pos.x < 0.0 {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y > bounds.y || self.pos.y < 0.0 {
            self.vel.y = -self.vel.y;
        }

        if let Some(p) = pointer {
            let near = self.pos.distance(p) < POINTER_PROXIMITY;
            if near && !self.near_pointer {
                self.glow = Glow::Glowing { frame: 0 };
            }
            self.near_pointer = near;
        }

        self.glow = self.glow.step();
    }

    /// Colour of the base dot for the given pointer position.
    pub fn color(&self, pointer: Option<Vec2>) -> Rgba {
        let Some(p) = pointer else {
            return Rgba::rgb(WHITE_RGB, 1.0);
        };
        let glowing = self.glow.is_glowing();
        let base = if glowing { ACCENT_RGB } else { WHITE_RGB };
        let dist = self.pos.distance(p);
        if dist < POINTER_PROXIMITY {
            let brightness = 1.0 - dist / POINTER_PROXIMITY;
            let alpha = DOT_DIM_ALPHA + brightness * DOT_BRIGHTNESS_SPAN;
            if glowing {
                Rgba::rgb(ACCENT_RGB, alpha)
            } else {
                Rgba::rgb(WHITE_RGB, alpha).mix_rgb(ACCENT_RGB, brightness * DOT_NEAR_TINT)
            }
        } else {
            Rgba::rgb(base, DOT_DIM_ALPHA)
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, pointer: Option<Vec2>) {
        let radius = self.glow.radius();
        if self.glow.is_glowing() && radius > 0.0 {
            let alpha = GLOW_BASE_ALPHA * (1.0 - self.glow.progress().sqrt());
            surface.radial_glow(self.pos, radius, Rgba::rgb(ACCENT_RGB, alpha));
        }
        surface.dot(self.pos, self.size, self.color(pointer));
    }
}

/// Owns every particle of one mounted background.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Vec2,
}

impl ParticleField {
    pub fn initialize<R: Rng + ?Sized>(count: usize, bounds: Vec2, rng: &mut R) -> Self {
        let particles = (0..count).map(|_| Particle::random(bounds, rng)).collect();
        Self { particles, bounds }
    }

    pub fn from_particles(particles: Vec<Particle>, bounds: Vec2) -> Self {
        Self { particles, bounds }
    }

    /// Hard reset: the old set is dropped, never reflowed.
    pub fn resize<R: Rng + ?Sized>(&mut self, bounds: Vec2, count: usize, rng: &mut R) {
        *self = Self::initialize(count, bounds, rng);
        log::debug!(
            "[field] reset count={} bounds={:.0}x{:.0}",
            count,
            bounds.x,
            bounds.y
        );
    }

    pub fn advance(&mut self, pointer: Option<Vec2>) {
        let bounds = self.bounds;
        for p in &mut self.particles {
            p.advance(bounds, pointer);
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, pointer: Option<Vec2>) {
        for p in &self.particles {
            p.draw(surface, pointer);
        }
    }

    /// Forget pointer contact so the next approach starts a fresh glow.
    pub fn release_pointer(&mut self) {
        for p in &mut self.particles {
            p.near_pointer = false;
        }
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
