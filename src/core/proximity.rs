// Connecting lines between nearby particles and toward the pointer.

use super::constants::*;
use super::particles::Particle;
use super::surface::{Rgba, Surface};
use glam::Vec2;

/// Line opacity for a given length: linear fade reaching zero at `fade`,
/// scaled by `scale` and clamped so long lines never go negative.
#[inline]
pub fn link_alpha(distance: f32, fade: f32, scale: f32) -> f32 {
    if fade <= 0.0 {
        return 0.0;
    }
    (1.0 - distance / fade).clamp(0.0, 1.0) * scale
}

/// Particle-to-particle lines for every unordered pair closer than
/// `LINK_DISTANCE`. Fully transparent lines are not emitted.
pub fn draw_particle_links<S: Surface + ?Sized>(particles: &[Particle], surface: &mut S) {
    let max_sq = LINK_DISTANCE * LINK_DISTANCE;
    for (i, a) in particles.iter().enumerate() {
        for b in &particles[i + 1..] {
            let d_sq = a.pos.distance_squared(b.pos);
            if d_sq >= max_sq {
                continue;
            }
            let alpha = link_alpha(d_sq.sqrt(), LINK_FADE_DISTANCE, PARTICLE_LINK_ALPHA);
            if alpha > 0.0 {
                surface.line(a.pos, b.pos, Rgba::rgb(WHITE_RGB, alpha));
            }
        }
    }
}

pub fn draw_pointer_links<S: Surface + ?Sized>(
    particles: &[Particle],
    pointer: Vec2,
    surface: &mut S,
) {
    let max_sq = LINK_DISTANCE * LINK_DISTANCE;
    for p in particles {
        let d_sq = p.pos.distance_squared(pointer);
        if d_sq >= max_sq {
            continue;
        }
        let alpha = link_alpha(d_sq.sqrt(), LINK_FADE_DISTANCE, POINTER_LINK_ALPHA);
        if alpha > 0.0 {
            surface.line(p.pos, pointer, Rgba::rgb(WHITE_RGB, alpha));
        }
    }
}

#[inline]
pub fn draw_pointer_glow<S: Surface + ?Sized>(pointer: Vec2, surface: &mut S) {
    surface.radial_glow(
        pointer,
        POINTER_GLOW_RADIUS,
        Rgba::rgb(WHITE_RGB, POINTER_GLOW_ALPHA),
    );
}
