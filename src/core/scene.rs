// One background instance: the particle field plus the pointer it reacts to.

use super::config::FieldParams;
use super::particles::ParticleField;
use super::proximity;
use super::surface::Surface;
use glam::Vec2;
use rand::Rng;

pub struct BackgroundScene<R: Rng> {
    pub field: ParticleField,
    pub params: FieldParams,
    pointer: Option<Vec2>,
    rng: R,
}

impl<R: Rng> BackgroundScene<R> {
    pub fn new(bounds: Vec2, params: FieldParams, mut rng: R) -> Self {
        let count = params.particle_count(bounds.x);
        let field = ParticleField::initialize(count, bounds, &mut rng);
        Self {
            field,
            params,
            pointer: None,
            rng,
        }
    }

    #[inline]
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.pointer = Some(pos);
    }

    pub fn pointer_left(&mut self) {
        self.pointer = None;
        self.field.release_pointer();
    }

    /// Recreate the whole field for new viewport dimensions.
    pub fn resize(&mut self, bounds: Vec2) {
        let count = self.params.particle_count(bounds.x);
        self.field.resize(bounds, count, &mut self.rng);
    }

    /// Advance the simulation by one frame and paint it.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let bounds = self.field.bounds();
        surface.clear(bounds.x, bounds.y);

        if let Some(p) = self.pointer {
            proximity::draw_pointer_glow(p, surface);
        }

        self.field.advance(self.pointer);
        self.field.draw(surface, self.pointer);

        let particles = self.field.particles();
        proximity::draw_particle_links(particles, surface);
        if let Some(p) = self.pointer {
            proximity::draw_pointer_links(particles, p, surface);
        }
    }
}
