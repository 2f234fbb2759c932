// Drawing seam between the simulation and whatever paints it.
//
// The browser implements [`Surface`] on top of a 2D canvas context; tests
// implement it with a recorder.

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(rgb: [u8; 3], a: f32) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a,
        }
    }

    /// Linear blend of the colour channels toward `to`; alpha is kept.
    pub fn mix_rgb(self, to: [u8; 3], t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let ch = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Self {
            r: ch(self.r, to[0]),
            g: ch(self.g, to[1]),
            b: ch(self.b, to[2]),
            a: self.a,
        }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn to_css(self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

pub trait Surface {
    /// Wipe the whole drawing area.
    fn clear(&mut self, width: f32, height: f32);
    /// Filled disc fading from `color` at the centre to transparent at `radius`.
    fn radial_glow(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn dot(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn line(&mut self, from: Vec2, to: Vec2, color: Rgba);
}
