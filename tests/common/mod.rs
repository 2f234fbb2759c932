// Shared host-side harness. The main crate is wasm-only, so the
// platform-free modules are included directly.

#![allow(dead_code)]

pub mod core {
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod config {
        include!("../../src/core/config.rs");
    }
    pub mod surface {
        include!("../../src/core/surface.rs");
    }
    pub mod particles {
        include!("../../src/core/particles.rs");
    }
    pub mod proximity {
        include!("../../src/core/proximity.rs");
    }
    pub mod scene {
        include!("../../src/core/scene.rs");
    }
    pub mod scroll {
        include!("../../src/core/scroll.rs");
    }
    pub mod nav {
        include!("../../src/core/nav.rs");
    }
}

use self::core::surface::{Rgba, Surface};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear { width: f32, height: f32 },
    Glow { center: Vec2, radius: f32, color: Rgba },
    Dot { center: Vec2, radius: f32, color: Rgba },
    Line { from: Vec2, to: Vec2, color: Rgba },
}

#[derive(Default)]
pub struct Recorder {
    pub ops: Vec<DrawOp>,
}

impl Recorder {
    pub fn dots(&self) -> Vec<(Vec2, Rgba)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Dot { center, color, .. } => Some((*center, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<(Vec2, Vec2, Rgba)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line { from, to, color } => Some((*from, *to, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn glows(&self) -> Vec<(Vec2, f32, Rgba)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Glow {
                    center,
                    radius,
                    color,
                } => Some((*center, *radius, *color)),
                _ => None,
            })
            .collect()
    }

    /// Whether any line has `p` as one of its endpoints.
    pub fn touches(&self, p: Vec2) -> bool {
        self.lines().iter().any(|(a, b, _)| *a == p || *b == p)
    }
}

impl Surface for Recorder {
    fn clear(&mut self, width: f32, height: f32) {
        self.ops.push(DrawOp::Clear { width, height });
    }

    fn radial_glow(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ops.push(DrawOp::Glow {
            center,
            radius,
            color,
        });
    }

    fn dot(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ops.push(DrawOp::Dot {
            center,
            radius,
            color,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Rgba) {
        self.ops.push(DrawOp::Line { from, to, color });
    }
}
