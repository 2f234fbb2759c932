// Host-side tests for connecting lines and the pointer glow.

mod common;

use common::core::constants::*;
use common::core::particles::Particle;
use common::core::proximity::*;
use common::Recorder;
use glam::Vec2;

fn at(x: f32, y: f32) -> Particle {
    Particle::new(Vec2::new(x, y), Vec2::ZERO)
}

#[test]
fn link_alpha_fades_linearly_and_clamps() {
    assert!((link_alpha(0.0, 100.0, 0.4) - 0.4).abs() < 1e-6);
    assert!((link_alpha(50.0, 100.0, 0.4) - 0.2).abs() < 1e-6);
    assert_eq!(link_alpha(100.0, 100.0, 0.4), 0.0);
    // Beyond the fade distance the raw formula would go negative.
    assert_eq!(link_alpha(150.0, 100.0, 0.4), 0.0);
    assert_eq!(link_alpha(199.0, 100.0, 0.5), 0.0);
}

#[test]
fn link_alpha_with_degenerate_fade_is_zero() {
    assert_eq!(link_alpha(10.0, 0.0, 1.0), 0.0);
}

#[test]
fn close_pairs_get_one_line_each() {
    let particles = vec![at(0.0, 0.0), at(30.0, 0.0), at(0.0, 40.0)];
    let mut rec = Recorder::default();
    draw_particle_links(&particles, &mut rec);
    // Three unordered pairs, all well inside the fade distance.
    let lines = rec.lines();
    assert_eq!(lines.len(), 3);
    for (_, _, c) in &lines {
        assert!(c.a > 0.0 && c.a <= PARTICLE_LINK_ALPHA);
        assert_eq!([c.r, c.g, c.b], WHITE_RGB);
    }
}

#[test]
fn closer_pairs_are_more_opaque() {
    let particles = vec![at(0.0, 0.0), at(20.0, 0.0), at(0.0, 80.0)];
    let mut rec = Recorder::default();
    draw_particle_links(&particles, &mut rec);
    let alpha_of = |a: Vec2, b: Vec2| {
        rec.lines()
            .into_iter()
            .find(|(f, t, _)| (*f == a && *t == b) || (*f == b && *t == a))
            .map(|(_, _, c)| c.a)
            .unwrap()
    };
    let near = alpha_of(Vec2::new(0.0, 0.0), Vec2::new(20.0, 0.0));
    let far = alpha_of(Vec2::new(0.0, 0.0), Vec2::new(0.0, 80.0));
    assert!(near > far);
}

#[test]
fn pairs_past_fade_distance_emit_no_visible_line() {
    let particles = vec![at(0.0, 0.0), at(150.0, 0.0), at(1000.0, 1000.0)];
    let mut rec = Recorder::default();
    draw_particle_links(&particles, &mut rec);
    assert!(rec.lines().is_empty());
}

#[test]
fn pointer_lines_only_for_nearby_particles() {
    let particles = vec![at(10.0, 0.0), at(90.0, 0.0), at(500.0, 0.0)];
    let mut rec = Recorder::default();
    draw_pointer_links(&particles, Vec2::ZERO, &mut rec);
    let lines = rec.lines();
    assert_eq!(lines.len(), 2);
    for (_, to, c) in &lines {
        assert_eq!(*to, Vec2::ZERO);
        assert!(c.a > 0.0 && c.a <= POINTER_LINK_ALPHA);
    }
    assert!(lines[0].2.a > lines[1].2.a);
}

#[test]
fn pointer_glow_is_a_soft_white_disc() {
    let mut rec = Recorder::default();
    draw_pointer_glow(Vec2::new(5.0, 6.0), &mut rec);
    let glows = rec.glows();
    assert_eq!(glows.len(), 1);
    let (center, radius, color) = glows[0];
    assert_eq!(center, Vec2::new(5.0, 6.0));
    assert_eq!(radius, POINTER_GLOW_RADIUS);
    assert_eq!([color.r, color.g, color.b], WHITE_RGB);
    assert!((color.a - POINTER_GLOW_ALPHA).abs() < 1e-6);
}

#[test]
fn no_particles_no_lines() {
    let mut rec = Recorder::default();
    draw_particle_links(&[], &mut rec);
    draw_pointer_links(&[], Vec2::ZERO, &mut rec);
    assert!(rec.ops.is_empty());
}
