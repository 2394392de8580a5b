//! Brick Breaker - gameplay core of a breakout-style arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, motion, collision rules, session)
//! - `renderer`: Backend-agnostic drawing surface and vertex tessellation
//! - `settings`: Immutable game configuration

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Top-left position used to park destroyed blocks and collected items
/// outside the playfield without removing them from their arena.
pub const OFF_SCREEN: Vec2 = Vec2::new(-100.0, -100.0);

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if a >= 360.0 { 0.0 } else { a }
}

/// Screen-space displacement for one step of `speed` along `direction` degrees.
///
/// 0° points along +x and angles grow counter-clockwise, but screen y grows
/// downward, so the y component is negated.
#[inline]
pub fn polar_step(direction: f32, speed: f32) -> Vec2 {
    let theta = direction.to_radians();
    Vec2::new(speed * theta.cos(), -speed * theta.sin())
}
