//! Shared motion state and the `Movable` capability
//!
//! Every entity composes a [`Body`]: its rectangle, a heading in degrees and
//! a scalar speed. Entities opt into the default angular step or override it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::{normalize_degrees, polar_step};

/// Heading given to bodies that are never steered (points straight down)
pub const DEFAULT_DIRECTION: f32 = 270.0;

/// Position, heading and speed of an entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub rect: Rect,
    /// Heading in degrees, kept in [0, 360)
    direction: f32,
    /// Pixels per tick, >= 0
    pub speed: f32,
    /// Cached rectangle center, refreshed after every move
    center: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2, speed: f32) -> Self {
        let rect = Rect::new(pos, size);
        Self {
            rect,
            direction: DEFAULT_DIRECTION,
            speed,
            center: rect.center(),
        }
    }

    #[inline]
    pub fn direction(&self) -> f32 {
        self.direction
    }

    /// Set the heading; stored normalized to [0, 360)
    #[inline]
    pub fn set_direction(&mut self, degrees: f32) {
        self.direction = normalize_degrees(degrees);
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Displace the rectangle and refresh the center
    pub fn translate(&mut self, delta: Vec2) {
        self.rect.translate(delta);
        self.center = self.rect.center();
    }

    /// Place the top-left corner and refresh the center
    pub fn move_to(&mut self, pos: Vec2) {
        self.rect.pos = pos;
        self.center = self.rect.center();
    }

    /// Change the size and refresh the center
    pub fn resize(&mut self, size: Vec2) {
        self.rect.size = size;
        self.center = self.rect.center();
    }

    /// One polar step along the current heading. No bounds checking.
    pub fn step_angular(&mut self) {
        self.translate(polar_step(self.direction, self.speed));
    }
}

/// Something that moves once per tick
pub trait Movable {
    fn body(&self) -> &Body;
    fn body_mut(&mut self) -> &mut Body;

    /// Advance one tick. Defaults to a polar step along the heading.
    fn advance(&mut self) {
        self.body_mut().step_angular();
    }

    #[inline]
    fn rect(&self) -> &Rect {
        &self.body().rect
    }
}
