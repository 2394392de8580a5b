//! The ball and its contact rules
//!
//! Rebounds are heuristic angle rewrites, not reflections about a surface
//! normal:
//! - side wall: `180 - d`
//! - top wall: `360 - d`
//! - paddle: `360 - d` plus an integer jitter in [-5, 5]
//! - block: `d + 180`
//!
//! All results are stored normalized to [0, 360). Contacts within one tick
//! compound in call order (walls, then paddle, then blocks).

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::block::Block;
use super::body::{Body, Movable};
use super::event::GameEvent;
use super::paddle::Paddle;
use crate::renderer::{Color, Surface};
use crate::settings::Settings;

/// Half-width of the launch cone around straight down (degrees)
pub const LAUNCH_SPREAD: i32 = 45;
/// Launch cone center
pub const LAUNCH_DIRECTION: i32 = 90;
/// Largest random tweak applied on a paddle hit (degrees)
pub const PADDLE_JITTER: i32 = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub body: Body,
    pub color: Color,
    /// Damage multiplier; every block still breaks in one hit
    pub power: f32,
    playfield: Vec2,
}

impl Ball {
    /// Fresh ball at the configured spawn point, heading somewhere in the
    /// launch cone.
    pub fn new<R: Rng + ?Sized>(settings: &Settings, rng: &mut R) -> Self {
        let offset = rng.random_range(-LAUNCH_SPREAD..=LAUNCH_SPREAD);
        let direction = (LAUNCH_DIRECTION + offset) as f32;
        Self::with_direction(settings, settings.ball_pos, direction)
    }

    /// Ball with an explicit position and heading
    pub fn with_direction(settings: &Settings, pos: Vec2, direction: f32) -> Self {
        let mut body = Body::new(pos, settings.ball_size, settings.ball_speed);
        body.set_direction(direction);
        Self {
            body,
            color: settings.ball_color,
            power: 1.0,
            playfield: settings.playfield(),
        }
    }

    #[inline]
    pub fn direction(&self) -> f32 {
        self.body.direction()
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_ellipse(self.body.rect, self.color);
    }

    /// Rebound off the side and top walls. Touching counts as contact.
    ///
    /// A corner contact applies the side rule and then the top rule.
    pub fn bounce_off_walls(&mut self) {
        let rect = self.body.rect;
        if rect.left() <= 0.0 || rect.right() >= self.playfield.x {
            self.body.set_direction(180.0 - self.direction());
            log::debug!("side wall -> {:.1}°", self.direction());
        }
        if rect.top() <= 0.0 {
            self.body.set_direction(360.0 - self.direction());
            log::debug!("top wall -> {:.1}°", self.direction());
        }
    }

    /// Rebound off the paddle with a small random jitter. Returns true on contact.
    pub fn bounce_off_paddle<R: Rng + ?Sized>(&mut self, paddle: &Paddle, rng: &mut R) -> bool {
        if !self.body.rect.intersects(paddle.rect()) {
            return false;
        }
        let jitter = rng.random_range(-PADDLE_JITTER..=PADDLE_JITTER);
        self.body
            .set_direction(360.0 - self.direction() + jitter as f32);
        log::debug!("paddle (jitter {jitter}) -> {:.1}°", self.direction());
        true
    }

    /// Destroy the first live block the ball overlaps and reverse heading.
    ///
    /// At most one block breaks per call, even when several overlap. The hit
    /// block is marked dead and its arena slot retired in the same step.
    pub fn resolve_block_collision(&mut self, blocks: &mut Arena<Block>) -> Option<GameEvent> {
        let rect = self.body.rect;
        let id = blocks
            .iter_alive()
            .find(|(_, b)| b.is_alive() && rect.intersects(b.rect()))
            .map(|(id, _)| id)?;
        let event = blocks.get_mut(id)?.collide(id);
        blocks.retire(id);
        self.body.set_direction(self.direction() + 180.0);
        log::debug!("block {id} -> {:.1}°", self.direction());
        event
    }

    /// False once the top edge has dropped below the playfield
    pub fn is_alive(&self) -> bool {
        self.body.rect.top() <= self.playfield.y
    }
}

impl Movable for Ball {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}
