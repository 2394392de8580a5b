//! The player's paddle

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Body, Movable};
use crate::renderer::{Color, Surface};
use crate::settings::Settings;

/// Smallest paddle width reachable through item effects, relative to the configured width
pub const MIN_WIDTH_FACTOR: f32 = 0.5;
/// Largest paddle width reachable through item effects, relative to the configured width
pub const MAX_WIDTH_FACTOR: f32 = 2.0;

/// Keys the paddle reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    /// Any other key code; ignored
    Other(u32),
}

/// A discrete key event (one per key-repeat tick)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: Key,
}

impl KeyEvent {
    pub const LEFT: KeyEvent = KeyEvent { key: Key::Left };
    pub const RIGHT: KeyEvent = KeyEvent { key: Key::Right };
}

/// Horizontal-only paddle driven by key events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub body: Body,
    pub color: Color,
    start_pos: Vec2,
    base_size: Vec2,
    playfield_width: f32,
}

impl Paddle {
    pub fn new(settings: &Settings) -> Self {
        Self {
            body: Body::new(settings.paddle_pos, settings.paddle_size, settings.paddle_speed),
            color: settings.paddle_color,
            start_pos: settings.paddle_pos,
            base_size: settings.paddle_size,
            playfield_width: settings.playfield_width,
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_rect(self.body.rect, self.color);
    }

    /// Shift by one speed step toward the pressed side, if not already
    /// at that edge of the playfield.
    pub fn handle_input(&mut self, event: KeyEvent) {
        let rect = self.body.rect;
        let step = self.body.speed;
        match event.key {
            Key::Left if rect.left() > 0.0 => self.body.translate(Vec2::new(-step, 0.0)),
            Key::Right if rect.right() < self.playfield_width => {
                self.body.translate(Vec2::new(step, 0.0))
            }
            _ => {}
        }
    }

    /// Current width
    #[inline]
    pub fn width(&self) -> f32 {
        self.body.rect.size.x
    }

    /// Scale the width about the current center, clamped to
    /// [`MIN_WIDTH_FACTOR`, `MAX_WIDTH_FACTOR`] of the configured width.
    pub fn scale_width(&mut self, factor: f32) {
        let min = self.base_size.x * MIN_WIDTH_FACTOR;
        let max = self.base_size.x * MAX_WIDTH_FACTOR;
        let width = (self.width() * factor).clamp(min, max);
        let center_x = self.body.center().x;
        self.body.resize(Vec2::new(width, self.body.rect.size.y));
        self.body
            .move_to(Vec2::new(center_x - width / 2.0, self.body.rect.pos.y));
    }

    /// Back to the configured position and size
    pub fn reset(&mut self) {
        self.body.resize(self.base_size);
        self.body.move_to(self.start_pos);
    }
}

impl Movable for Paddle {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    /// Only key events move the paddle
    fn advance(&mut self) {}
}
