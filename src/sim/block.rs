//! Destructible blocks

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::EntityId;
use super::body::{Body, Movable};
use super::event::GameEvent;
use crate::renderer::{Color, Surface};
use crate::settings::Settings;
use crate::OFF_SCREEN;

/// A static obstacle, destroyed by a single hit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub body: Body,
    pub color: Color,
    alive: bool,
}

impl Block {
    /// Place a live block with the configured block size and zero speed
    pub fn new(color: Color, pos: Vec2, settings: &Settings) -> Self {
        Self {
            body: Body::new(pos, settings.block_size, 0.0),
            color,
            alive: true,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_rect(self.body.rect, self.color);
    }

    /// Destroy the block: mark it dead, park it off-screen and report it.
    ///
    /// A dead block is never resurrected; calling this again returns `None`
    /// and changes nothing. A block stored in an [`Arena`] must have its
    /// slot retired as well; `Ball::resolve_block_collision` does both.
    ///
    /// [`Arena`]: super::arena::Arena
    pub fn collide(&mut self, id: EntityId) -> Option<GameEvent> {
        if !self.alive {
            log::warn!("collide() on dead block {id} ignored");
            return None;
        }
        let position = self.body.rect.pos;
        self.alive = false;
        self.body.move_to(OFF_SCREEN);
        Some(GameEvent::BlockDestroyed {
            block: id,
            position,
            color: self.color,
        })
    }
}

impl Movable for Block {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}
