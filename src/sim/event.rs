//! Events emitted by entities during a tick
//!
//! Entities never reach back into the session. They report what happened and
//! the session applies the consequences after the per-frame pass.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arena::EntityId;
use super::item::ItemEffect;
use crate::renderer::Color;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A block was hit and destroyed
    BlockDestroyed {
        block: EntityId,
        /// Top-left corner before the block was parked off-screen
        position: Vec2,
        color: Color,
    },
    /// An item touched the paddle
    ItemCollected {
        item: EntityId,
        effect: Option<ItemEffect>,
    },
    /// The ball fell past the bottom edge
    BallLost { lives_left: u32 },
    /// Every block is destroyed
    LevelCleared,
    /// No lives remain
    GameOver,
}
