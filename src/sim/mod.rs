//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, no wall-clock time
//! - Seeded RNG only, consumed in a fixed order
//! - Stable iteration order (arena insertion order)
//! - No rendering backend or platform dependencies

pub mod arena;
pub mod ball;
pub mod block;
pub mod body;
pub mod event;
pub mod item;
pub mod level;
pub mod paddle;
pub mod rect;
pub mod session;

pub use arena::{Arena, EntityId};
pub use ball::Ball;
pub use block::Block;
pub use body::{Body, Movable};
pub use event::GameEvent;
pub use item::{Item, ItemEffect};
pub use level::build_wall;
pub use paddle::{Key, KeyEvent, Paddle};
pub use rect::Rect;
pub use session::{GamePhase, GameSession, TickInput, tick};
