//! Game session and the per-frame tick
//!
//! The session owns every entity plus the seeded RNG. [`tick`] is the frame
//! step an outer render/input loop calls once per frame.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::arena::Arena;
use super::ball::Ball;
use super::block::Block;
use super::body::Movable;
use super::event::GameEvent;
use super::item::{Item, ItemEffect};
use super::level::build_wall;
use super::paddle::{KeyEvent, Paddle};
use crate::renderer::Surface;
use crate::settings::Settings;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Frozen until the next pause toggle
    Paused,
    /// Every block destroyed
    Cleared,
    /// Out of lives
    GameOver,
}

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Key events delivered this frame, applied in order
    pub keys: Vec<KeyEvent>,
    /// Pause toggle
    pub pause: bool,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    /// Run seed for reproducibility
    pub seed: u64,
    pub settings: Settings,
    pub phase: GamePhase,
    pub lives: u32,
    pub score: u64,
    /// Ticks simulated while playing
    pub time_ticks: u64,
    pub paddle: Paddle,
    pub ball: Ball,
    pub blocks: Arena<Block>,
    pub items: Arena<Item>,
    rng: Pcg32,
    /// Events produced by the most recent tick
    events: Vec<GameEvent>,
}

impl GameSession {
    /// Build a session with a fresh wall; fails if the settings are unusable
    pub fn new(settings: Settings, seed: u64) -> Result<Self, String> {
        settings.validate()?;
        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = Ball::new(&settings, &mut rng);
        let session = Self {
            seed,
            phase: GamePhase::Playing,
            lives: settings.starting_lives,
            score: 0,
            time_ticks: 0,
            paddle: Paddle::new(&settings),
            ball,
            blocks: build_wall(&settings),
            items: Arena::new(),
            rng,
            events: Vec::new(),
            settings,
        };
        log::info!(
            "Session started: seed={}, blocks={}, lives={}",
            seed,
            session.blocks.live_count(),
            session.lives
        );
        Ok(session)
    }

    /// Start over: re-center the paddle, rebuild the wall, restore lives.
    /// The RNG stream carries on.
    pub fn reset(&mut self) {
        self.paddle.reset();
        self.blocks = build_wall(&self.settings);
        self.items.clear();
        self.ball = Ball::new(&self.settings, &mut self.rng);
        self.lives = self.settings.starting_lives;
        self.score = 0;
        self.time_ticks = 0;
        self.phase = GamePhase::Playing;
        self.events.clear();
        log::info!("Session reset");
    }

    /// Events produced by the most recent tick
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Draw live blocks, live items, the paddle and the ball
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        for (_, block) in self.blocks.iter_alive() {
            block.draw(surface);
        }
        for (_, item) in self.items.iter_alive() {
            item.draw(surface);
        }
        self.paddle.draw(surface);
        self.ball.draw(surface);
    }

    fn spawn_item(&mut self, pos: glam::Vec2) {
        let effect = ItemEffect::random(&mut self.rng);
        let id = self.items.insert(Item::new(pos, Some(effect), &self.settings));
        log::debug!("Item {id} ({effect:?}) dropped at {pos}");
    }

    /// Apply entity events: score, drops, item retirement and effects.
    /// Destroyed blocks are already retired by the ball's block scan.
    fn apply(&mut self, event: GameEvent) {
        match event {
            GameEvent::BlockDestroyed { position, .. } => {
                self.score += self.settings.block_score;
                if self.rng.random_bool(self.settings.item_drop_chance) {
                    self.spawn_item(position);
                }
            }
            GameEvent::ItemCollected { item, effect } => {
                self.items.retire(item);
                match effect {
                    Some(ItemEffect::ExtraLife) => {
                        self.lives += 1;
                        log::info!("Extra life! lives={}", self.lives);
                    }
                    Some(effect) => effect.apply_to_paddle(&mut self.paddle),
                    None => {}
                }
            }
            GameEvent::BallLost { .. } | GameEvent::LevelCleared | GameEvent::GameOver => {}
        }
    }
}

/// Advance the session by one frame
pub fn tick(session: &mut GameSession, input: &TickInput) {
    session.events.clear();

    if input.pause {
        match session.phase {
            GamePhase::Playing => session.phase = GamePhase::Paused,
            GamePhase::Paused => session.phase = GamePhase::Playing,
            _ => {}
        }
    }
    if session.phase != GamePhase::Playing {
        return;
    }

    session.time_ticks += 1;

    for key in &input.keys {
        session.paddle.handle_input(*key);
    }

    // Ball: walls, then paddle, then at most one block
    session.ball.advance();
    session.ball.bounce_off_walls();
    session
        .ball
        .bounce_off_paddle(&session.paddle, &mut session.rng);
    if let Some(event) = session.ball.resolve_block_collision(&mut session.blocks) {
        session.events.push(event);
    }

    // Items fall, get caught, or leave the screen
    for id in session.items.alive_ids() {
        let Some(item) = session.items.get_mut(id) else {
            continue;
        };
        item.advance();
        if let Some(event) = item.check_paddle_contact(id, &session.paddle) {
            session.events.push(event);
        } else if item.is_off_screen() {
            session.items.retire(id);
        }
    }

    // Pickups caught this frame count before the ball-loss check
    let pending = session.events.clone();
    for event in pending {
        session.apply(event);
    }

    if !session.ball.is_alive() {
        session.lives = session.lives.saturating_sub(1);
        session.events.push(GameEvent::BallLost {
            lives_left: session.lives,
        });
        if session.lives == 0 {
            session.phase = GamePhase::GameOver;
            session.events.push(GameEvent::GameOver);
            log::info!("Game over: score={}", session.score);
        } else {
            session.ball = Ball::new(&session.settings, &mut session.rng);
            log::info!("Ball lost, {} lives left", session.lives);
        }
    }

    if session.phase == GamePhase::Playing && session.blocks.live_count() == 0 {
        session.phase = GamePhase::Cleared;
        session.events.push(GameEvent::LevelCleared);
        log::info!(
            "Level cleared in {} ticks: score={}",
            session.time_ticks,
            session.score
        );
    }
}
