//! Game settings
//!
//! Every tunable constant the entities need, passed by reference to
//! constructors instead of living in a shared global module.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::renderer::Color;

/// Immutable game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Playfield ===
    pub playfield_width: f32,
    pub playfield_height: f32,

    // === Paddle ===
    pub paddle_color: Color,
    /// Top-left corner at session start
    pub paddle_pos: Vec2,
    pub paddle_size: Vec2,
    /// Pixels moved per key event
    pub paddle_speed: f32,

    // === Ball ===
    pub ball_color: Color,
    /// Top-left corner of a freshly spawned ball
    pub ball_pos: Vec2,
    pub ball_size: Vec2,
    /// Pixels moved per tick
    pub ball_speed: f32,

    // === Items ===
    pub item_color: Color,
    pub item_size: Vec2,
    /// Pixels fallen per tick
    pub item_speed: f32,

    // === Blocks ===
    pub block_size: Vec2,
    pub block_rows: u32,
    pub block_columns: u32,
    /// Spacing between neighbouring blocks
    pub block_gap: f32,
    /// Y of the top row
    pub block_top: f32,

    // === Rules ===
    pub starting_lives: u32,
    pub block_score: u64,
    /// Probability (0-1) that a destroyed block drops an item
    pub item_drop_chance: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playfield_width: 800.0,
            playfield_height: 600.0,

            paddle_color: Color::WHITE,
            paddle_pos: Vec2::new(350.0, 550.0),
            paddle_size: Vec2::new(100.0, 10.0),
            paddle_speed: 20.0,

            ball_color: Color::WHITE,
            ball_pos: Vec2::new(400.0, 300.0),
            ball_size: Vec2::new(10.0, 10.0),
            ball_speed: 5.0,

            item_color: Color::rgb(255, 215, 0),
            item_size: Vec2::new(15.0, 15.0),
            item_speed: 2.0,

            block_size: Vec2::new(70.0, 20.0),
            block_rows: 5,
            block_columns: 10,
            block_gap: 5.0,
            block_top: 50.0,

            starting_lives: 3,
            block_score: 10,
            item_drop_chance: 0.2,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Playfield size as a vector
    #[inline]
    pub fn playfield(&self) -> Vec2 {
        Vec2::new(self.playfield_width, self.playfield_height)
    }

    /// Sanity-check the configuration before building a session
    pub fn validate(&self) -> Result<(), String> {
        if !(self.playfield_width > 0.0 && self.playfield_height > 0.0) {
            return Err("playfield dimensions must be > 0".to_string());
        }
        for (name, speed) in [
            ("paddle_speed", self.paddle_speed),
            ("ball_speed", self.ball_speed),
            ("item_speed", self.item_speed),
        ] {
            if !speed.is_finite() || speed < 0.0 {
                return Err(format!("{name} must be finite and >= 0"));
            }
        }
        for (name, size) in [
            ("paddle_size", self.paddle_size),
            ("ball_size", self.ball_size),
            ("item_size", self.item_size),
            ("block_size", self.block_size),
        ] {
            if size.x < 0.0 || size.y < 0.0 {
                return Err(format!("{name} must not be negative"));
            }
            if size.x > self.playfield_width || size.y > self.playfield_height {
                return Err(format!("{name} must fit inside the playfield"));
            }
        }
        if !(0.0..=1.0).contains(&self.item_drop_chance) {
            return Err("item_drop_chance must be within 0..=1".to_string());
        }
        if self.starting_lives == 0 {
            return Err("starting_lives must be at least 1".to_string());
        }
        Ok(())
    }
}
