//! Falling pickups

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::arena::EntityId;
use super::body::{Body, Movable};
use super::event::GameEvent;
use super::paddle::Paddle;
use crate::renderer::{Color, Surface};
use crate::settings::Settings;
use crate::OFF_SCREEN;

/// Paddle width multiplier for [`ItemEffect::WidenPaddle`]
pub const WIDEN_FACTOR: f32 = 1.25;
/// Paddle width multiplier for [`ItemEffect::NarrowPaddle`]
pub const NARROW_FACTOR: f32 = 0.8;

/// What happens when an item reaches the paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemEffect {
    WidenPaddle,
    NarrowPaddle,
    ExtraLife,
}

impl ItemEffect {
    pub const ALL: [ItemEffect; 3] = [
        ItemEffect::WidenPaddle,
        ItemEffect::NarrowPaddle,
        ItemEffect::ExtraLife,
    ];

    /// Uniformly pick an effect
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// The part of the effect that lands on the paddle itself
    pub fn apply_to_paddle(self, paddle: &mut Paddle) {
        match self {
            ItemEffect::WidenPaddle => paddle.scale_width(WIDEN_FACTOR),
            ItemEffect::NarrowPaddle => paddle.scale_width(NARROW_FACTOR),
            ItemEffect::ExtraLife => {}
        }
    }
}

/// A pickup that drops straight down
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub body: Body,
    pub color: Color,
    /// `None` is a valid, inert pickup
    pub effect: Option<ItemEffect>,
    playfield_height: f32,
}

impl Item {
    pub fn new(pos: Vec2, effect: Option<ItemEffect>, settings: &Settings) -> Self {
        Self {
            body: Body::new(pos, settings.item_size, settings.item_speed),
            color: settings.item_color,
            effect,
            playfield_height: settings.playfield_height,
        }
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_rect(self.body.rect, self.color);
    }

    /// Report a paddle hit once and park the item off-screen.
    ///
    /// Once parked the item can no longer overlap the paddle, so a second
    /// call never reports again.
    pub fn check_paddle_contact(&mut self, id: EntityId, paddle: &Paddle) -> Option<GameEvent> {
        if !self.body.rect.intersects(paddle.rect()) {
            return None;
        }
        self.body.move_to(OFF_SCREEN);
        Some(GameEvent::ItemCollected {
            item: id,
            effect: self.effect,
        })
    }

    /// True once the top edge has dropped below the playfield
    pub fn is_off_screen(&self) -> bool {
        self.body.rect.top() > self.playfield_height
    }
}

impl Movable for Item {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    /// Straight down, whatever the heading says
    fn advance(&mut self) {
        let speed = self.body.speed;
        self.body.translate(Vec2::new(0.0, speed));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_falls_straight_down() {
        let settings = Settings::default();
        let mut item = Item::new(Vec2::new(100.0, 100.0), None, &settings);
        item.body.set_direction(45.0);
        item.advance();
        item.advance();
        assert_eq!(item.rect().pos, Vec2::new(100.0, 104.0));
    }

    #[test]
    fn test_paddle_contact_fires_once() {
        let settings = Settings::default();
        let paddle = Paddle::new(&settings);
        let mut item = Item::new(Vec2::new(380.0, 540.0), Some(ItemEffect::ExtraLife), &settings);

        let first = item.check_paddle_contact(4, &paddle);
        assert_eq!(
            first,
            Some(GameEvent::ItemCollected {
                item: 4,
                effect: Some(ItemEffect::ExtraLife)
            })
        );
        assert_eq!(item.rect().pos, OFF_SCREEN);
        for _ in 0..5 {
            assert_eq!(item.check_paddle_contact(4, &paddle), None);
        }
    }

    #[test]
    fn test_inert_item_still_collected() {
        let settings = Settings::default();
        let paddle = Paddle::new(&settings);
        let mut item = Item::new(Vec2::new(380.0, 540.0), None, &settings);
        assert!(matches!(
            item.check_paddle_contact(0, &paddle),
            Some(GameEvent::ItemCollected { effect: None, .. })
        ));
    }

    #[test]
    fn test_off_screen_boundary() {
        let settings = Settings::default();
        assert!(!Item::new(Vec2::new(0.0, 600.0), None, &settings).is_off_screen());
        assert!(Item::new(Vec2::new(0.0, 600.5), None, &settings).is_off_screen());
        // parked items sit above the playfield, not below it
        assert!(!Item::new(OFF_SCREEN, None, &settings).is_off_screen());
    }

    #[test]
    fn test_effects_on_paddle() {
        let settings = Settings::default();
        let mut paddle = Paddle::new(&settings);
        ItemEffect::WidenPaddle.apply_to_paddle(&mut paddle);
        assert_eq!(paddle.width(), 125.0);
        ItemEffect::ExtraLife.apply_to_paddle(&mut paddle);
        assert_eq!(paddle.width(), 125.0);
        ItemEffect::NarrowPaddle.apply_to_paddle(&mut paddle);
        assert!((paddle.width() - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_random_effect_covers_all() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut seen = [false; 3];
        for _ in 0..100 {
            let effect = ItemEffect::random(&mut rng);
            let idx = ItemEffect::ALL.iter().position(|e| *e == effect).unwrap_or(0);
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
