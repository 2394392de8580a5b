//! Brick Breaker headless runner
//!
//! Drives a seeded session with an auto-pilot paddle and logs what happens.
//! Windowing, audio and real input belong to the embedding frontend.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::Parser;

use brick_breaker::Settings;
use brick_breaker::renderer::VertexSurface;
use brick_breaker::sim::{GameEvent, GamePhase, GameSession, KeyEvent, Movable, TickInput, tick};

#[derive(Parser, Debug)]
#[command(about = "Run a headless Brick Breaker session with an auto-pilot paddle", version)]
struct Args {
    /// JSON settings file (missing fields use defaults)
    #[arg(long)]
    settings: Option<PathBuf>,
    /// RNG seed
    #[arg(long, default_value_t = 12345)]
    seed: u64,
    /// Stop after this many frames
    #[arg(long, default_value_t = 20_000)]
    max_ticks: u64,
}

fn load_settings(path: Option<&PathBuf>) -> Result<Settings> {
    let Some(path) = path else {
        return Ok(Settings::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading settings from {}", path.display()))?;
    let settings = Settings::from_json(&json)
        .with_context(|| format!("parsing settings from {}", path.display()))?;
    log::info!("Loaded settings from {}", path.display());
    Ok(settings)
}

/// Press toward the ball, one key event per frame
fn autopilot(session: &GameSession) -> TickInput {
    let ball_x = session.ball.body().center().x;
    let paddle_x = session.paddle.body().center().x;
    let dead_zone = session.paddle.body().speed / 2.0;

    let keys = if ball_x < paddle_x - dead_zone {
        vec![KeyEvent::LEFT]
    } else if ball_x > paddle_x + dead_zone {
        vec![KeyEvent::RIGHT]
    } else {
        Vec::new()
    };
    TickInput { keys, pause: false }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    log::info!("Brick Breaker (headless) starting...");

    let settings = load_settings(args.settings.as_ref())?;
    let mut session = GameSession::new(settings, args.seed).map_err(|e| anyhow!(e))?;
    let mut surface = VertexSurface::default();

    while session.time_ticks < args.max_ticks && session.phase == GamePhase::Playing {
        let input = autopilot(&session);
        tick(&mut session, &input);

        for event in session.events() {
            match event {
                GameEvent::BlockDestroyed { block, .. } => {
                    log::debug!("Block {block} destroyed, score={}", session.score)
                }
                GameEvent::ItemCollected { effect, .. } => log::info!("Collected {effect:?}"),
                _ => {}
            }
        }

        surface.clear();
        session.draw(&mut surface);
    }

    log::info!(
        "Finished after {} ticks: phase={:?} score={} lives={} blocks left={} ({} vertices last frame)",
        session.time_ticks,
        session.phase,
        session.score,
        session.lives,
        session.blocks.live_count(),
        surface.vertices().len()
    );
    Ok(())
}
