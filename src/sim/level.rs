//! Brick wall layout

use glam::Vec2;

use super::arena::Arena;
use super::block::Block;
use crate::renderer::Color;
use crate::settings::Settings;

/// Row colors, top to bottom (cycled when there are more rows)
pub const ROW_COLORS: [Color; 5] = [
    Color::rgb(220, 60, 60),
    Color::rgb(230, 140, 50),
    Color::rgb(230, 210, 60),
    Color::rgb(70, 190, 90),
    Color::rgb(70, 130, 220),
];

/// Build a horizontally centered grid of blocks, row by row from the top
pub fn build_wall(settings: &Settings) -> Arena<Block> {
    let mut blocks = Arena::new();
    let cols = settings.block_columns;
    let size = settings.block_size;
    let gap = settings.block_gap;

    let wall_width = cols as f32 * size.x + cols.saturating_sub(1) as f32 * gap;
    let left = ((settings.playfield_width - wall_width) / 2.0).max(0.0);

    for row in 0..settings.block_rows {
        let color = ROW_COLORS[row as usize % ROW_COLORS.len()];
        let y = settings.block_top + row as f32 * (size.y + gap);
        for col in 0..cols {
            let x = left + col as f32 * (size.x + gap);
            blocks.insert(Block::new(color, Vec2::new(x, y), settings));
        }
    }

    log::debug!(
        "Built wall: {} rows x {} cols ({} blocks)",
        settings.block_rows,
        cols,
        blocks.len()
    );
    blocks
}
