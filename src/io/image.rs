//! Screenshot rendering and PNG export

use crate::board::direction::TileIndex;
use crate::board::grid::Grid;
use crate::board::tile::{TextSize, Tile};
use crate::io::configuration::{
    FRESH_TEXT_COLOR, GHOST_COLOR, GLYPH_SCALE_FOUR_DIGIT, GLYPH_SCALE_STANDARD,
    GLYPH_SCALE_THREE_DIGIT, GRID_BACKGROUND, GRID_EDGE_WIDTH, SCREENSHOT_PREFIX, TEXT_COLOR,
    TILE_COLORS, TILE_PIXELS,
};
use crate::io::error::{GameError, Result};
use image::{ImageBuffer, Rgba, RgbaImage};
use log::info;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

const GLYPH_WIDTH: u32 = 3;
const GLYPH_HEIGHT: u32 = 5;

// 3x5 bitmaps, one row per entry, most significant of the three bits on the left
const DIGIT_GLYPHS: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b001, 0b001, 0b001],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];

/// Fill color of a tile
///
/// Values above 2048 share the 2048 color.
pub fn tile_color(tile: &Tile) -> [u8; 4] {
    tile.value().map_or(GHOST_COLOR, |value| {
        let rank = value.trailing_zeros().saturating_sub(1) as usize;
        let last = TILE_COLORS.len() - 1;
        TILE_COLORS
            .get(rank.min(last))
            .copied()
            .unwrap_or(GHOST_COLOR)
    })
}

/// Pixel scale of the digit bitmaps for a text size class
pub const fn glyph_scale(text_size: TextSize) -> u32 {
    match text_size {
        TextSize::Standard => GLYPH_SCALE_STANDARD,
        TextSize::ThreeDigit => GLYPH_SCALE_THREE_DIGIT,
        TextSize::FourDigit => GLYPH_SCALE_FOUR_DIGIT,
        TextSize::Hidden => 0,
    }
}

/// Side length in pixels of the screenshot of a `size` x `size` grid
pub const fn image_side(size: u32) -> u32 {
    size * TILE_PIXELS + (size + 1) * GRID_EDGE_WIDTH
}

/// Render the grid into an RGBA image
///
/// Tiles are laid out on a black background separated by `GRID_EDGE_WIDTH`
/// pixels. Values are drawn in white, or red for freshly spawned tiles.
pub fn render_grid_image(grid: &Grid) -> RgbaImage {
    let size = grid.grid_dimension() as u32;
    let side = image_side(size);
    let mut img = ImageBuffer::from_pixel(side, side, Rgba(GRID_BACKGROUND));

    for y in 0..size {
        for x in 0..size {
            let tile = grid
                .tile(TileIndex::new(x as usize, y as usize))
                .copied()
                .unwrap_or_default();
            let left = GRID_EDGE_WIDTH + x * (TILE_PIXELS + GRID_EDGE_WIDTH);
            let top = GRID_EDGE_WIDTH + y * (TILE_PIXELS + GRID_EDGE_WIDTH);

            fill_rect(&mut img, [left, top], [TILE_PIXELS, TILE_PIXELS], tile_color(&tile));
            draw_label(&mut img, &tile, [left, top]);
        }
    }

    img
}

/// Write a screenshot of the grid into `directory`
///
/// The directory is created if needed and the file is named
/// `screenshot_<unique id>.png`.
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be created
/// - The image cannot be encoded or saved
pub fn export_screenshot(grid: &Grid, directory: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(directory).map_err(|e| GameError::FileSystem {
        path: directory.to_path_buf(),
        operation: "create directory",
        source: e,
    })?;

    let path = unique_screenshot_path(directory);
    render_grid_image(grid)
        .save(&path)
        .map_err(|e| GameError::ImageExport {
            path: path.clone(),
            source: e,
        })?;

    info!("saved screenshot to {}", path.display());
    Ok(path)
}

fn unique_screenshot_path(directory: &Path) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());

    let mut path = directory.join(format!("{SCREENSHOT_PREFIX}_{stamp}.png"));
    let mut suffix = 1;
    while path.exists() {
        path = directory.join(format!("{SCREENSHOT_PREFIX}_{stamp}_{suffix}.png"));
        suffix += 1;
    }
    path
}

fn fill_rect(img: &mut RgbaImage, origin: [u32; 2], extent: [u32; 2], color: [u8; 4]) {
    let (width, height) = img.dimensions();
    for py in origin[1]..(origin[1] + extent[1]).min(height) {
        for px in origin[0]..(origin[0] + extent[0]).min(width) {
            img.put_pixel(px, py, Rgba(color));
        }
    }
}

fn draw_label(img: &mut RgbaImage, tile: &Tile, origin: [u32; 2]) {
    let Some(value) = tile.value() else {
        return;
    };

    let scale = glyph_scale(tile.text_size());
    let digits: Vec<usize> = value
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as usize)
        .collect();

    let count = digits.len() as u32;
    let text_width = count * GLYPH_WIDTH * scale + count.saturating_sub(1) * scale;
    let text_height = GLYPH_HEIGHT * scale;
    let start_x = origin[0] + TILE_PIXELS.saturating_sub(text_width) / 2;
    let start_y = origin[1] + TILE_PIXELS.saturating_sub(text_height) / 2;
    let color = if tile.is_fresh() {
        FRESH_TEXT_COLOR
    } else {
        TEXT_COLOR
    };

    for (position, digit) in digits.iter().enumerate() {
        let Some(glyph) = DIGIT_GLYPHS.get(*digit) else {
            continue;
        };
        let glyph_x = start_x + position as u32 * (GLYPH_WIDTH + 1) * scale;

        for (row, &bits) in glyph.iter().enumerate() {
            for column in 0..GLYPH_WIDTH {
                if (bits >> (GLYPH_WIDTH - 1 - column)) & 1 == 1 {
                    fill_rect(
                        img,
                        [glyph_x + column * scale, start_y + row as u32 * scale],
                        [scale, scale],
                        color,
                    );
                }
            }
        }
    }
}
