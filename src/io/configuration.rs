//! Game constants and runtime configuration defaults

// Grid sizes per difficulty
/// Side length of the easy grid
pub const SIZE_EASY: usize = 3;
/// Side length of the normal grid
pub const SIZE_NORMAL: usize = 4;
/// Side length of the hard grid
pub const SIZE_HARD: usize = 5;

/// Tiles placed on a new grid before the first turn
pub const INITIAL_TILE_COUNT: usize = 2;

// Default values for configurable parameters
/// Fixed seed for reproducible games
pub const DEFAULT_SEED: u64 = 42;

/// Turn cap for a single simulated game
pub const DEFAULT_MAX_TURNS: usize = 10_000;

// Screenshot settings
/// Directory screenshots are written to
pub const SCREENSHOT_DIR: &str = "screenshots";
/// File name prefix of screenshots
pub const SCREENSHOT_PREFIX: &str = "screenshot";
/// Side length of one tile in a screenshot, in pixels
pub const TILE_PIXELS: u32 = 96;
/// Width of the border drawn around and between tiles, in pixels
pub const GRID_EDGE_WIDTH: u32 = 3;

// Glyph scales per text size class, digits are drawn from a 3x5 bitmap
/// Pixel scale for one and two digit values
pub const GLYPH_SCALE_STANDARD: u32 = 8;
/// Pixel scale for three digit values
pub const GLYPH_SCALE_THREE_DIGIT: u32 = 6;
/// Pixel scale for four digit values and above
pub const GLYPH_SCALE_FOUR_DIGIT: u32 = 4;

// Tile palette (RGBA)
/// Background behind the tiles
pub const GRID_BACKGROUND: [u8; 4] = [0, 0, 0, 255];
/// Empty cell color
pub const GHOST_COLOR: [u8; 4] = [219, 219, 219, 255];
/// Value text color
pub const TEXT_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Value text color of freshly spawned tiles
pub const FRESH_TEXT_COLOR: [u8; 4] = [255, 0, 0, 255];
/// Tile colors for 2, 4, 8, ..., 2048; larger values reuse the last entry
pub const TILE_COLORS: [[u8; 4]; 11] = [
    [255, 250, 255, 255],
    [252, 245, 118, 255],
    [255, 245, 66, 255],
    [219, 208, 13, 255],
    [252, 210, 121, 255],
    [252, 183, 80, 255],
    [255, 179, 15, 255],
    [219, 151, 4, 255],
    [255, 161, 84, 255],
    [255, 128, 25, 255],
    [255, 25, 25, 255],
];

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
