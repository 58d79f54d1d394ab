//! Compile-time game constants.

use backend::math::Rgba;

pub const WINDOW_TITLE: &str = "18.5 Color Game";

/// Play area; the grid covers exactly this region.
pub const SCREEN_WIDTH: u32 = 640;
pub const SCREEN_HEIGHT: u32 = 480;
/// Strip below the play area holding the timer and score.
pub const STATUS_BAR_HEIGHT: u32 = 30;

pub const GRID_SIZE: u32 = 3;
pub const CELL_COUNT: usize = (GRID_SIZE * GRID_SIZE) as usize;

/// Shade delta at level 0. Lower is harder.
pub const DIFFICULTY_BASE: i32 = 32;
pub const MAX_LEVEL: u32 = 30;
/// Delta used for the odd cell before the first successful click.
pub const INITIAL_SHADE_DELTA: u8 = 128;
pub const SHADE_DELTA_FLOOR: u8 = 1;

pub const DEFAULT_BASE_COLOR: Rgba = Rgba::new(0, 255, 255, 255);

pub const BACKGROUND: Rgba = Rgba::WHITE;
pub const CELL_BORDER: Rgba = Rgba::WHITE;
pub const TEXT_FG: Rgba = Rgba::BLACK;
pub const TEXT_BG: Rgba = Rgba::WHITE;

pub const FONT_ASSET: &str = "fonts/WeLoveCuteThings.ttf";
pub const FONT_SIZE: u16 = 36;
pub const INTRO_ASSET: &str = "img/colorgame_intro_screen.png";
pub const GAME_OVER_ASSET: &str = "img/colorgame_game_over.png";

/// x offset of the score readout in the status bar.
pub const SCORE_TEXT_X: i32 = 150;
/// y offset of the final score on the game over screen.
pub const FINAL_SCORE_Y: i32 = 20;
