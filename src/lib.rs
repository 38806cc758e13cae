//! Rail Rush - a three-lane train dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, game state)
//! - `input`: Key mapping and session lifecycle resolution
//! - `render`: Canvas2D drawing (wasm only)
//! - `tuning`: Data-driven game balance

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod render;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Fixed play-area geometry
pub mod consts {
    /// Number of lanes (tracks)
    pub const LANES: usize = 3;

    /// Play area dimensions (logical units; the canvas is sized to match)
    pub const PLAY_WIDTH: f32 = 800.0;
    pub const PLAY_HEIGHT: f32 = 450.0;

    /// Height of one lane
    pub const LANE_HEIGHT: f32 = PLAY_HEIGHT / LANES as f32;

    /// Train sprite dimensions
    pub const TRAIN_WIDTH: f32 = 60.0;
    pub const TRAIN_HEIGHT: f32 = 35.0;
    /// Fixed horizontal position of the train's left edge
    pub const TRAIN_START_X: f32 = 50.0;

    /// Obstacle size bounds (randomized per spawn)
    pub const OBSTACLE_MIN_WIDTH: f32 = 25.0;
    pub const OBSTACLE_MAX_WIDTH: f32 = 45.0;
    pub const OBSTACLE_MIN_HEIGHT: f32 = 25.0;
    pub const OBSTACLE_MAX_HEIGHT: f32 = 40.0;
}

/// Top y coordinate for a box of `height` centered vertically in `lane`
#[inline]
pub fn lane_center_y(lane: usize, height: f32) -> f32 {
    lane as f32 * consts::LANE_HEIGHT + consts::LANE_HEIGHT / 2.0 - height / 2.0
}
