//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame-based stepping only (one call to `tick` per display frame)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{Rect, first_hit};
pub use state::{GamePhase, GameState, Obstacle, RockShade, Train};
pub use tick::{next_spawn_delay, tick};
