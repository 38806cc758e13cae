//! Data-driven game balance
//!
//! Every knob that affects difficulty or feel lives here so playtest builds
//! can override values from JSON without recompiling. Geometry that the
//! renderer and sim must agree on stays in `consts`.

use serde::{Deserialize, Serialize};

/// Game balance values
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// World speed at session start (units per frame)
    pub start_speed: f32,
    /// Linear speed increase per frame (unbounded ramp)
    pub speed_ramp: f32,
    /// Train vertical step per frame while changing lanes
    pub move_speed: f32,
    /// Base obstacle spawn countdown (frames)
    pub base_spawn_rate: i32,
    /// Hard floor for the recomputed spawn countdown (frames)
    pub min_spawn_gap: i32,
    /// Full swing of the random spawn jitter (frames, centered on zero)
    pub spawn_jitter: f32,
    /// Score interval that shaves one frame off the spawn countdown
    pub spawn_rate_score_step: u32,
    /// Points awarded per obstacle that scrolls off the left edge
    pub points_per_obstacle: u32,
    /// Inset applied to the train's box on all sides for forgiving collisions
    pub hitbox_inset: f32,
    /// Spawn is skipped if a same-lane obstacle sits within this many of its
    /// own widths from the right edge
    pub spawn_clearance_widths: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            start_speed: 4.0,
            speed_ramp: 0.0015,
            move_speed: 9.0,
            base_spawn_rate: 90,
            min_spawn_gap: 25,
            spawn_jitter: 20.0,
            spawn_rate_score_step: 150,
            points_per_obstacle: 10,
            hitbox_inset: 5.0,
            spawn_clearance_widths: 3.0,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override; missing fields keep defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{"start_speed": 6.5}"#).unwrap();
        assert_eq!(tuning.start_speed, 6.5);
        assert_eq!(tuning.base_spawn_rate, 90);
        assert_eq!(tuning.points_per_obstacle, 10);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(Tuning::from_json("{start_speed:").is_err());
    }
}
