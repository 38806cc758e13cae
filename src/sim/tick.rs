//! Per-frame simulation step
//!
//! One `tick` call advances the world by one display frame. Ordering matters
//! and mirrors the session rules: scroll, train, spawner, obstacles + scoring,
//! difficulty ramp, collision check.

use rand::Rng;

use crate::consts::*;
use crate::sim::collision;
use crate::sim::state::{GamePhase, GameState, Obstacle};
use crate::tuning::Tuning;

/// Advance the session by one frame. Frozen outside the Running phase.
pub fn tick(state: &mut GameState) {
    if state.phase != GamePhase::Running {
        return;
    }

    state.frame += 1;
    state.scroll -= state.speed;

    state.train.advance();
    run_spawner(state);
    update_obstacles(state);
    state.speed += state.tuning.speed_ramp;
    check_collisions(state);
}

/// Countdown spawner. At zero: pick a uniform random lane, spawn unless that
/// lane is blocked near the right edge, then recompute the countdown.
fn run_spawner(state: &mut GameState) {
    state.spawn_timer -= 1;
    if state.spawn_timer > 0 {
        return;
    }

    let lane = state.rng.random_range(0..LANES);

    // Skip if a same-lane rock still sits within three of its own widths of
    // the spawn edge. First match wins; the scan is not a full occupancy pass.
    let mut clear = true;
    for obs in &state.obstacles {
        if obs.lane == lane
            && obs.pos.x > PLAY_WIDTH - obs.width * state.tuning.spawn_clearance_widths
        {
            clear = false;
            break;
        }
    }

    if clear {
        let obstacle = Obstacle::spawn(lane, &mut state.rng);
        state.obstacles.push(obstacle);
    }

    let jitter01 = state.rng.random::<f32>();
    state.spawn_timer = next_spawn_delay(&state.tuning, state.score, jitter01);
}

/// Recompute the spawn countdown: base rate minus a score-derived decrement,
/// plus jitter, floored at the minimum gap. `jitter01` is uniform in [0, 1).
pub fn next_spawn_delay(tuning: &Tuning, score: u32, jitter01: f32) -> i32 {
    let decrease = (score / tuning.spawn_rate_score_step) as f32;
    let jitter = (jitter01 - 0.5) * tuning.spawn_jitter;
    let delay = tuning.base_spawn_rate as f32 - decrease + jitter;
    delay.max(tuning.min_spawn_gap as f32) as i32
}

/// Move every rock left by the current speed; rocks fully past the left edge
/// are removed and score points, once each.
fn update_obstacles(state: &mut GameState) {
    let speed = state.speed;
    let mut passed = 0u32;
    state.obstacles.retain_mut(|obs| {
        obs.pos.x -= speed;
        if obs.pos.x + obs.width < 0.0 {
            passed += 1;
            false
        } else {
            true
        }
    });
    state.score += passed * state.tuning.points_per_obstacle;
}

/// Shrunk train hitbox against every rock's full box; any overlap ends the run
fn check_collisions(state: &mut GameState) {
    let hitbox = state.train.bounds().inset(state.tuning.hitbox_inset);
    if collision::first_hit(&hitbox, &state.obstacles).is_some() {
        state.phase = GamePhase::GameOver;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    use crate::lane_center_y;
    use crate::sim::state::RockShade;

    fn running(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        state.phase = GamePhase::Running;
        state
    }

    fn rock_in_lane(lane: usize, x: f32) -> Obstacle {
        Obstacle {
            pos: Vec2::new(x, lane_center_y(lane, 30.0)),
            width: 30.0,
            height: 30.0,
            lane,
            shade: RockShade::Mid,
        }
    }

    #[test]
    fn frozen_outside_running_phase() {
        let mut state = GameState::new(1);
        tick(&mut state);
        assert_eq!(state.frame, 0);
        assert_eq!(state.speed, state.tuning.start_speed);

        state.phase = GamePhase::GameOver;
        let speed = state.speed;
        let score = state.score;
        for _ in 0..10 {
            tick(&mut state);
        }
        assert_eq!(state.frame, 0);
        assert_eq!(state.speed, speed);
        assert_eq!(state.score, score);
    }

    #[test]
    fn quiet_run_scores_nothing() {
        let mut state = running(1);
        state.spawn_timer = i32::MAX; // spawner never fires
        for _ in 0..500 {
            tick(&mut state);
        }
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::Running);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn speed_ramps_monotonically() {
        let mut state = running(1);
        state.spawn_timer = i32::MAX;
        let mut last = state.speed;
        for _ in 0..1000 {
            tick(&mut state);
            assert!(state.speed >= last);
            last = state.speed;
        }
    }

    #[test]
    fn passed_obstacle_scores_exactly_once() {
        let mut state = running(1);
        state.spawn_timer = i32::MAX;
        // Lane 0 keeps it clear of the lane-1 train
        state.obstacles.push(rock_in_lane(0, 5.0));

        for _ in 0..20 {
            tick(&mut state);
        }
        assert_eq!(state.score, 10);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn obstacle_on_train_ends_the_run() {
        let mut state = running(1);
        state.spawn_timer = i32::MAX;
        state
            .obstacles
            .push(rock_in_lane(state.train.current_lane, state.train.pos.x));

        tick(&mut state);
        assert_eq!(state.phase, GamePhase::GameOver);
        // Score and speed freeze from here on
        let (score, speed, frame) = (state.score, state.speed, state.frame);
        tick(&mut state);
        assert_eq!((state.score, state.speed, state.frame), (score, speed, frame));
    }

    #[test]
    fn spawner_fires_and_rearms_above_floor() {
        let mut state = running(3);
        state.spawn_timer = 1;
        tick(&mut state);
        assert_eq!(state.obstacles.len(), 1);
        assert!(state.spawn_timer >= state.tuning.min_spawn_gap);
    }

    #[test]
    fn spawner_skips_blocked_lane() {
        let mut state = running(3);
        state.spawn_timer = 1;
        // Every lane blocked inside the too-close zone: whatever lane the RNG
        // picks, the spawn is skipped but the timer still re-arms.
        for lane in 0..LANES {
            state.obstacles.push(rock_in_lane(lane, PLAY_WIDTH - 10.0));
        }
        tick(&mut state);
        assert_eq!(state.obstacles.len(), LANES);
        assert!(state.spawn_timer >= state.tuning.min_spawn_gap);
    }

    #[test]
    fn equal_seeds_spawn_identically() {
        let mut a = running(0xDEAD_BEEF);
        let mut b = running(0xDEAD_BEEF);
        for _ in 0..2000 {
            tick(&mut a);
            tick(&mut b);
        }
        assert_eq!(a.score, b.score);
        assert_eq!(a.spawn_timer, b.spawn_timer);
        assert_eq!(a.obstacles, b.obstacles);
    }

    #[test]
    fn long_session_shortens_spawn_delay() {
        let tuning = Tuning::default();
        let fresh = next_spawn_delay(&tuning, 0, 0.5);
        let late = next_spawn_delay(&tuning, 3000, 0.5);
        assert!(late < fresh);
    }

    proptest! {
        #[test]
        fn spawn_delay_never_below_floor(score in 0u32..5_000_000, jitter01 in 0.0f32..1.0) {
            let tuning = Tuning::default();
            prop_assert!(next_spawn_delay(&tuning, score, jitter01) >= tuning.min_spawn_gap);
        }
    }
}
