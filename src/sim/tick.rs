//! Per-frame match update
//!
//! One `tick` call advances every component in a fixed order: end-of-match
//! check, phase gates, ball physics, collisions, AI paddle, goal check,
//! player paddle, restart handling. All mutation happens synchronously inside
//! the call, so the host always observes a consistent state between ticks.

use super::collision;
use super::state::{MatchPhase, MatchState};

/// Input for a single tick, resolved by the host from its own key bindings
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Directional inputs currently held.
    pub up: bool,
    pub down: bool,
    /// Edge-triggered presses observed this frame; these open the
    /// Paused/Scored gates.
    pub up_pressed: bool,
    pub down_pressed: bool,
    /// Full-match restart request, honored only in `End`.
    pub restart_pressed: bool,
}

impl TickInput {
    /// Player movement direction: -1 up, +1 down, 0 when both or neither
    /// direction is held.
    pub fn direction(&self) -> f32 {
        match (self.up, self.down) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }

    fn direction_pressed(&self) -> bool {
        self.up_pressed || self.down_pressed
    }
}

/// Advance the match by one frame. `dt` is elapsed time in seconds; zero is
/// a legal no-op tick and negative values are clamped to zero.
pub fn tick(state: &mut MatchState, input: &TickInput, dt: f32) {
    state.events.clear();

    let dt = if dt < 0.0 {
        log::warn!("negative dt {dt} clamped to zero");
        0.0
    } else {
        dt
    };

    state.time_ticks += 1;

    // Threshold check runs before anything else, so the tick that lands the
    // deciding point ends in Scored and End is observed one tick later.
    state.check_end_game();

    // Paused and Scored share the same gate: the round starts on the first
    // directional press.
    if matches!(state.phase, MatchPhase::Paused | MatchPhase::Scored) && input.direction_pressed()
    {
        state.clear_banner();
        state.phase = MatchPhase::Playing;
    }

    if state.phase == MatchPhase::Playing {
        state.ball.advance(dt, &state.court);

        for paddle in [&state.player_paddle, &state.ai_paddle] {
            if let Some(hit) = collision::resolve(&mut state.ball, paddle, &state.court) {
                log::debug!("{:?} paddle contact: {hit:?}", paddle.side);
            }
        }

        let (ball_pos, ball_vel) = (state.ball.pos, state.ball.vel);
        state.ai_paddle.update_ai(dt, ball_pos, ball_vel, &state.court);

        state.check_goal();
    }

    // The player may reposition during Scored and End, but not while Paused.
    if state.phase != MatchPhase::Paused {
        state
            .player_paddle
            .update_player(dt, input.direction(), &state.court);
    }

    if state.phase == MatchPhase::End && input.restart_pressed {
        log::info!("match restarted");
        state.reset_match();
        state.phase = MatchPhase::Playing;
    }
}
