//! Paddle Duel - simulation core for a two-paddle ball game
//!
//! This crate owns the gameplay only: ball physics, paddle movement (player
//! and heuristic AI), collision response, scoring, and the match state
//! machine. Rendering, audio, asset loading, and input device handling belong
//! to the host, which drives the core by calling [`sim::tick`] once per frame
//! with elapsed time and resolved directional input, then drains
//! [`sim::MatchEvent`]s for its score/banner display.

pub mod sim;

pub use sim::{Court, MatchPhase, MatchState, SetupError, TickInput, tick};

/// Game tuning constants
pub mod consts {
    /// Base ball speed along each axis at round start, units per second.
    pub const BALL_AXIS_SPEED: f32 = 400.0;
    /// Per-axis speed floor; a slower ball drags the game out.
    pub const BALL_MIN_SPEED: f32 = 300.0;
    /// Per-axis speed ceiling; repeated smashes converge here.
    pub const BALL_MAX_SPEED: f32 = 900.0;

    /// Base paddle speed, units per second.
    pub const PADDLE_SPEED: f32 = 800.0;
    /// Extra speed granted to the player paddle on top of the base.
    pub const PADDLE_SPEED_BONUS: f32 = 200.0;
    /// Floor for the AI paddle's tracking speed so it never visibly stalls.
    pub const PADDLE_MIN_SPEED: f32 = 300.0;
    /// Reduces the AI paddle's top speed below the player's.
    /// 300 - easy, 200 - medium, 100 - hard, 0 - unbeatable.
    pub const AI_SPEED_BUFFER: f32 = 200.0;

    /// Goal line positions as fractions of screen width.
    pub const LEFT_GOAL_FRACTION: f32 = 0.02;
    pub const RIGHT_GOAL_FRACTION: f32 = 0.98;
    /// Gap between a goal line and its paddle's spawn position, giving the
    /// defender room to recover a ball that slipped slightly past.
    pub const GOAL_BUFFER: f32 = 40.0;

    /// First score to reach this wins the match.
    pub const WIN_THRESHOLD: u32 = 10;

    /// A paddle moving faster than this (in its own velocity-signal units)
    /// at contact smashes the ball; at or below it the return is dampened.
    pub const SMASH_THRESHOLD: f32 = 0.8;
    /// Speed multiplier for a smash; divisor for a soft return.
    pub const SMASH_FACTOR: f32 = 1.5;
}
