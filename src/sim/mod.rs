//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep, one `tick` per frame
//! - Seeded RNG only, owned by the match state
//! - No rendering or platform dependencies; the host consumes events

pub mod collision;
pub mod court;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::HitKind;
pub use court::{Court, SetupError};
pub use rect::Rect;
pub use state::{
    Ball, Banner, MatchEvent, MatchPhase, MatchState, Paddle, PaddleControl, PlayerSide, Scores,
};
pub use tick::{TickInput, tick};
