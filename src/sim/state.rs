//! Match state and core simulation types
//!
//! Everything that must survive between ticks lives here: the ball, both
//! paddles, the scores, the phase, and the seeded RNG. Entity behavior is
//! implemented on the types themselves; `tick` only sequences the calls.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::court::Court;
use super::rect::Rect;
use crate::consts::*;

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Initial state; nothing moves until the first directional input.
    Paused,
    /// Active gameplay.
    Playing,
    /// A goal just landed; the round restarts on the next directional input.
    Scored,
    /// Match decided. Only a restart request leaves this phase.
    End,
}

/// Which goal a paddle defends. `Left` is the AI, `Right` the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerSide {
    Left,
    Right,
}

impl PlayerSide {
    pub fn index(self) -> usize {
        match self {
            PlayerSide::Left => 0,
            PlayerSide::Right => 1,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            PlayerSide::Left => PlayerSide::Right,
            PlayerSide::Right => PlayerSide::Left,
        }
    }
}

/// Movement strategy a paddle was built with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleControl {
    Player,
    Ai,
}

/// Banner art the host should display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Banner {
    /// Shown while waiting for the round to start.
    Ready,
    /// Player reached the win threshold.
    Win,
    /// AI reached the win threshold.
    Lose,
}

/// Side-effect notifications for the host, drained after each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchEvent {
    ScoreChanged { side: PlayerSide, score: u32 },
    RoundReset,
    BannerShown(Banner),
    BannerCleared,
}

/// The bouncing ball
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center of the ball.
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Clamp one velocity axis into the legal speed band, preserving sign.
///
/// An exactly-zero axis is deliberately left alone: the floor only corrects
/// values that are moving, so a perfectly flat return can stall an axis until
/// the next angled contact.
fn clamp_axis_speed(v: f32) -> f32 {
    if v > 0.0 {
        v.clamp(BALL_MIN_SPEED, BALL_MAX_SPEED)
    } else if v < 0.0 {
        v.clamp(-BALL_MAX_SPEED, -BALL_MIN_SPEED)
    } else {
        v
    }
}

impl Ball {
    /// Re-center the ball and launch it in a random direction (round start).
    pub fn reset(&mut self, court: &Court, rng: &mut Pcg32) {
        self.pos = court.center();
        self.vel = Vec2::new(Self::launch_axis(rng), Self::launch_axis(rng));
    }

    /// Random per-axis launch velocity: base speed plus an extra kick that
    /// shares the base sign so it can never cancel the launch direction.
    fn launch_axis(rng: &mut Pcg32) -> f32 {
        let sign = if rng.random::<bool>() { 1.0 } else { -1.0 };
        sign * (BALL_AXIS_SPEED + rng.random::<f32>() * BALL_AXIS_SPEED)
    }

    /// Advance one tick: clamp speed, integrate, reflect off the court edges.
    pub fn advance(&mut self, dt: f32, court: &Court) {
        self.vel.x = clamp_axis_speed(self.vel.x);
        self.vel.y = clamp_axis_speed(self.vel.y);

        self.pos += self.vel * dt;

        // Reflect each axis independently once the center leaves its legal
        // area while still heading outward. Top/bottom are the gameplay
        // bounces; left/right is a backstop only, since the goal lines sit
        // inside the screen edges and a goal resets the round first.
        let area = court.ball_area();
        if (self.pos.x > area.max.x && self.vel.x > 0.0)
            || (self.pos.x < area.min.x && self.vel.x < 0.0)
        {
            self.vel.x = -self.vel.x;
        }
        if (self.pos.y > area.max.y && self.vel.y > 0.0)
            || (self.pos.y < area.min.y && self.vel.y < 0.0)
        {
            self.vel.y = -self.vel.y;
        }
    }
}

/// A paddle, player- or AI-controlled
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: PlayerSide,
    pub control: PaddleControl,
    /// Top-left corner of the paddle sprite.
    pub pos: Vec2,
    /// Recomputed from `pos` and the paddle extent after every move.
    pub collision_box: Rect,
    /// Signed vertical speed signal recorded by the last update and consumed
    /// by collision response. Raw input direction (-1/0/+1) for the player,
    /// clamped tracking speed for the AI.
    pub y_velocity: f32,
}

impl Paddle {
    pub fn new(side: PlayerSide, control: PaddleControl, court: &Court) -> Self {
        let pos = court.paddle_spawn(side);
        Self {
            side,
            control,
            pos,
            collision_box: Rect::from_pos_size(pos, court.paddle_extent),
            y_velocity: 0.0,
        }
    }

    /// Back to the canonical spawn position (round start).
    pub fn reset(&mut self, court: &Court) {
        self.pos = court.paddle_spawn(self.side);
        self.y_velocity = 0.0;
        self.update_collision_box(court);
    }

    pub fn update_collision_box(&mut self, court: &Court) {
        self.collision_box = Rect::from_pos_size(self.pos, court.paddle_extent);
    }

    /// Player movement from a discrete direction (-1 up, 0 idle, +1 down).
    ///
    /// The move is atomic: if it would push any part of the paddle off-screen
    /// in the direction of travel it is rejected outright, never partially
    /// applied.
    pub fn update_player(&mut self, dt: f32, direction: f32, court: &Court) {
        debug_assert_eq!(self.control, PaddleControl::Player);

        self.y_velocity = direction;
        let movement = (PADDLE_SPEED + PADDLE_SPEED_BONUS) * direction * dt;
        if self.can_move(movement, direction, court) {
            self.pos.y += movement;
        }
        self.update_collision_box(court);
    }

    fn can_move(&self, movement: f32, direction: f32, court: &Court) -> bool {
        let bottom_limit = court.size.y - court.paddle_extent.y;
        !((self.pos.y + movement > bottom_limit && direction > 0.0)
            || (self.pos.y + movement < 0.0 && direction < 0.0))
    }

    /// AI movement: chase a one-step linear extrapolation of the ball.
    ///
    /// The raw tracking velocity is `paddle_center_y - target_y`, so positive
    /// means the target is above the paddle and the position update
    /// *subtracts* `v * dt`. The value is clamped into the AI's speed band
    /// and floored away from zero so the paddle never visibly stalls; an
    /// exact-zero difference takes the upward floor.
    pub fn update_ai(&mut self, dt: f32, ball_pos: Vec2, ball_vel: Vec2, court: &Court) {
        debug_assert_eq!(self.control, PaddleControl::Ai);

        let target = ball_pos + ball_vel;
        let half_height = court.paddle_extent.y / 2.0;
        let limit = PADDLE_SPEED - AI_SPEED_BUFFER;

        let mut v = (self.pos.y + half_height) - target.y;
        if v > limit {
            v = limit;
        } else if v < -limit {
            v = -limit;
        } else if v < PADDLE_MIN_SPEED && v >= 0.0 {
            v = PADDLE_MIN_SPEED;
        } else if v > -PADDLE_MIN_SPEED && v < 0.0 {
            v = -PADDLE_MIN_SPEED;
        }

        self.y_velocity = v;
        self.pos.y -= v * dt;

        // Unlike the player's reject-the-move policy, the AI is forced back
        // on-screen after the fact.
        let bottom_limit = court.size.y - court.paddle_extent.y;
        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
        } else if self.pos.y > bottom_limit {
            self.pos.y = bottom_limit;
        }
        self.update_collision_box(court);
    }
}

/// Per-player score with the win-threshold freeze
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    points: [u32; 2],
}

impl Scores {
    pub fn get(&self, side: PlayerSide) -> u32 {
        self.points[side.index()]
    }

    /// Increment a side's score unless the match is already decided.
    /// Returns whether the point counted; once either side reaches the win
    /// threshold the final score is frozen.
    pub fn award(&mut self, side: PlayerSide) -> bool {
        if self.winner().is_some() {
            return false;
        }
        self.points[side.index()] += 1;
        true
    }

    pub fn winner(&self) -> Option<PlayerSide> {
        if self.get(PlayerSide::Left) >= WIN_THRESHOLD {
            Some(PlayerSide::Left)
        } else if self.get(PlayerSide::Right) >= WIN_THRESHOLD {
            Some(PlayerSide::Right)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.points = [0, 0];
    }

    #[cfg(test)]
    pub(crate) fn force_points(&mut self, left: u32, right: u32) {
        self.points = [left, right];
    }
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    /// Seed the match was created with, for reproducibility.
    pub seed: u64,
    /// RNG driving round-start randomness.
    pub rng: Pcg32,
    pub court: Court,
    pub phase: MatchPhase,
    pub ball: Ball,
    pub player_paddle: Paddle,
    pub ai_paddle: Paddle,
    pub scores: Scores,
    /// Banner currently on display, if any.
    pub banner: Option<Banner>,
    /// Tick counter, for hosts that want it.
    pub time_ticks: u64,
    /// Notifications produced by the current tick (transient).
    #[serde(skip)]
    pub events: Vec<MatchEvent>,
}

impl MatchState {
    pub fn new(seed: u64, court: Court) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut ball = Ball::default();
        ball.reset(&court, &mut rng);

        let player_paddle = Paddle::new(PlayerSide::Right, PaddleControl::Player, &court);
        let ai_paddle = Paddle::new(PlayerSide::Left, PaddleControl::Ai, &court);

        Self {
            seed,
            rng,
            court,
            phase: MatchPhase::Paused,
            ball,
            player_paddle,
            ai_paddle,
            scores: Scores::default(),
            banner: Some(Banner::Ready),
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Hand the tick's notifications to the host.
    pub fn drain_events(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn show_banner(&mut self, banner: Banner) {
        self.banner = Some(banner);
        self.events.push(MatchEvent::BannerShown(banner));
    }

    pub(crate) fn clear_banner(&mut self) {
        if self.banner.take().is_some() {
            self.events.push(MatchEvent::BannerCleared);
        }
    }

    /// Reposition ball and paddles for a fresh round. Scores are untouched.
    pub fn reset_round(&mut self) {
        self.ball.reset(&self.court, &mut self.rng);
        self.player_paddle.reset(&self.court);
        self.ai_paddle.reset(&self.court);
        self.events.push(MatchEvent::RoundReset);
    }

    /// Full restart after a finished match: scores zeroed, banner cleared,
    /// round repositioned.
    pub fn reset_match(&mut self) {
        self.scores.reset();
        for side in [PlayerSide::Left, PlayerSide::Right] {
            self.events.push(MatchEvent::ScoreChanged { side, score: 0 });
        }
        self.clear_banner();
        self.reset_round();
    }

    /// Goal-line check, called while Playing after the ball has moved.
    ///
    /// Both crossings are checked independently; a counted point moves the
    /// phase to `Scored` and immediately resets the round so the ball never
    /// rests at the scoring position. Once either score reaches the win
    /// threshold, further crossings no longer count.
    pub fn check_goal(&mut self) {
        let mut scored = false;

        if self.ball.pos.x <= self.court.left_goal && self.award_point(PlayerSide::Right) {
            scored = true;
        }
        if self.ball.pos.x >= self.court.right_goal && self.award_point(PlayerSide::Left) {
            scored = true;
        }

        if scored {
            self.phase = MatchPhase::Scored;
            self.show_banner(Banner::Ready);
            self.reset_round();
        }
    }

    fn award_point(&mut self, side: PlayerSide) -> bool {
        if !self.scores.award(side) {
            return false;
        }
        let score = self.scores.get(side);
        log::info!(
            "{side:?} scores: {}-{}",
            self.scores.get(PlayerSide::Left),
            self.scores.get(PlayerSide::Right)
        );
        self.events.push(MatchEvent::ScoreChanged { side, score });
        true
    }

    /// Declare the match over once either score reaches the win threshold.
    /// Runs before the rest of the tick, so the deciding goal is observed as
    /// `End` one tick after it lands.
    pub fn check_end_game(&mut self) {
        if self.phase == MatchPhase::End {
            return;
        }
        if let Some(winner) = self.scores.winner() {
            let banner = match winner {
                PlayerSide::Right => Banner::Win,
                PlayerSide::Left => Banner::Lose,
            };
            log::info!("match over, {winner:?} wins");
            self.phase = MatchPhase::End;
            self.show_banner(banner);
        }
    }
}
