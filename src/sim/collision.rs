//! Ball/paddle collision resolution
//!
//! AABB overlap plus a directional guard, then an outcome-dependent speed
//! change: a paddle moving fast vertically at contact smashes the ball, a
//! near-stationary one dampens it.

use super::court::Court;
use super::rect::Rect;
use super::state::{Ball, Paddle, PlayerSide};
use crate::consts::*;

/// Outcome of a qualifying ball/paddle contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitKind {
    /// Paddle was moving at contact; the ball leaves faster.
    Smash,
    /// Paddle was (nearly) still; the return is dampened.
    Soft,
}

/// Resolve one paddle against the ball, called once per paddle per tick.
///
/// The ball reflects only when it is moving toward the paddle's side of the
/// court; a ball still inside the box on the next frame is already departing
/// and must not flip again. An overlapping but departing ball is left
/// untouched.
pub fn resolve(ball: &mut Ball, paddle: &Paddle, court: &Court) -> Option<HitKind> {
    let ball_box = Rect::from_center_size(ball.pos, court.ball_extent);
    if !ball_box.overlaps(&paddle.collision_box) {
        return None;
    }

    let approaching = match paddle.side {
        PlayerSide::Left => ball.vel.x < 0.0,
        PlayerSide::Right => ball.vel.x > 0.0,
    };
    if !approaching {
        return None;
    }

    ball.vel.x = -ball.vel.x;
    if paddle.y_velocity.abs() > SMASH_THRESHOLD {
        ball.vel *= SMASH_FACTOR;
        Some(HitKind::Smash)
    } else {
        ball.vel /= SMASH_FACTOR;
        Some(HitKind::Soft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::PaddleControl;
    use glam::Vec2;

    fn court() -> Court {
        Court::new(
            Vec2::new(1280.0, 720.0),
            Vec2::new(16.0, 16.0),
            Vec2::new(20.0, 120.0),
        )
        .unwrap()
    }

    /// Paddle of the given side with the ball parked inside its box.
    fn contact(side: PlayerSide, ball_vel: Vec2) -> (Ball, Paddle, Court) {
        let court = court();
        let control = match side {
            PlayerSide::Left => PaddleControl::Ai,
            PlayerSide::Right => PaddleControl::Player,
        };
        let mut paddle = Paddle::new(side, control, &court);
        paddle.pos = Vec2::new(100.0, 300.0);
        paddle.update_collision_box(&court);

        let ball = Ball {
            pos: paddle.collision_box.center(),
            vel: ball_vel,
        };
        (ball, paddle, court)
    }

    #[test]
    fn test_soft_return_dampens() {
        let (mut ball, paddle, court) = contact(PlayerSide::Left, Vec2::new(-500.0, 0.0));

        let hit = resolve(&mut ball, &paddle, &court);
        assert_eq!(hit, Some(HitKind::Soft));
        assert!((ball.vel.x - 500.0 / SMASH_FACTOR).abs() < 1e-3);
        assert_eq!(ball.vel.y, 0.0);
    }

    #[test]
    fn test_smash_amplifies() {
        let (mut ball, mut paddle, court) = contact(PlayerSide::Left, Vec2::new(-500.0, 0.0));
        paddle.y_velocity = 1.0;

        let hit = resolve(&mut ball, &paddle, &court);
        assert_eq!(hit, Some(HitKind::Smash));
        assert_eq!(ball.vel, Vec2::new(750.0, 0.0));
    }

    #[test]
    fn test_smash_scales_full_vector() {
        let (mut ball, mut paddle, court) = contact(PlayerSide::Left, Vec2::new(-400.0, 300.0));
        paddle.y_velocity = -2.0;

        let hit = resolve(&mut ball, &paddle, &court);
        assert_eq!(hit, Some(HitKind::Smash));
        assert_eq!(ball.vel, Vec2::new(600.0, 450.0));
    }

    #[test]
    fn test_departing_ball_untouched() {
        // Overlapping the left paddle but already moving right: no response.
        let (mut ball, paddle, court) = contact(PlayerSide::Left, Vec2::new(500.0, 120.0));

        let hit = resolve(&mut ball, &paddle, &court);
        assert_eq!(hit, None);
        assert_eq!(ball.vel, Vec2::new(500.0, 120.0));
    }

    #[test]
    fn test_right_paddle_direction_guard() {
        let (mut ball, paddle, court) = contact(PlayerSide::Right, Vec2::new(500.0, 0.0));
        assert!(resolve(&mut ball, &paddle, &court).is_some());
        assert!(ball.vel.x < 0.0);

        let (mut ball, paddle, court) = contact(PlayerSide::Right, Vec2::new(-500.0, 0.0));
        assert_eq!(resolve(&mut ball, &paddle, &court), None);
    }

    #[test]
    fn test_no_overlap_no_response() {
        let (mut ball, paddle, court) = contact(PlayerSide::Left, Vec2::new(-500.0, 0.0));
        ball.pos = Vec2::new(900.0, 100.0);

        assert_eq!(resolve(&mut ball, &paddle, &court), None);
        assert_eq!(ball.vel, Vec2::new(-500.0, 0.0));
    }
}
