//! Court geometry
//!
//! Everything the simulation needs to know about the host's display is
//! injected here at construction: screen size and the drawable extents of the
//! ball and paddle sprites. The core never touches pixels; it only needs the
//! extents for AABB sizing and bounds clamping. Goal lines are computed once
//! and never change.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::rect::Rect;
use super::state::PlayerSide;
use crate::consts::*;

/// Configuration errors caught at construction, before any tick runs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SetupError {
    #[error("screen size must be positive, got {width}x{height}")]
    BadScreenSize { width: f32, height: f32 },

    #[error("{entity} extent must be positive, got {width}x{height}")]
    BadExtent {
        entity: &'static str,
        width: f32,
        height: f32,
    },
}

/// Fixed play-field geometry, shared read-only by every component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Court {
    /// Screen size in display units (origin top-left, +y down).
    pub size: Vec2,
    /// X coordinate of the left goal line. A ball center at or past it is a
    /// point for the right player.
    pub left_goal: f32,
    /// X coordinate of the right goal line.
    pub right_goal: f32,
    /// Drawable size of the ball sprite.
    pub ball_extent: Vec2,
    /// Drawable size of each paddle sprite.
    pub paddle_extent: Vec2,
}

fn positive(v: Vec2) -> bool {
    v.x > 0.0 && v.y > 0.0
}

impl Court {
    /// Validate the host-supplied geometry and fix the goal lines.
    pub fn new(size: Vec2, ball_extent: Vec2, paddle_extent: Vec2) -> Result<Self, SetupError> {
        if !positive(size) {
            return Err(SetupError::BadScreenSize {
                width: size.x,
                height: size.y,
            });
        }
        if !positive(ball_extent) {
            return Err(SetupError::BadExtent {
                entity: "ball",
                width: ball_extent.x,
                height: ball_extent.y,
            });
        }
        if !positive(paddle_extent) {
            return Err(SetupError::BadExtent {
                entity: "paddle",
                width: paddle_extent.x,
                height: paddle_extent.y,
            });
        }

        Ok(Self {
            size,
            left_goal: size.x * LEFT_GOAL_FRACTION,
            right_goal: size.x * RIGHT_GOAL_FRACTION,
            ball_extent,
            paddle_extent,
        })
    }

    pub fn center(&self) -> Vec2 {
        self.size / 2.0
    }

    /// Region the ball's center may occupy: the screen inset by half the
    /// ball's extent so the whole sprite stays visible.
    pub fn ball_area(&self) -> Rect {
        Rect::from_pos_size(Vec2::ZERO, self.size).inset(self.ball_extent / 2.0)
    }

    /// Canonical paddle position for a side: just inside its goal line with
    /// `GOAL_BUFFER` of recovery room, vertically centered.
    pub fn paddle_spawn(&self, side: PlayerSide) -> Vec2 {
        let y = self.size.y / 2.0 - self.paddle_extent.y / 2.0;
        match side {
            PlayerSide::Left => Vec2::new(self.left_goal + GOAL_BUFFER, y),
            PlayerSide::Right => Vec2::new(
                self.right_goal - self.paddle_extent.x - GOAL_BUFFER,
                y,
            ),
        }
    }
}
