//! Fundamental geometric and simulation types.
//!
//! Screen space: x grows to the right, y grows downward, origin top-left.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 2D position in screen space (pixels).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// 2D velocity (pixels per tick).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Frames elapsed since the engine was created. Advances in every scene.
    pub tick: u64,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn distance_to(&self, other: &Position) -> f32 {
        self.as_vec2().distance(other.as_vec2())
    }

    /// Horizontal distance only.
    pub fn horizontal_distance_to(&self, other: &Position) -> f32 {
        (other.x - self.x).abs()
    }
}

impl From<Vec2> for Position {
    fn from(v: Vec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Velocity of magnitude `speed` pointing from `from` toward `to`.
    /// Degenerate (zero-length) headings yield a zero velocity.
    pub fn toward(from: Position, to: Position, speed: f32) -> Self {
        let dir = (to.as_vec2() - from.as_vec2()).normalize_or_zero();
        let v = dir * speed;
        Self { x: v.x, y: v.y }
    }

    pub fn speed(&self) -> f32 {
        Vec2::new(self.x, self.y).length()
    }
}

impl SimTime {
    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
    }
}
