//! Simulation state and core types

use std::collections::VecDeque;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::draw::Rect;
use crate::consts::BALL_RADIUS;
use crate::error::InitError;
use crate::settings::Settings;

/// Fixed drawing area, read once at startup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Viewport from a canvas client size; both sides must be positive
    pub fn from_client_size(width: i32, height: i32) -> Result<Self, InitError> {
        if width <= 0 || height <= 0 {
            return Err(InitError::EmptyViewport { width, height });
        }
        Ok(Self::new(width as f32, height as f32))
    }

    /// Whole viewport as a rectangle at the origin
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Ball colour palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BallColor {
    Coral,
    Cream,
    Mint,
    Sage,
    Teal,
    Pink,
}

/// Every colour a ball can spawn with
pub const PALETTE: [BallColor; 6] = [
    BallColor::Coral,
    BallColor::Cream,
    BallColor::Mint,
    BallColor::Sage,
    BallColor::Teal,
    BallColor::Pink,
];

impl BallColor {
    pub fn hex(&self) -> &'static str {
        match self {
            BallColor::Coral => "#ff6138",
            BallColor::Cream => "#ffff9d",
            BallColor::Mint => "#beeb9f",
            BallColor::Sage => "#79bd8f",
            BallColor::Teal => "#00a388",
            BallColor::Pink => "#ff9ddb",
        }
    }

    pub fn rgba(&self) -> [f32; 4] {
        match self {
            BallColor::Coral => [1.0, 0.380, 0.220, 1.0],
            BallColor::Cream => [1.0, 1.0, 0.616, 1.0],
            BallColor::Mint => [0.745, 0.922, 0.624, 1.0],
            BallColor::Sage => [0.475, 0.741, 0.561, 1.0],
            BallColor::Teal => [0.0, 0.639, 0.533, 1.0],
            BallColor::Pink => [1.0, 0.616, 0.859, 1.0],
        }
    }
}

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Displacement per frame
    pub vel: Vec2,
    /// Collision and drawn radius
    pub radius: f32,
    pub color: BallColor,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, color: BallColor) -> Self {
        Self {
            pos,
            vel,
            radius: BALL_RADIUS,
            color,
        }
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }
}

/// Complete simulation state, owned by the frame loop for the life of the page
#[derive(Debug, Clone)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub viewport: Viewport,
    /// Balls in spawn order (later balls paint over earlier ones)
    pub(crate) balls: VecDeque<Ball>,
    pub background: [f32; 4],
    pub ball_radius: f32,
    /// Population cap; oldest ball is evicted first
    pub max_balls: Option<usize>,
    /// Frames stepped so far
    pub(crate) frame: u64,
    /// Balls dropped by the population cap
    pub(crate) evicted: u64,
}

impl SimState {
    /// Create an empty simulation with default settings
    pub fn new(seed: u64, viewport: Viewport) -> Self {
        Self::from_settings(seed, viewport, &Settings::default())
    }

    /// Create an empty simulation configured from settings
    pub fn from_settings(seed: u64, viewport: Viewport, settings: &Settings) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            viewport,
            balls: VecDeque::new(),
            background: settings.background_rgba(),
            ball_radius: settings.ball_radius,
            max_balls: settings.max_balls,
            frame: 0,
            evicted: 0,
        }
    }

    pub fn balls(&self) -> impl ExactSizeIterator<Item = &Ball> {
        self.balls.iter()
    }

    pub fn ball_count(&self) -> usize {
        self.balls.len()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    /// Append a ball at the tail, evicting from the head when at capacity
    pub fn push_ball(&mut self, ball: Ball) {
        if let Some(max) = self.max_balls {
            while self.balls.len() >= max.max(1) {
                self.balls.pop_front();
                self.evicted += 1;
            }
        }
        self.balls.push_back(ball);
    }
}
