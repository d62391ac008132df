//! Deterministic simulation module
//!
//! All physics lives here. This module must stay pure and deterministic:
//! - One step per frame, no wall-clock time
//! - Seeded RNG only, and only at spawn
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies beyond the [`RenderSurface`] seam

pub mod draw;
pub mod spawn;
pub mod state;
pub mod tick;

pub use draw::{DrawCommand, Rect, RenderSurface};
pub use spawn::{random_color, random_velocity, spawn};
pub use state::{Ball, BallColor, PALETTE, SimState, Viewport};
pub use tick::{advance, tick};
