//! Ball spawning
//!
//! All randomness in the simulation happens here, drawn from the state's seeded RNG.

use glam::Vec2;
use rand::Rng;

use super::state::{Ball, BallColor, PALETTE, SimState};
use crate::consts::MAX_SPAWN_SPEED;

/// Pick a palette colour uniformly
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> BallColor {
    PALETTE[rng.random_range(0..PALETTE.len())]
}

/// Integer-valued velocity, each axis uniform in `-MAX_SPAWN_SPEED..=MAX_SPAWN_SPEED`
pub fn random_velocity<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    let vx = rng.random_range(-MAX_SPAWN_SPEED..=MAX_SPAWN_SPEED);
    let vy = rng.random_range(-MAX_SPAWN_SPEED..=MAX_SPAWN_SPEED);
    Vec2::new(vx as f32, vy as f32)
}

/// Spawn a ball centred at (x, y) with random colour and velocity
pub fn spawn(state: &mut SimState, x: f32, y: f32) {
    let color = random_color(&mut state.rng);
    let vel = random_velocity(&mut state.rng);
    let ball = Ball::new(Vec2::new(x, y), vel, color).with_radius(state.ball_radius);

    log::debug!(
        "Spawned {:?} ({}) ball at ({:.0}, {:.0}) vel ({}, {})",
        color,
        color.hex(),
        x,
        y,
        vel.x,
        vel.y
    );

    let evicted_before = state.evicted;
    state.push_ball(ball);
    if state.evicted > evicted_before {
        log::debug!("Ball cap reached, evicted oldest ({} total)", state.evicted);
    }
}

impl SimState {
    /// Spawn a ball centred at (x, y). See [`spawn`].
    pub fn spawn(&mut self, x: f32, y: f32) {
        spawn(self, x, y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Viewport;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_appends_one_ball_at_click() {
        let mut state = SimState::new(12345, Viewport::new(800.0, 600.0));
        state.spawn(120.0, 340.0);
        assert_eq!(state.ball_count(), 1);
        state.spawn(400.0, 10.0);
        assert_eq!(state.ball_count(), 2);

        let last = state.balls().last().unwrap();
        assert_eq!(last.pos, Vec2::new(400.0, 10.0));
        assert_eq!(last.radius, state.ball_radius);
    }

    #[test]
    fn test_velocity_is_integer_and_in_range() {
        let mut rng = Pcg32::seed_from_u64(99);
        for _ in 0..2000 {
            let v = random_velocity(&mut rng);
            for c in [v.x, v.y] {
                assert_eq!(c, c.trunc());
                assert!((-10.0..=10.0).contains(&c));
            }
        }
    }

    #[test]
    fn test_velocity_hits_both_extremes() {
        let mut rng = Pcg32::seed_from_u64(3);
        let samples: Vec<f32> = (0..5000).map(|_| random_velocity(&mut rng).x).collect();
        assert!(samples.contains(&-10.0));
        assert!(samples.contains(&10.0));
    }

    #[test]
    fn test_every_palette_colour_appears() {
        let mut rng = Pcg32::seed_from_u64(5);
        let seen: std::collections::HashSet<BallColor> =
            (0..1000).map(|_| random_color(&mut rng)).collect();
        assert_eq!(seen.len(), PALETTE.len());
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let viewport = Viewport::new(800.0, 600.0);
        let mut a = SimState::new(2024, viewport);
        let mut b = SimState::new(2024, viewport);
        for (x, y) in [(1.0, 2.0), (300.0, 40.0), (799.0, 599.0)] {
            a.spawn(x, y);
            b.spawn(x, y);
        }
        assert!(a.balls().eq(b.balls()));
    }
}
