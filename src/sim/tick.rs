//! Per-frame simulation step
//!
//! One call to [`tick`] per display refresh. Velocities are in pixels per frame,
//! so there is no dt: the host's frame cadence is the clock.

use super::draw::{DrawCommand, RenderSurface};
use super::state::{Ball, SimState, Viewport};
use crate::consts::{DAMPING, GRAVITY, TRACTION};

/// Resolve one axis against its two walls. The far wall wins when both are touched.
/// Returns which wall was hit.
#[inline]
fn bounce_axis(pos: &mut f32, vel: &mut f32, radius: f32, extent: f32) -> Option<Bound> {
    if *pos + radius >= extent {
        *vel = -*vel * DAMPING;
        *pos = extent - radius;
        Some(Bound::Max)
    } else if *pos - radius <= 0.0 {
        *vel = -*vel * DAMPING;
        *pos = radius;
        Some(Bound::Min)
    } else {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Min,
    Max,
}

/// Keep a center coordinate at least `radius` away from both walls.
/// The max bound is applied last so it wins when the field is narrower than the ball.
#[inline]
fn confine(pos: f32, radius: f32, extent: f32) -> f32 {
    pos.max(radius).min(extent - radius)
}

/// Advance one ball by a frame and return the command that draws it.
///
/// Order matters: collisions are resolved first so the position update uses
/// the post-bounce velocity, then gravity, then integration.
pub fn advance(ball: &mut Ball, viewport: Viewport) -> DrawCommand {
    let r = ball.radius;

    // Side walls
    bounce_axis(&mut ball.pos.x, &mut ball.vel.x, r, viewport.width);

    // Floor and ceiling; floor contact also bleeds horizontal speed
    if bounce_axis(&mut ball.pos.y, &mut ball.vel.y, r, viewport.height) == Some(Bound::Max) {
        ball.vel.x *= TRACTION;
    }

    ball.vel.y += GRAVITY;

    ball.pos += ball.vel;

    // Overshoot is put back on the boundary. Velocity is left alone: the next
    // frame's collision test fires on the boundary and resolves the bounce.
    ball.pos.x = confine(ball.pos.x, r, viewport.width);
    ball.pos.y = confine(ball.pos.y, r, viewport.height);

    DrawCommand::FillCircle {
        center: ball.pos,
        radius: r,
        color: ball.color.rgba(),
    }
}

/// Step every ball one frame and paint the result.
///
/// Clears the viewport, fills the background, then draws balls in spawn order.
pub fn tick<S: RenderSurface + ?Sized>(state: &mut SimState, surface: &mut S) {
    let region = state.viewport.rect();
    surface.clear(region);
    surface.fill_rect(region, state.background);

    let viewport = state.viewport;
    for ball in state.balls.iter_mut() {
        surface.submit(advance(ball, viewport));
    }

    state.frame += 1;
    if state.frame % 600 == 0 {
        log::debug!("Frame {}: {} balls", state.frame, state.balls.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{BallColor, Rect};
    use glam::Vec2;
    use proptest::prelude::*;

    const VIEW: Viewport = Viewport::new(800.0, 600.0);

    fn ball(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        Ball::new(Vec2::new(x, y), Vec2::new(vx, vy), BallColor::Coral)
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_free_flight() {
        let mut b = ball(400.0, 300.0, 3.0, -2.0);
        let cmd = advance(&mut b, VIEW);

        assert!(close(b.vel.x, 3.0));
        assert!(close(b.vel.y, -2.0 + GRAVITY));
        assert!(close(b.pos.x, 403.0));
        assert!(close(b.pos.y, 298.2));
        assert_eq!(
            cmd,
            DrawCommand::FillCircle {
                center: b.pos,
                radius: 10.0,
                color: BallColor::Coral.rgba(),
            }
        );
    }

    #[test]
    fn test_right_wall_bounce() {
        let mut b = ball(795.0, 300.0, 5.0, 0.0);
        advance(&mut b, VIEW);

        assert!(close(b.vel.x, -5.0 * DAMPING));
        // Clamped to 790 then moved by the reflected velocity
        assert!(close(b.pos.x, 790.0 - 4.5));
    }

    #[test]
    fn test_left_wall_bounce() {
        let mut b = ball(8.0, 300.0, -4.0, 0.0);
        advance(&mut b, VIEW);

        assert!(close(b.vel.x, 4.0 * DAMPING));
        assert!(close(b.pos.x, 10.0 + 3.6));
    }

    #[test]
    fn test_floor_bounce_applies_traction() {
        let mut b = ball(400.0, 595.0, 5.0, 6.0);
        advance(&mut b, VIEW);

        assert!(close(b.vel.x, 5.0 * TRACTION));
        assert!(close(b.vel.y, -6.0 * DAMPING + GRAVITY));
        assert!(close(b.pos.y, 590.0 - 5.4 + GRAVITY));
    }

    #[test]
    fn test_ceiling_bounce_skips_traction() {
        let mut b = ball(400.0, 5.0, 5.0, -6.0);
        advance(&mut b, VIEW);

        assert!(close(b.vel.x, 5.0));
        assert!(close(b.vel.y, 6.0 * DAMPING + GRAVITY));
    }

    #[test]
    fn test_wall_bounce_skips_traction() {
        let mut b = ball(795.0, 300.0, 5.0, 1.0);
        advance(&mut b, VIEW);
        assert!(close(b.vel.x, -5.0 * DAMPING));
        assert!(close(b.vel.y, 1.0 + GRAVITY));
    }

    #[test]
    fn test_corner_hits_both_axes() {
        let mut b = ball(795.0, 595.0, 4.0, 4.0);
        advance(&mut b, VIEW);
        assert!(close(b.vel.x, -4.0 * DAMPING * TRACTION));
        assert!(close(b.vel.y, -4.0 * DAMPING + GRAVITY));
    }

    #[test]
    fn test_oversized_ball_prefers_max_bound() {
        // Radius larger than half the viewport: both tests would pass, max wins
        let tiny = Viewport::new(15.0, 15.0);
        let mut b = ball(7.0, 7.0, 1.0, 1.0).with_radius(10.0);
        advance(&mut b, tiny);
        assert!(close(b.pos.x, 5.0));
        assert!(close(b.pos.y, 5.0));
        assert!(close(b.vel.x, -1.0 * DAMPING * TRACTION));
    }

    #[test]
    fn test_overshoot_is_confined() {
        let mut b = ball(785.0, 300.0, 20.0, 0.0);
        advance(&mut b, VIEW);
        assert!(close(b.pos.x, 790.0));
        // Bounce is resolved on the following frame
        assert!(close(b.vel.x, 20.0));
        advance(&mut b, VIEW);
        assert!(close(b.vel.x, -20.0 * DAMPING));
    }

    #[test]
    fn test_ball_settles_on_floor() {
        let mut b = ball(400.0, 0.0, 0.0, 0.0);
        let mut last_bounce_speed = f32::MAX;

        for _ in 0..3000 {
            let before = b.vel.y;
            advance(&mut b, VIEW);
            // Rebounding off the floor: speed never grows
            if before > 0.0 && b.vel.y < 0.0 {
                assert!(b.vel.y.abs() <= last_bounce_speed + 1e-4);
                last_bounce_speed = b.vel.y.abs();
            }
        }

        assert!(close(b.pos.y, 590.0));
        assert!(close(b.pos.x, 400.0));
        assert!(b.vel.y.abs() <= GRAVITY);
    }

    #[test]
    fn test_tick_without_balls_only_paints_background() {
        let mut state = SimState::new(1, VIEW);
        let mut surface: Vec<DrawCommand> = Vec::new();
        tick(&mut state, &mut surface);

        let region = Rect::new(0.0, 0.0, 800.0, 600.0);
        assert_eq!(
            surface,
            vec![
                DrawCommand::Clear { region },
                DrawCommand::FillRect {
                    region,
                    color: state.background,
                },
            ]
        );
        assert_eq!(state.frame(), 1);
    }

    #[test]
    fn test_tick_draws_balls_in_spawn_order() {
        let mut state = SimState::new(77, VIEW);
        state.spawn(100.0, 100.0);
        state.spawn(200.0, 200.0);
        state.spawn(300.0, 300.0);

        let mut surface: Vec<DrawCommand> = Vec::new();
        tick(&mut state, &mut surface);

        assert_eq!(surface.len(), 5);
        let centers: Vec<Vec2> = surface[2..]
            .iter()
            .map(|c| match c {
                DrawCommand::FillCircle { center, .. } => *center,
                other => panic!("unexpected {:?}", other),
            })
            .collect();
        let positions: Vec<Vec2> = state.balls().map(|b| b.pos).collect();
        assert_eq!(centers, positions);
    }

    #[test]
    fn test_same_seed_same_trajectories() {
        let clicks = [(50.0, 60.0), (700.0, 20.0), (400.0, 500.0)];

        let run = || {
            let mut state = SimState::new(4242, VIEW);
            let mut surface: Vec<DrawCommand> = Vec::new();
            for (i, (x, y)) in clicks.iter().enumerate() {
                state.spawn(*x, *y);
                for _ in 0..(i + 1) * 30 {
                    tick(&mut state, &mut surface);
                }
            }
            surface
        };

        assert_eq!(run(), run());
    }

    proptest! {
        #[test]
        fn prop_center_stays_in_field(
            x in 10.0f32..=790.0,
            y in 10.0f32..=590.0,
            vx in -60.0f32..60.0,
            vy in -60.0f32..60.0,
        ) {
            let mut b = ball(x, y, vx, vy);
            for _ in 0..5 {
                advance(&mut b, VIEW);
                prop_assert!(b.pos.x >= 10.0 && b.pos.x <= 790.0);
                prop_assert!(b.pos.y >= 10.0 && b.pos.y <= 590.0);
            }
        }

        #[test]
        fn prop_gravity_added_after_collision(
            x in 10.0f32..=790.0,
            y in 10.0f32..=590.0,
            vx in -30.0f32..30.0,
            vy in -30.0f32..30.0,
        ) {
            let mut b = ball(x, y, vx, vy);
            let floor = y + 10.0 >= 600.0;
            let ceiling = !floor && y - 10.0 <= 0.0;
            let right = x + 10.0 >= 800.0;
            let left = !right && x - 10.0 <= 0.0;
            advance(&mut b, VIEW);

            let expected_vy = (if floor || ceiling { -vy * DAMPING } else { vy }) + GRAVITY;
            prop_assert!((b.vel.y - expected_vy).abs() < 1e-3);

            let mut expected_vx = if right || left { -vx * DAMPING } else { vx };
            if floor {
                expected_vx *= TRACTION;
            }
            prop_assert!((b.vel.x - expected_vx).abs() < 1e-3);
        }
    }
}
