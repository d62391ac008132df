//! Bouncing Balls - click to drop coloured balls that bounce around the viewport
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball integrator, frame step, spawning)
//! - `renderer`: WebGPU rendering surface
//! - `settings`: Startup configuration
//! - `error`: Initialization and settings errors

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{InitError, SettingsError};
pub use settings::Settings;

/// Simulation constants
pub mod consts {
    /// Downward acceleration added to vertical velocity every frame
    pub const GRAVITY: f32 = 0.2;
    /// Velocity retained on any wall, floor or ceiling bounce
    pub const DAMPING: f32 = 0.9;
    /// Extra horizontal velocity retained on floor contact (friction)
    pub const TRACTION: f32 = 0.8;

    /// Effective ball radius in viewport pixels
    pub const BALL_RADIUS: f32 = 10.0;
    /// Spawn velocity components are integers in `-MAX_SPAWN_SPEED..=MAX_SPAWN_SPEED`
    pub const MAX_SPAWN_SPEED: i32 = 10;

    /// Background fill behind the balls
    pub const BACKGROUND_HEX: &str = "#333";
    /// Triangle fan segments per circle
    pub const CIRCLE_SEGMENTS: u32 = 32;
    /// Upper bound on configurable circle segments
    pub const MAX_CIRCLE_SEGMENTS: u32 = 1024;
}

/// Parse a CSS-style hex colour (`#rgb` or `#rrggbb`, leading `#` optional) into RGBA
pub fn hex_to_rgba(hex: &str) -> Option<[f32; 4]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.is_ascii() {
        return None;
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).ok().map(|v| v as f32 / 255.0);

    match digits.len() {
        3 => {
            // #abc is shorthand for #aabbcc
            let mut rgb = [0.0; 3];
            for (i, c) in digits.chars().enumerate() {
                rgb[i] = channel(&format!("{c}{c}"))?;
            }
            Some([rgb[0], rgb[1], rgb[2], 1.0])
        }
        6 => Some([
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
            1.0,
        ]),
        _ => None,
    }
}
