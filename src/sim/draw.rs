//! Draw commands and the rendering surface they are submitted to

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Bottom-right corner
    pub fn max(&self) -> Vec2 {
        self.origin + self.size
    }
}

/// A single shape to rasterize
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Reset the region to transparent
    Clear { region: Rect },
    /// Solid rectangle
    FillRect { region: Rect, color: [f32; 4] },
    /// Solid disk
    FillCircle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
}

/// Anything that can rasterize draw commands.
///
/// Commands arrive in paint order; later shapes cover earlier ones.
pub trait RenderSurface {
    fn clear(&mut self, region: Rect);
    fn fill_rect(&mut self, region: Rect, color: [f32; 4]);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]);

    /// Dispatch a command to the matching primitive
    fn submit(&mut self, command: DrawCommand) {
        match command {
            DrawCommand::Clear { region } => self.clear(region),
            DrawCommand::FillRect { region, color } => self.fill_rect(region, color),
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => self.fill_circle(center, radius, color),
        }
    }
}

/// Recording surface: keeps every command verbatim
impl RenderSurface for Vec<DrawCommand> {
    fn clear(&mut self, region: Rect) {
        self.push(DrawCommand::Clear { region });
    }

    fn fill_rect(&mut self, region: Rect, color: [f32; 4]) {
        self.push(DrawCommand::FillRect { region, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        self.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }
}
