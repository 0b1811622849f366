//! Rendering
//!
//! The simulation draws through the [`Surface`] trait. [`DrawList`] records
//! commands (headless runs and tests); [`ShapeBatch`] tessellates them for the
//! WebGPU [`RenderState`].

pub mod batch;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use batch::{ShapeBatch, TextLabel};
pub use pipeline::RenderState;
pub use scene::draw_scene;
pub use vertex::Vertex;

use glam::Vec2;

/// Linear RGBA colour
pub type Rgba = [f32; 4];

/// 2D drawing target. Origin top-left, +x right, +y down.
pub trait Surface {
    /// Erase everything drawn so far
    fn clear(&mut self);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    /// `pos` is the top-left corner
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Rgba);
    /// `pos` is the text baseline start
    fn fill_text(&mut self, text: &str, pos: Vec2, color: Rgba);
}

/// A recorded drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Circle { center: Vec2, radius: f32, color: Rgba },
    Rect { pos: Vec2, size: Vec2, color: Rgba },
    Text { text: String, pos: Vec2, color: Rgba },
}

/// Surface that records commands since the last clear
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
    /// Number of clears seen
    pub clears: u32,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of every label, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn rect_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
            .count()
    }
}

impl Surface for DrawList {
    fn clear(&mut self) {
        self.commands.clear();
        self.clears += 1;
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Rgba) {
        self.commands.push(DrawCommand::Rect { pos, size, color });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, color: Rgba) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            color,
        });
    }
}
