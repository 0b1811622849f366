//! Tessellating surface for the GPU pipeline

use glam::Vec2;

use super::vertex::Vertex;
use super::{Rgba, Surface, shapes};

/// Circle segments for the ball
const CIRCLE_SEGMENTS: u32 = 32;

/// A text draw, handed to the HUD layer instead of the GPU
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub pos: Vec2,
    pub color: Rgba,
}

/// Collects one frame of triangles plus text labels
#[derive(Debug, Clone, Default)]
pub struct ShapeBatch {
    pub vertices: Vec<Vertex>,
    pub labels: Vec<TextLabel>,
}

impl ShapeBatch {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for ShapeBatch {
    fn clear(&mut self) {
        self.vertices.clear();
        self.labels.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.vertices
            .extend(shapes::circle(center, radius, color, CIRCLE_SEGMENTS));
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Rgba) {
        self.vertices.extend(shapes::rect(pos, size, color));
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, color: Rgba) {
        self.labels.push(TextLabel {
            text: text.to_string(),
            pos,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::renderer::draw_scene;
    use crate::sim::GameState;

    #[test]
    fn test_scene_tessellation() {
        let state = GameState::new(&GameConfig::default()).unwrap();
        let mut batch = ShapeBatch::new();
        draw_scene(&state, &mut batch);

        // 36 rects x 6 + ball
        assert_eq!(batch.vertices.len(), 36 * 6 + CIRCLE_SEGMENTS as usize * 3);
        assert_eq!(batch.labels.len(), 2);
        assert_eq!(batch.labels[1].text, "Tries: 3");
        assert_eq!(batch.labels[1].pos, Vec2::new(515.0, 20.0));

        batch.clear();
        assert!(batch.vertices.is_empty());
        assert!(batch.labels.is_empty());
    }
}
