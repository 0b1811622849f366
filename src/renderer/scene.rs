//! Per-frame draw pass

use glam::Vec2;

use super::Surface;
use crate::sim::GameState;

/// Draw standing bricks, ball, paddle, then the score and tries labels
pub fn draw_scene(state: &GameState, surface: &mut impl Surface) {
    let palette = &state.palette;

    for brick in state.bricks.standing() {
        surface.fill_rect(brick.pos, state.bricks.size, palette.brick);
    }

    surface.fill_circle(state.ball.pos, state.ball.radius, palette.ball);

    let paddle = &state.paddle;
    surface.fill_rect(
        Vec2::new(paddle.x, paddle.y),
        Vec2::new(paddle.width, paddle.height),
        palette.paddle,
    );

    surface.fill_text(
        &format!("Score: {}", state.score.value),
        state.hud.score_pos,
        palette.score,
    );
    surface.fill_text(
        &format!("Tries: {}", state.tries.value),
        state.hud.tries_pos,
        palette.tries,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::renderer::{DrawCommand, DrawList};
    use crate::sim::BrickState;

    #[test]
    fn test_draw_order_and_labels() {
        let state = GameState::new(&GameConfig::default()).unwrap();
        let mut list = DrawList::new();
        draw_scene(&state, &mut list);

        // 35 bricks + paddle
        assert_eq!(list.rect_count(), 36);
        assert!(matches!(
            list.commands[35],
            DrawCommand::Circle { radius, .. } if radius == 10.0
        ));
        assert_eq!(list.texts().collect::<Vec<_>>(), ["Score: 0", "Tries: 3"]);
    }

    #[test]
    fn test_hit_bricks_not_drawn() {
        let mut state = GameState::new(&GameConfig::default()).unwrap();
        for brick in state.bricks.iter_mut().take(5) {
            brick.state = BrickState::Hit;
        }
        let hit_positions: Vec<_> = state.bricks.iter().take(5).map(|b| b.pos).collect();

        let mut list = DrawList::new();
        draw_scene(&state, &mut list);

        assert_eq!(list.rect_count(), 31);
        let drawn_hit = list.commands.iter().any(|c| match c {
            DrawCommand::Rect { pos, .. } => hit_positions.contains(pos),
            _ => false,
        });
        assert!(!drawn_hit);
    }
}
