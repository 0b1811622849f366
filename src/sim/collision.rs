//! Ball-brick collision and scoring

use glam::Vec2;

use super::control::finish;
use super::state::{BrickState, GameEvent, GamePhase, GameState};

/// Point strictly inside the rectangle at `pos` with size `size` (edges excluded)
#[inline]
pub fn point_in_rect(point: Vec2, pos: Vec2, size: Vec2) -> bool {
    point.x > pos.x && point.x < pos.x + size.x && point.y > pos.y && point.y < pos.y + size.y
}

/// Resolve every standing brick the ball's center is inside.
///
/// Each hit flips dy, so two hits in one frame cancel out. Reaching the max
/// score wins immediately.
pub fn detect_brick_collisions(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }

    let size = state.bricks.size;
    let center = state.ball.pos;
    let mut hits = Vec::new();

    for brick in state.bricks.iter_mut() {
        if brick.state == BrickState::NotHit && point_in_rect(center, brick.pos, size) {
            brick.state = BrickState::Hit;
            hits.push((brick.column, brick.row));
        }
    }

    for (column, row) in hits {
        state.ball.vel.y = -state.ball.vel.y;
        state.score.value += state.score.multiplier;
        state.events.push(GameEvent::BrickHit { column, row });
        log::debug!("Brick ({}, {}) hit, score {}", column, row, state.score.value);

        if state.score.value == state.score.max {
            finish(state, GamePhase::Win);
        }
    }
}
