//! Ball motion, wall bounces, paddle catch and paddle movement

use super::control::finish;
use super::input::FrameInput;
use super::state::{GameEvent, GamePhase, GameState};

/// Place the paddle centered under the pointer, if the pointer is inside the
/// arena horizontally (edges excluded).
pub fn follow_pointer(state: &mut GameState, pointer_x: f32) {
    if pointer_x > 0.0 && pointer_x < state.arena.width {
        state.paddle.x = pointer_x - state.paddle.width / 2.0;
    }
}

/// Move the paddle one step for held arrow keys. Right wins when both are held.
pub fn steer_paddle(state: &mut GameState, input: &FrameInput) {
    let paddle = &mut state.paddle;
    if input.right && paddle.x < state.arena.width - paddle.width {
        paddle.x += paddle.speed;
    } else if input.left && paddle.x > 0.0 {
        paddle.x -= paddle.speed;
    }
}

/// Advance the ball by one frame.
///
/// Order: side walls, then top wall or bottom edge (never both), then paddle
/// steering, then position integration. Missing the paddle at the bottom costs
/// a try and resets ball and paddle, or loses the game on the last try.
pub fn advance(state: &mut GameState, input: &FrameInput) {
    if state.phase != GamePhase::Playing {
        return;
    }

    let r = state.ball.radius;
    let next = state.ball.pos + state.ball.vel;

    if next.x > state.arena.width - r || next.x < r {
        state.ball.vel.x = -state.ball.vel.x;
    }

    if next.y < r {
        state.ball.vel.y = -state.ball.vel.y;
    } else if next.y > state.arena.height - r {
        if state.paddle.spans(state.ball.pos.x) {
            state.ball.vel.y = -state.ball.vel.y;
            state.events.push(GameEvent::PaddleBounce);
        } else {
            state.tries.value = state.tries.value.saturating_sub(1);
            state.events.push(GameEvent::TryLost {
                remaining: state.tries.value,
            });

            if state.tries.value == 0 {
                finish(state, GamePhase::Lose);
                return;
            }

            log::info!("Missed the ball, {} tries left", state.tries.value);
            state.reset_positions();
        }
    }

    steer_paddle(state, input);

    state.ball.pos += state.ball.vel;
}
