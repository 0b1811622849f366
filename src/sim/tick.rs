//! Frame driver
//!
//! Sequences one display refresh: pointer placement, draw, collisions, motion.

use super::collision::detect_brick_collisions;
use super::input::FrameInput;
use super::motion::{advance, follow_pointer};
use super::state::{GamePhase, GameState};
use crate::renderer::{Surface, draw_scene};

/// Whether the host should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    /// Session ended with this terminal phase
    Finished(GamePhase),
}

/// Run one frame. Does nothing once the session has ended.
pub fn frame(state: &mut GameState, input: &FrameInput, surface: &mut impl Surface) -> FrameStatus {
    if state.phase.is_terminal() {
        return FrameStatus::Finished(state.phase);
    }

    if let Some(x) = input.pointer_x {
        follow_pointer(state, x);
    }

    surface.clear();
    draw_scene(state, surface);

    detect_brick_collisions(state);
    advance(state, input);
    state.frame_count += 1;

    match state.phase {
        GamePhase::Playing => FrameStatus::Continue,
        phase @ (GamePhase::Win | GamePhase::Lose) => FrameStatus::Finished(phase),
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use proptest::prelude::*;

    use super::*;
    use crate::config::GameConfig;
    use crate::renderer::DrawList;
    use crate::sim::state::{BrickState, GameEvent};

    fn new_state() -> GameState {
        GameState::new(&GameConfig::default()).unwrap()
    }

    #[test]
    fn test_frame_draws_then_moves() {
        let mut state = new_state();
        let mut list = DrawList::new();

        let status = frame(&mut state, &FrameInput::default(), &mut list);

        assert_eq!(status, FrameStatus::Continue);
        assert_eq!(list.clears, 1);
        assert_eq!(list.rect_count(), 36);
        // Ball is drawn where it was before this frame's motion
        assert!(list.commands.iter().any(|c| matches!(
            c,
            crate::renderer::DrawCommand::Circle { center, .. } if *center == Vec2::new(240.0, 290.0)
        )));
        assert_eq!(state.ball.pos, Vec2::new(242.0, 288.0));
        assert_eq!(state.frame_count, 1);
    }

    #[test]
    fn test_brick_hit_scenario() {
        let mut config = GameConfig::default();
        config.bricks.offset_top = 280.0;
        let mut state = GameState::new(&config).unwrap();
        let mut list = DrawList::new();

        frame(&mut state, &FrameInput::default(), &mut list);

        assert_eq!(state.bricks.get(2, 0).unwrap().state, BrickState::Hit);
        assert_eq!(state.score.value, 10);
        assert_eq!(state.ball.vel, Vec2::new(2.0, 2.0));

        // Next frame draws one brick fewer and shows the new score
        frame(&mut state, &FrameInput::default(), &mut list);
        assert_eq!(list.rect_count(), 35);
        assert!(list.texts().any(|t| t == "Score: 10"));
    }

    #[test]
    fn test_pointer_then_keys_in_same_frame() {
        let mut state = new_state();
        let input = FrameInput {
            right: true,
            pointer_x: Some(100.0),
            ..Default::default()
        };
        frame(&mut state, &input, &mut DrawList::new());
        // Pointer places at 62.5, key step adds 7
        assert_eq!(state.paddle.x, 69.5);
    }

    #[test]
    fn test_lose_scenario_stops_frames() {
        let mut state = new_state();
        state.tries.value = 1;
        state.ball.pos = Vec2::new(100.0, 429.0);
        state.ball.vel = Vec2::new(2.0, 2.0);
        let mut list = DrawList::new();

        let status = frame(&mut state, &FrameInput::default(), &mut list);
        assert_eq!(status, FrameStatus::Finished(GamePhase::Lose));
        assert_eq!(state.tries.value, 0);
        assert_eq!(state.ball.vel, Vec2::ZERO);

        let frames = state.frame_count;
        let clears = list.clears;
        let status = frame(&mut state, &FrameInput::default(), &mut list);
        assert_eq!(status, FrameStatus::Finished(GamePhase::Lose));
        assert_eq!(state.frame_count, frames);
        assert_eq!(list.clears, clears);
    }

    #[test]
    fn test_try_lost_scenario_keeps_playing() {
        let mut state = new_state();
        state.tries.value = 2;
        state.score.value = 30;
        state.ball.pos = Vec2::new(600.0, 429.0);
        state.ball.vel = Vec2::new(2.0, 2.0);

        let status = frame(&mut state, &FrameInput::default(), &mut DrawList::new());

        assert_eq!(status, FrameStatus::Continue);
        assert_eq!(state.tries.value, 1);
        assert_eq!(state.score.value, 30);
        assert_eq!(state.paddle.x, 300.0);
        assert_eq!(state.ball.vel, Vec2::new(2.0, -2.0));
    }

    #[test]
    fn test_win_on_last_brick() {
        let mut state = new_state();
        let mut list = DrawList::new();
        let last = (6, 4);
        for brick in state.bricks.iter_mut() {
            if (brick.column, brick.row) != last {
                brick.state = BrickState::Hit;
            }
        }
        state.score.value = 340;
        let target = state.bricks.get(last.0, last.1).unwrap().pos + Vec2::new(40.0, 10.0);
        state.ball.pos = target;

        let status = frame(&mut state, &FrameInput::default(), &mut list);

        assert_eq!(status, FrameStatus::Finished(GamePhase::Win));
        assert_eq!(state.score.value, 350);
        assert_eq!(state.ball.vel, Vec2::ZERO);
        // Frozen ball does not move on the winning frame
        assert_eq!(state.ball.pos, target);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::BrickHit { column: 6, row: 4 }, GameEvent::Won]
        );
    }

    #[test]
    fn test_frames_are_deterministic() {
        let mut a = new_state();
        let mut b = new_state();
        let inputs = [
            FrameInput::default(),
            FrameInput {
                left: true,
                ..Default::default()
            },
            FrameInput {
                pointer_x: Some(420.0),
                ..Default::default()
            },
        ];
        for input in inputs.iter().cycle().take(600) {
            frame(&mut a, input, &mut DrawList::new());
            frame(&mut b, input, &mut DrawList::new());
        }
        assert_eq!(a.ball, b.ball);
        assert_eq!(a.paddle, b.paddle);
        assert_eq!(a.bricks, b.bricks);
        assert_eq!(a.score, b.score);
    }

    fn frame_input() -> impl Strategy<Value = FrameInput> {
        (
            any::<bool>(),
            any::<bool>(),
            proptest::option::of(-50.0f32..730.0),
        )
            .prop_map(|(left, right, pointer_x)| FrameInput {
                left,
                right,
                pointer_x,
            })
    }

    proptest! {
        #[test]
        fn prop_score_tries_and_bricks_are_monotonic(
            start_x in 20.0f32..660.0,
            start_y in 20.0f32..400.0,
            dx in prop_oneof![Just(-3.0f32), Just(-2.0), Just(2.0), Just(3.0)],
            dy in prop_oneof![Just(-3.0f32), Just(-2.0), Just(2.0), Just(3.0)],
            inputs in proptest::collection::vec(frame_input(), 1..400),
        ) {
            let mut state = new_state();
            state.ball.pos = Vec2::new(start_x, start_y);
            state.ball.vel = Vec2::new(dx, dy);
            let mut list = DrawList::new();

            for input in &inputs {
                let score = state.score.value;
                let tries = state.tries.value;
                let hit: Vec<bool> = state.bricks.iter().map(|b| !b.is_standing()).collect();

                let status = frame(&mut state, input, &mut list);

                prop_assert!(state.score.value >= score);
                prop_assert!(state.score.value <= state.score.max);
                prop_assert_eq!(state.score.value % state.score.multiplier, 0);
                prop_assert!(state.tries.value <= tries);
                for (was_hit, brick) in hit.iter().zip(state.bricks.iter()) {
                    if *was_hit {
                        prop_assert_eq!(brick.state, BrickState::Hit);
                    }
                }
                if state.tries.value == 0 {
                    prop_assert_eq!(state.phase, GamePhase::Lose);
                }
                if state.score.value == state.score.max {
                    prop_assert_eq!(state.phase, GamePhase::Win);
                }

                if let FrameStatus::Finished(phase) = status {
                    prop_assert_eq!(phase, state.phase);
                    prop_assert_eq!(state.ball.vel, Vec2::ZERO);
                    let frozen = state.ball.clone();
                    prop_assert_eq!(frame(&mut state, input, &mut list), status);
                    prop_assert_eq!(&state.ball, &frozen);
                    break;
                }
            }
        }
    }
}
