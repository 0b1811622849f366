//! Game-state transitions
//!
//! `Playing` moves to `Win` or `Lose` exactly once. Both are terminal.

use glam::Vec2;

use super::state::{GameEvent, GamePhase, GameState};

/// End the session with `outcome`, freezing the ball.
///
/// Ignored if the session already ended or `outcome` is `Playing`.
pub fn finish(state: &mut GameState, outcome: GamePhase) {
    match (state.phase, outcome) {
        (GamePhase::Playing, GamePhase::Win) => {
            state.events.push(GameEvent::Won);
            log::info!("Won with score {}", state.score.value);
        }
        (GamePhase::Playing, GamePhase::Lose) => {
            state.events.push(GameEvent::Lost);
            log::info!("Lost with score {}", state.score.value);
        }
        (GamePhase::Playing, GamePhase::Playing) | (GamePhase::Win | GamePhase::Lose, _) => {
            return;
        }
    }
    state.phase = outcome;
    state.ball.vel = Vec2::ZERO;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn new_state() -> GameState {
        GameState::new(&GameConfig::default()).unwrap()
    }

    #[test]
    fn test_finish_freezes_ball() {
        let mut state = new_state();
        finish(&mut state, GamePhase::Lose);
        assert_eq!(state.phase, GamePhase::Lose);
        assert_eq!(state.ball.vel, Vec2::ZERO);
        assert_eq!(state.events, vec![GameEvent::Lost]);
    }

    #[test]
    fn test_terminal_phase_is_absorbing() {
        let mut state = new_state();
        finish(&mut state, GamePhase::Win);
        finish(&mut state, GamePhase::Lose);
        assert_eq!(state.phase, GamePhase::Win);
        assert_eq!(state.events, vec![GameEvent::Won]);
    }

    #[test]
    fn test_finish_with_playing_is_noop() {
        let mut state = new_state();
        finish(&mut state, GamePhase::Playing);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.ball.vel, Vec2::new(2.0, -2.0));
        assert!(state.events.is_empty());
    }
}
