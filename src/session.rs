//! Session host glue
//!
//! Owns the simulation, the input tracker and a pristine copy of the starting
//! state. Ending a session shows the outcome message and starts over from
//! scratch; nothing carries over.

use crate::config::{ConfigError, GameConfig};
use crate::renderer::Surface;
use crate::sim::{FrameStatus, GameEvent, GameState, InputTracker, frame};

/// Shows the end-of-session message. Expected to block until acknowledged.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// One running game plus everything needed to restart it
pub struct Session {
    pub state: GameState,
    pub input: InputTracker,
    fresh: GameState,
    /// Sessions started, including the current one
    generation: u32,
}

impl Session {
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let fresh = GameState::new(config)?;
        log::info!(
            "Session started: {}x{} bricks, {} tries",
            fresh.bricks.columns(),
            fresh.bricks.rows(),
            fresh.tries.value
        );
        Ok(Self {
            state: fresh.clone(),
            input: InputTracker::new(),
            fresh,
            generation: 1,
        })
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Snapshot input, run one frame and log what happened
    pub fn run_frame(&mut self, surface: &mut impl Surface) -> FrameStatus {
        let input = self.input.snapshot();
        let status = frame(&mut self.state, &input, surface);

        for event in self.state.drain_events() {
            match event {
                GameEvent::BrickHit { .. } | GameEvent::PaddleBounce => {
                    log::debug!("{:?}", event)
                }
                GameEvent::TryLost { remaining } => {
                    log::info!("Try lost, {} remaining", remaining)
                }
                GameEvent::Won | GameEvent::Lost => log::info!(
                    "Session {} ended ({:?}) after {} frames",
                    self.generation,
                    event,
                    self.state.frame_count
                ),
            }
        }

        status
    }

    /// If the session has ended, show its message and start over.
    /// Returns whether a restart happened.
    pub fn conclude(&mut self, notifier: &mut impl Notifier) -> bool {
        match self.state.phase.message() {
            Some(message) => {
                notifier.notify(message);
                self.restart();
                true
            }
            None => false,
        }
    }

    /// Discard all state and begin again from the starting values
    pub fn restart(&mut self) {
        self.state = self.fresh.clone();
        self.input.clear();
        self.generation += 1;
        log::info!("Session {} started", self.generation);
    }
}
