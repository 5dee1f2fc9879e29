//! Session driver facade
//!
//! The single surface the host wires its collaborators to: landmark frames
//! and clock polls come in, draw records and the scoreboard go out, and the
//! presentation layer's restart button lands here. Owns the `GameState` and
//! funnels every mutation through it on one logical thread.

use crate::sim::state::GameState;
use crate::sim::{FrameInput, FrameView, Outcome, evaluate_frame, scheduler};

/// One running game, from start (or restart) to a terminal outcome
pub struct GameSession {
    state: GameState,
}

impl GameSession {
    /// Create a session and start every slot's scheduling cycle
    pub fn new(seed: u64, now_ms: f64) -> Self {
        let mut state = GameState::new(seed);
        scheduler::start(&mut state, now_ms);
        log::info!("session started with seed {seed}");
        Self { state }
    }

    /// Scheduler heartbeat for frame-less stretches (detector warming up,
    /// hands out of view). Also where slot integrity is checked.
    pub fn poll(&mut self, now_ms: f64) {
        scheduler::advance(&mut self.state, now_ms);
        self.check_integrity(now_ms);
    }

    /// Feed one landmark frame and get back everything the renderer and
    /// presentation layer need for it.
    pub fn on_frame(&mut self, input: FrameInput, now_ms: f64) -> FrameView {
        scheduler::advance(&mut self.state, now_ms);
        evaluate_frame(&mut self.state, &input, now_ms);
        self.check_integrity(now_ms);
        FrameView::capture(&self.state, input)
    }

    /// Synchronous wholesale reset: score 0, outcome Playing, all slots
    /// recreated idle, scheduler restarted. Every outstanding transition
    /// from the previous session is quiesced before the new one begins.
    pub fn restart(&mut self, now_ms: f64) {
        scheduler::stop(&mut self.state);
        self.state.reset();
        scheduler::start(&mut self.state, now_ms);
        log::info!("session restarted (session {})", self.state.session);
    }

    /// Current score, for the presentation layer
    pub fn score(&self) -> i32 {
        self.state.score
    }

    /// Current win/lose status, for the presentation layer
    pub fn outcome(&self) -> Outcome {
        self.state.outcome
    }

    /// Read access to the underlying state (render snapshots, diagnostics)
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// A live slot with no scheduled transition has fallen out of the
    /// cycle. That is a logic defect, fatal to the session: log it and
    /// force the restart.
    fn check_integrity(&mut self, now_ms: f64) {
        if self.state.outcome != Outcome::Playing {
            return;
        }
        if let Some(slot) = self.state.targets.iter().position(|t| t.pending.is_none()) {
            log::error!("slot {slot} observed with no scheduled transition; forcing restart");
            self.restart(now_ms);
        }
    }
}
