//! Per-frame collision evaluation and scoring
//!
//! Runs once per landmark frame from the detector. Every armed target is
//! tested against both hands; the left hand is checked before the right,
//! and only the first matching rule resolves a target. A frame that carries
//! no landmark data at all is skipped entirely.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::hand_hits_target;
use super::scheduler;
use super::state::{GameState, HandSide, Outcome, TargetSprite, TargetState};
use crate::consts::*;

/// Landmark payload for one camera frame.
///
/// Coordinates are normalized [0,1] per axis; a hand that was not detected
/// this frame is `None`. The raw frame image never enters the core - the
/// renderer composes it separately.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameInput {
    pub left_hand: Option<Vec<Vec2>>,
    pub right_hand: Option<Vec<Vec2>>,
}

impl FrameInput {
    /// True when neither hand was detected
    pub fn is_empty(&self) -> bool {
        self.left_hand.is_none() && self.right_hand.is_none()
    }

    fn hand(&self, side: HandSide) -> Option<&[Vec2]> {
        match side {
            HandSide::Left => self.left_hand.as_deref(),
            HandSide::Right => self.right_hand.as_deref(),
        }
    }
}

/// Everything downstream consumers need after a frame: draw records for the
/// four targets, the landmark sets passed through for skeleton drawing, and
/// the session scoreboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameView {
    pub targets: Vec<TargetSprite>,
    pub left_hand: Option<Vec<Vec2>>,
    pub right_hand: Option<Vec<Vec2>>,
    pub score: i32,
    pub outcome: Outcome,
}

impl FrameView {
    /// Snapshot the state after evaluation, moving the landmark sets through
    pub fn capture(state: &GameState, input: FrameInput) -> Self {
        Self {
            targets: state.sprites(),
            left_hand: input.left_hand,
            right_hand: input.right_hand,
            score: state.score,
            outcome: state.outcome,
        }
    }
}

/// Evaluate one frame's landmarks against every armed target.
///
/// Resolution applies the score delta exactly once, swaps the slot to its
/// hit/miss visual, and replaces the exposure revert with the shorter
/// resolve hold. Scoring stops the moment the outcome turns terminal.
pub fn evaluate_frame(state: &mut GameState, input: &FrameInput, now_ms: f64) {
    if state.outcome != Outcome::Playing || input.is_empty() {
        return;
    }

    for slot in 0..state.targets.len() {
        let TargetState::Armed(color) = state.targets[slot].state else {
            continue;
        };
        let (pos, radius) = (state.targets[slot].pos, state.targets[slot].radius);

        // Left before right; first matching rule wins and the slot is
        // non-armed for the rest of this pass
        let striker = [HandSide::Left, HandSide::Right].into_iter().find(|&side| {
            input
                .hand(side)
                .is_some_and(|lm| hand_hits_target(lm, pos, radius))
        });
        let Some(side) = striker else {
            continue;
        };

        if side == color.matching_hand() {
            scheduler::force_resolve(state, slot, TargetState::Hit, now_ms);
            state.score += HIT_SCORE;
            log::info!(
                "slot {slot} struck clean ({color:?} by {side:?} hand), score {}",
                state.score
            );
        } else {
            scheduler::force_resolve(state, slot, TargetState::Missed, now_ms);
            state.score -= WRONG_HAND_PENALTY;
            log::info!(
                "slot {slot} struck by wrong hand ({color:?} by {side:?}), score {}",
                state.score
            );
        }

        state.refresh_outcome();
        if state.outcome != Outcome::Playing {
            break;
        }
    }
}
