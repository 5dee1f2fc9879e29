//! Game state and core types
//!
//! The whole session fits in one `GameState` value; every mutation goes
//! through `&mut GameState` so slot transitions and their pending timers
//! are replaced in the same critical section.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which hand a landmark set belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandSide {
    Left,
    Right,
}

/// Color an armed target shows, which doubles as the hand assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetColor {
    Blue,
    Red,
}

impl TargetColor {
    /// The hand that scores a clean hit on this color
    pub fn matching_hand(&self) -> HandSide {
        match self {
            TargetColor::Blue => HandSide::Left,
            TargetColor::Red => HandSide::Right,
        }
    }
}

/// Lifecycle state of a target slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetState {
    /// Dormant, waiting for its next arm delay to elapse
    Idle,
    /// Up and eligible for collision scoring
    Armed(TargetColor),
    /// Struck by the matching hand, showing the hit color
    Hit,
    /// Struck by the wrong hand, showing the penalty color
    Missed,
}

/// Render color for a slot, one per `TargetState` variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Paint {
    Gray,
    Blue,
    Red,
    Green,
    Orange,
}

impl TargetState {
    pub fn paint(&self) -> Paint {
        match self {
            TargetState::Idle => Paint::Gray,
            TargetState::Armed(TargetColor::Blue) => Paint::Blue,
            TargetState::Armed(TargetColor::Red) => Paint::Red,
            TargetState::Hit => Paint::Green,
            TargetState::Missed => Paint::Orange,
        }
    }
}

/// Kind of scheduled transition a slot is waiting on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingKind {
    /// Idle -> Armed after the random delay
    Arm,
    /// Back to Idle, after the exposure window or the resolve hold
    Revert,
}

/// The single outstanding scheduled transition for a slot.
///
/// Honored only while `epoch` matches the slot's current epoch; any
/// superseding state write bumps the epoch, so a captured deadline can
/// never fire against a slot that has moved on.
#[derive(Debug, Clone, Copy)]
pub struct Pending {
    pub kind: PendingKind,
    /// Absolute deadline on the host clock (ms)
    pub fires_at: f64,
    pub epoch: u32,
}

/// One target slot
#[derive(Debug, Clone)]
pub struct Target {
    /// Fixed center in canvas space
    pub pos: Vec2,
    /// Fixed hit radius
    pub radius: f32,
    pub state: TargetState,
    /// When the slot last entered an armed state (ms)
    pub armed_at: Option<f64>,
    /// Bumped on every transition that supersedes a pending deadline
    pub epoch: u32,
    pub pending: Option<Pending>,
}

impl Target {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            radius,
            state: TargetState::Idle,
            armed_at: None,
            epoch: 0,
            pending: None,
        }
    }

    /// Render record for this slot
    pub fn sprite(&self) -> TargetSprite {
        TargetSprite {
            pos: self.pos,
            radius: self.radius,
            paint: self.state.paint(),
        }
    }
}

/// What the renderer needs to draw one target circle
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TargetSprite {
    pub pos: Vec2,
    pub radius: f32,
    pub paint: Paint,
}

/// Win/lose status of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Playing,
    Won,
    Lost,
}

/// Complete game state (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Restart counter; mixed into the RNG so each session differs
    pub session: u32,
    pub rng: Pcg32,
    pub score: i32,
    pub outcome: Outcome,
    /// Target slots, always iterated by index for determinism
    pub targets: Vec<Target>,
}

impl GameState {
    /// Create a new game with all targets idle and no pending transitions
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            session: 0,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            outcome: Outcome::Playing,
            targets: TARGET_LAYOUT
                .iter()
                .map(|&(x, y)| Target::new(Vec2::new(x, y), TARGET_RADIUS))
                .collect(),
        }
    }

    /// Wholesale session reset: score 0, outcome Playing, fresh idle targets,
    /// reseeded RNG. Dropping the old targets drops every pending deadline,
    /// so nothing from the previous session can fire.
    pub fn reset(&mut self) {
        self.session = self.session.wrapping_add(1);
        let mix = (self.session as u64)
            .wrapping_mul(2654435761)
            .wrapping_add(self.seed);
        self.rng = Pcg32::seed_from_u64(mix);
        self.score = 0;
        self.outcome = Outcome::Playing;
        self.targets = TARGET_LAYOUT
            .iter()
            .map(|&(x, y)| Target::new(Vec2::new(x, y), TARGET_RADIUS))
            .collect();
    }

    /// Re-derive the outcome after a score change. Terminal outcomes stick
    /// until `reset`.
    pub fn refresh_outcome(&mut self) {
        if self.outcome != Outcome::Playing {
            return;
        }
        if self.score >= WIN_SCORE {
            self.outcome = Outcome::Won;
            log::info!("game won at score {}", self.score);
        } else if self.score <= LOSE_SCORE {
            self.outcome = Outcome::Lost;
            log::info!("game lost at score {}", self.score);
        }
    }

    /// Render records for all slots, in slot order
    pub fn sprites(&self) -> Vec<TargetSprite> {
        self.targets.iter().map(Target::sprite).collect()
    }
}
