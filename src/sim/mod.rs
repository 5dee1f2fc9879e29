//! Deterministic game logic module
//!
//! All gameplay rules live here. This module must be pure and deterministic:
//! - Host-supplied clock only (millisecond timestamps, no wall-clock reads)
//! - Seeded RNG only
//! - Stable iteration order (by slot index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod frame;
pub mod scheduler;
pub mod state;

pub use collision::hand_hits_target;
pub use frame::{FrameInput, FrameView, evaluate_frame};
pub use scheduler::{advance, start, stop};
pub use state::{
    GameState, HandSide, Outcome, Paint, Pending, PendingKind, Target, TargetColor,
    TargetSprite, TargetState,
};
