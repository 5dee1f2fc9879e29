//! Hand Beat - a webcam rhythm/reflex game
//!
//! Core modules:
//! - `sim`: Deterministic game logic (target scheduling, collisions, scoring)
//! - `session`: Driver facade wiring the sim to the host's clock and frames
//! - `tracker`: Landmark-source seam for the hand-tracking collaborator
//! - `settings`: Player preferences and tracker options

pub mod session;
pub mod settings;
pub mod sim;
pub mod tracker;

pub use session::GameSession;
pub use settings::{Settings, TrackerSettings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions (logical units; landmark coordinates scale into this)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Number of target slots
    pub const TARGET_COUNT: usize = 4;
    /// Hit radius shared by all targets
    pub const TARGET_RADIUS: f32 = 50.0;
    /// Fixed slot positions in canvas space
    pub const TARGET_LAYOUT: [(f32, f32); TARGET_COUNT] =
        [(100.0, 450.0), (300.0, 500.0), (500.0, 500.0), (700.0, 450.0)];

    /// Upper bound of the random idle delay before a target arms (ms)
    pub const ARM_DELAY_MAX_MS: f64 = 5000.0;
    /// How long an armed target stays up before auto-reverting (ms)
    pub const EXPOSURE_MS: f64 = 2000.0;
    /// How long a resolved target shows its hit/miss color (ms)
    pub const RESOLVE_HOLD_MS: f64 = 1000.0;

    /// Score delta for striking with the matching hand
    pub const HIT_SCORE: i32 = 100;
    /// Score delta for striking with the wrong hand (applied as negative)
    pub const WRONG_HAND_PENALTY: i32 = 100;
    /// Score at or above which the game is won
    pub const WIN_SCORE: i32 = 1000;
    /// Score at or below which the game is lost
    pub const LOSE_SCORE: i32 = -500;
}

/// Scale a normalized [0,1] landmark into canvas coordinates
#[inline]
pub fn landmark_to_canvas(p: Vec2) -> Vec2 {
    Vec2::new(p.x * consts::CANVAS_WIDTH, p.y * consts::CANVAS_HEIGHT)
}
