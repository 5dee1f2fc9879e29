//! Landmark source seam
//!
//! The hand-tracking detector is an external collaborator (camera frames in,
//! per-frame landmark sets out). This module is the boundary it plugs into,
//! plus two built-in sources that need no hardware: a scripted replay for
//! tests and tooling, and an autopilot demo player.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{FrameInput, FrameView, HandSide, Paint};

/// Anything that can deliver landmark frames on the host's clock
pub trait LandmarkSource {
    /// The frame available at `now_ms`, or `None` when the detector has
    /// nothing for this instant
    fn next_frame(&mut self, now_ms: f64) -> Option<FrameInput>;
}

/// One timed entry in a replay script
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptedFrame {
    pub at_ms: f64,
    pub input: FrameInput,
}

/// Replays a pre-recorded script of timed frames in order
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    frames: Vec<ScriptedFrame>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(mut frames: Vec<ScriptedFrame>) -> Self {
        frames.sort_by(|a, b| a.at_ms.total_cmp(&b.at_ms));
        Self { frames, cursor: 0 }
    }

    /// Load a script from its JSON form (an array of `{at_ms, input}`)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let frames: Vec<ScriptedFrame> = serde_json::from_str(json)?;
        Ok(Self::new(frames))
    }

    /// True once every scripted frame has been delivered
    pub fn exhausted(&self) -> bool {
        self.cursor >= self.frames.len()
    }
}

impl LandmarkSource for ScriptedSource {
    fn next_frame(&mut self, now_ms: f64) -> Option<FrameInput> {
        let frame = self.frames.get(self.cursor)?;
        if frame.at_ms <= now_ms {
            self.cursor += 1;
            Some(frame.input.clone())
        } else {
            None
        }
    }
}

/// Demo player that steers the matching hand onto the first armed target in
/// its latest view. Feed it each `FrameView` and it plays a clean game.
#[derive(Debug, Default)]
pub struct AutoPilot {
    view: Option<FrameView>,
}

impl AutoPilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Give the pilot the latest rendered view to react to
    pub fn observe(&mut self, view: FrameView) {
        self.view = Some(view);
    }
}

impl LandmarkSource for AutoPilot {
    fn next_frame(&mut self, _now_ms: f64) -> Option<FrameInput> {
        let view = self.view.as_ref()?;
        for sprite in &view.targets {
            let hand = match sprite.paint {
                Paint::Blue => HandSide::Left,
                Paint::Red => HandSide::Right,
                _ => continue,
            };
            let lm = vec![Vec2::new(
                sprite.pos.x / CANVAS_WIDTH,
                sprite.pos.y / CANVAS_HEIGHT,
            )];
            return Some(match hand {
                HandSide::Left => FrameInput {
                    left_hand: Some(lm),
                    right_hand: None,
                },
                HandSide::Right => FrameInput {
                    left_hand: None,
                    right_hand: Some(lm),
                },
            });
        }
        // Nothing armed: hands in view but away from every slot
        Some(FrameInput {
            left_hand: Some(vec![Vec2::new(0.3, 0.2)]),
            right_hand: Some(vec![Vec2::new(0.7, 0.2)]),
        })
    }
}
