//! Game settings and preferences
//!
//! Persisted as JSON at a caller-supplied path. The sim never reads these;
//! they ride along for the presentation layer and the hand-tracking
//! collaborator.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Options forwarded to the hand-tracking detector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerSettings {
    /// Detector model complexity (0-2, heavier is more accurate)
    pub model_complexity: u8,
    /// Temporal smoothing of landmark positions
    pub smooth_landmarks: bool,
    /// Minimum confidence to report a detection (0.0 - 1.0)
    pub min_detection_confidence: f32,
    /// Minimum confidence to keep tracking between frames (0.0 - 1.0)
    pub min_tracking_confidence: f32,
}

impl Default for TrackerSettings {
    fn default() -> Self {
        Self {
            model_complexity: 1,
            smooth_landmarks: true,
            min_detection_confidence: 0.5,
            min_tracking_confidence: 0.5,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Detector options
    pub tracker: TrackerSettings,

    // === Video ===
    /// Mirror the camera preview (selfie view)
    pub mirror_preview: bool,
    /// Draw hand skeletons over the video
    pub show_skeleton: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Mute when window loses focus
    pub mute_on_blur: bool,

    // === Accessibility ===
    /// Reduced motion (minimize flashes on hit/miss)
    pub reduced_motion: bool,
    /// High contrast mode
    pub high_contrast: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tracker: TrackerSettings::default(),

            mirror_preview: true,
            show_skeleton: true,

            show_fps: true,

            master_volume: 0.8,
            sfx_volume: 1.0,
            mute_on_blur: true,

            reduced_motion: false,
            high_contrast: false,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults on any
    /// missing or unreadable file
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Settings file {} unreadable ({e}), using defaults", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, json) {
                    log::warn!("Failed to save settings to {}: {e}", path.display());
                } else {
                    log::info!("Settings saved");
                }
            }
            Err(e) => log::warn!("Failed to serialize settings: {e}"),
        }
    }
}
