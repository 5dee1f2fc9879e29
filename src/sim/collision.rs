//! Collision detection between hand landmarks and target circles
//!
//! Landmarks arrive normalized to [0,1] per axis; they are scaled into the
//! 800x600 canvas before the distance test. A hand collides with a target
//! when ANY of its keypoints lies strictly inside the target's radius.

use glam::Vec2;

use crate::landmark_to_canvas;

/// Check whether a hand's landmark set touches a target circle.
///
/// The boundary does not count: a keypoint at exactly `radius` from the
/// center is a miss. An empty landmark set never collides.
pub fn hand_hits_target(landmarks: &[Vec2], center: Vec2, radius: f32) -> bool {
    landmarks
        .iter()
        .any(|&lm| landmark_to_canvas(lm).distance(center) < radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH, TARGET_RADIUS};
    use proptest::prelude::*;

    /// Normalized coordinates that map onto a given canvas point
    fn norm(x: f32, y: f32) -> Vec2 {
        Vec2::new(x / CANVAS_WIDTH, y / CANVAS_HEIGHT)
    }

    #[test]
    fn test_landmark_on_center_collides() {
        let center = Vec2::new(300.0, 500.0);
        assert!(hand_hits_target(&[norm(300.0, 500.0)], center, TARGET_RADIUS));
    }

    #[test]
    fn test_landmark_outside_radius_misses() {
        let center = Vec2::new(300.0, 500.0);
        // Distance 60 > radius 50
        assert!(!hand_hits_target(&[norm(300.0, 560.0)], center, TARGET_RADIUS));
    }

    #[test]
    fn test_boundary_is_a_miss() {
        let center = Vec2::new(300.0, 500.0);
        // Exactly on the radius: strict inequality says no
        assert!(!hand_hits_target(&[norm(300.0, 550.0)], center, TARGET_RADIUS));
        assert!(!hand_hits_target(&[norm(250.0, 500.0)], center, TARGET_RADIUS));
        // Just inside
        assert!(hand_hits_target(&[norm(300.0, 549.0)], center, TARGET_RADIUS));
    }

    #[test]
    fn test_any_keypoint_counts() {
        let center = Vec2::new(300.0, 500.0);
        let hand = [
            norm(10.0, 10.0),
            norm(790.0, 10.0),
            norm(310.0, 490.0), // inside
        ];
        assert!(hand_hits_target(&hand, center, TARGET_RADIUS));
    }

    #[test]
    fn test_empty_hand_never_collides() {
        let center = Vec2::new(300.0, 500.0);
        assert!(!hand_hits_target(&[], center, TARGET_RADIUS));
    }

    proptest! {
        /// A keypoint placed strictly inside the radius always collides;
        /// one placed at or beyond it never does.
        #[test]
        fn prop_distance_rule(
            cx in 100.0f32..700.0,
            cy in 100.0f32..500.0,
            angle in 0.0f32..std::f32::consts::TAU,
            inside_frac in 0.0f32..0.98,
            outside_extra in 0.0f32..200.0,
        ) {
            let center = Vec2::new(cx, cy);
            let dir = Vec2::new(angle.cos(), angle.sin());

            let inside = center + dir * (TARGET_RADIUS * inside_frac);
            prop_assert!(hand_hits_target(&[norm(inside.x, inside.y)], center, TARGET_RADIUS));

            let outside = center + dir * (TARGET_RADIUS + 1.0 + outside_extra);
            prop_assert!(!hand_hits_target(&[norm(outside.x, outside.y)], center, TARGET_RADIUS));
        }
    }
}
