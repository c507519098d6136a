//! Collision checks for the play field
//!
//! Everything here is circle-vs-circle: the player's catch radius against
//! bird and power-up centers. Out-of-bounds movement is prevented by
//! clamping, never reported as a collision.

use glam::Vec2;

use crate::distance;

/// True when two circles overlap (strict, touching is not a hit)
#[inline]
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    distance(a, b) < a_radius + b_radius
}

/// Capture check between the player and a bird center
#[inline]
pub fn player_reaches(player_pos: Vec2, player_radius: f32, target: Vec2, target_radius: f32) -> bool {
    circles_overlap(player_pos, player_radius, target, target_radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{BIRD_WIDTH, PLAYER_RADIUS, POWERUP_RADIUS};

    #[test]
    fn test_circles_overlap_inside() {
        let a = Vec2::new(100.0, 100.0);
        let b = Vec2::new(130.0, 100.0);
        assert!(circles_overlap(a, 30.0, b, 20.0));
    }

    #[test]
    fn test_circles_touching_is_miss() {
        // Exactly radius-sum apart: the strict inequality keeps this a miss
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(50.0, 0.0);
        assert!(!circles_overlap(a, 30.0, b, 20.0));
    }

    #[test]
    fn test_circles_apart_miss() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(200.0, 150.0);
        assert!(!circles_overlap(a, 30.0, b, 20.0));
    }

    #[test]
    fn test_capture_range_matches_bird_width() {
        let player = Vec2::new(100.0, 100.0);
        // Bird just inside the combined radius (30 + 40/2 = 50)
        let near = Vec2::new(149.0, 100.0);
        let far = Vec2::new(151.0, 100.0);
        assert!(player_reaches(player, PLAYER_RADIUS, near, BIRD_WIDTH / 2.0));
        assert!(!player_reaches(player, PLAYER_RADIUS, far, BIRD_WIDTH / 2.0));
    }

    #[test]
    fn test_powerup_pickup_range() {
        let player = Vec2::new(300.0, 300.0);
        let reachable = Vec2::new(300.0, 344.0);
        assert!(player_reaches(
            player,
            PLAYER_RADIUS,
            reachable,
            POWERUP_RADIUS
        ));
    }
}
