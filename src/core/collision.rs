//! Axis-aligned bounding-box overlap testing.

use super::obstacles::Obstacle;
use super::player::Player;

/// Axis-aligned box. `y` is the top edge; rows grow downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Aabb {
    /// True iff the boxes overlap with positive area. Edge contact does
    /// not count.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

/// Test the runner against every live obstacle. Pure query; the session
/// applies the side effects of a hit.
pub fn check(player: &Player, obstacles: &[Obstacle]) -> bool {
    let runner = player.bounds();
    obstacles.iter().any(|o| runner.intersects(&o.bounds()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::obstacles::CritterLook;
    use crate::core::player::{RUNNER_COL, RUNNER_WIDTH};
    use crate::core::GROUND_ROW;

    fn critter_at(x: f64) -> Obstacle {
        Obstacle {
            id: 0,
            x,
            look: CritterLook::Ant,
        }
    }

    #[test]
    fn test_overlap_is_a_hit() {
        let player = Player::new();
        assert!(check(&player, &[critter_at(RUNNER_COL as f64)]));
    }

    #[test]
    fn test_partial_overlap_is_a_hit() {
        let player = Player::new();
        let barely = (RUNNER_COL + RUNNER_WIDTH) as f64 - 0.01;
        assert!(check(&player, &[critter_at(barely)]));
    }

    #[test]
    fn test_edge_contact_is_not_a_hit() {
        let player = Player::new();
        // Obstacle's left edge exactly on the runner's right edge.
        let touching = (RUNNER_COL + RUNNER_WIDTH) as f64;
        assert!(!check(&player, &[critter_at(touching)]));
    }

    #[test]
    fn test_vertical_edge_contact_is_not_a_hit() {
        let mut player = Player::new();
        // Feet exactly on the critter's top edge: zero-area contact.
        player.y = GROUND_ROW as f64 - 1.0;
        assert!(!check(&player, &[critter_at(RUNNER_COL as f64)]));
    }

    #[test]
    fn test_jumping_clears_ground_critter() {
        let mut player = Player::new();
        player.y = 11.0;
        assert!(!check(&player, &[critter_at(RUNNER_COL as f64)]));
    }

    #[test]
    fn test_horizontal_miss() {
        let player = Player::new();
        assert!(!check(&player, &[critter_at(40.0)]));
    }

    #[test]
    fn test_any_obstacle_in_set_counts() {
        let player = Player::new();
        let obstacles = vec![critter_at(40.0), critter_at(RUNNER_COL as f64), critter_at(20.0)];
        assert!(check(&player, &obstacles));
    }

    #[test]
    fn test_empty_set_never_hits() {
        let player = Player::new();
        assert!(!check(&player, &[]));
    }

    #[test]
    fn test_intersects_is_symmetric() {
        let a = Aabb { x: 0.0, y: 0.0, w: 2.0, h: 2.0 };
        let b = Aabb { x: 1.0, y: 1.0, w: 2.0, h: 2.0 };
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));

        let c = Aabb { x: 2.0, y: 0.0, w: 2.0, h: 2.0 };
        assert!(!a.intersects(&c));
        assert!(!c.intersects(&a));
    }
}
