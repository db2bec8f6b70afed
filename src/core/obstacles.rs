//! Obstacle spawning, movement, and eviction.

use rand::Rng;

use super::collision::Aabb;
use super::{GROUND_ROW, WORLD_COLS};

/// Obstacle hitbox in columns × rows. Identical for every look.
pub const OBSTACLE_WIDTH: u16 = 2;
pub const OBSTACLE_HEIGHT: u16 = 1;

/// Obstacles are evicted once fully past the left edge.
pub const OFFSCREEN_X: f64 = -6.0;

/// Appearance chosen at spawn. Cosmetic only; the hitbox never varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CritterLook {
    Ant,
    Beetle,
}

/// A critter marching leftward at the session's constant speed.
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub id: u64,
    /// Left edge in columns (float for smooth scrolling).
    pub x: f64,
    pub look: CritterLook,
}

impl Obstacle {
    /// Bounding box. The bottom edge sits on the ground row.
    pub fn bounds(&self) -> Aabb {
        Aabb {
            x: self.x,
            y: GROUND_ROW as f64 - OBSTACLE_HEIGHT as f64,
            w: OBSTACLE_WIDTH as f64,
            h: OBSTACLE_HEIGHT as f64,
        }
    }
}

/// Spawns critters on a fixed-delay countdown and owns the live set.
#[derive(Debug, Clone)]
pub struct ObstacleSpawner {
    pub obstacles: Vec<Obstacle>,
    /// Seconds until the next spawn.
    pub countdown: f64,
    /// Full delay restored after each spawn.
    pub interval: f64,
    /// Horizontal velocity in cols/sec. Always negative.
    pub speed: f64,
    next_id: u64,
}

impl ObstacleSpawner {
    pub fn new(interval: f64, speed: f64) -> Self {
        Self {
            obstacles: Vec::new(),
            countdown: interval,
            interval,
            speed,
            next_id: 0,
        }
    }

    /// Advance every live critter, evict the ones fully off-screen, then
    /// run the spawn countdown. The countdown resets to the full interval
    /// on spawn (fixed delay), so late ticks do not compound into bursts.
    pub fn update<R: Rng>(&mut self, dt: f64, rng: &mut R) {
        for obstacle in &mut self.obstacles {
            obstacle.x += self.speed * dt;
        }
        self.obstacles.retain(|o| o.x > OFFSCREEN_X);

        self.countdown -= dt;
        if self.countdown <= 0.0 {
            self.spawn(rng);
            self.countdown = self.interval;
        }
    }

    /// Create one critter just past the right edge of the world.
    fn spawn<R: Rng>(&mut self, rng: &mut R) {
        let look = if rng.gen::<bool>() {
            CritterLook::Ant
        } else {
            CritterLook::Beetle
        };
        self.obstacles.push(Obstacle {
            id: self.next_id,
            x: (WORLD_COLS + OBSTACLE_WIDTH) as f64,
            look,
        });
        self.next_id += 1;
    }

    /// The live set, oldest first.
    pub fn live(&self) -> &[Obstacle] {
        &self.obstacles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const DT: f64 = 0.015625;
    const INTERVAL: f64 = 2.0;
    const SPEED: f64 = -16.0;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn test_no_spawn_before_interval() {
        let mut spawner = ObstacleSpawner::new(INTERVAL, SPEED);
        let mut rng = rng();

        // 127 steps of 1/64 s = 1.984375 s < 2 s.
        for _ in 0..127 {
            spawner.update(DT, &mut rng);
        }
        assert!(spawner.obstacles.is_empty());
    }

    #[test]
    fn test_first_spawn_after_exactly_one_interval() {
        let mut spawner = ObstacleSpawner::new(INTERVAL, SPEED);
        let mut rng = rng();

        for _ in 0..128 {
            spawner.update(DT, &mut rng);
        }
        assert_eq!(spawner.obstacles.len(), 1);
        assert!(
            spawner.obstacles[0].x >= WORLD_COLS as f64,
            "Critter should spawn off the right edge"
        );
    }

    #[test]
    fn test_fixed_delay_does_not_compound() {
        let mut spawner = ObstacleSpawner::new(INTERVAL, SPEED);
        let mut rng = rng();

        // One enormous delta worth several intervals spawns once; the
        // delay restarts in full afterwards.
        spawner.update(INTERVAL * 3.0, &mut rng);
        assert_eq!(spawner.obstacles.len(), 1);
        assert!((spawner.countdown - INTERVAL).abs() < f64::EPSILON);
    }

    #[test]
    fn test_obstacles_march_left_at_fixed_velocity() {
        let mut spawner = ObstacleSpawner::new(INTERVAL, SPEED);
        let mut rng = rng();
        spawner.obstacles.push(Obstacle {
            id: 0,
            x: 30.0,
            look: CritterLook::Ant,
        });
        spawner.countdown = 999.0; // Prevent spawning

        let mut previous = spawner.obstacles[0].x;
        for _ in 0..10 {
            spawner.update(DT, &mut rng);
            let x = spawner.obstacles[0].x;
            assert!(x < previous, "Critters should move strictly left");
            assert!(
                ((previous - x) - (-SPEED * DT)).abs() < f64::EPSILON,
                "Step distance should match the fixed velocity"
            );
            previous = x;
        }
    }

    #[test]
    fn test_offscreen_eviction() {
        let mut spawner = ObstacleSpawner::new(INTERVAL, SPEED);
        let mut rng = rng();
        spawner.obstacles.push(Obstacle {
            id: 0,
            x: OFFSCREEN_X + 0.1,
            look: CritterLook::Beetle,
        });
        spawner.countdown = 999.0;

        spawner.update(DT, &mut rng);

        assert!(
            spawner.obstacles.is_empty(),
            "Critters past the threshold should be evicted"
        );
    }

    #[test]
    fn test_evicted_never_returns() {
        let mut spawner = ObstacleSpawner::new(INTERVAL, SPEED);
        let mut rng = rng();
        spawner.obstacles.push(Obstacle {
            id: 0,
            x: OFFSCREEN_X + 0.1,
            look: CritterLook::Ant,
        });
        spawner.countdown = 999.0;

        for _ in 0..50 {
            spawner.update(DT, &mut rng);
        }
        assert!(spawner.obstacles.is_empty());
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut spawner = ObstacleSpawner::new(0.5, SPEED);
        let mut rng = rng();

        for _ in 0..4 {
            spawner.update(0.5, &mut rng);
        }
        let ids: Vec<u64> = spawner.obstacles.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_look_does_not_change_hitbox() {
        let ant = Obstacle {
            id: 0,
            x: 12.0,
            look: CritterLook::Ant,
        };
        let beetle = Obstacle {
            id: 1,
            x: 12.0,
            look: CritterLook::Beetle,
        };
        assert_eq!(ant.bounds(), beetle.bounds());
    }

    #[test]
    fn test_bounds_sit_on_ground() {
        let critter = Obstacle {
            id: 0,
            x: 20.0,
            look: CritterLook::Ant,
        };
        let bounds = critter.bounds();
        assert!(((bounds.y + bounds.h) - GROUND_ROW as f64).abs() < f64::EPSILON);
    }
}
