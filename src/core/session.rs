//! Session orchestration: the Waiting → Running → GameOver machine.

use super::clock::Clock;
use super::collision;
use super::config::RunnerConfig;
use super::obstacles::ObstacleSpawner;
use super::player::Player;
use super::score::ScoreTracker;
use super::scroll::ScrollLayer;
use super::sky::DayNightCycle;
use super::WORLD_COLS;

/// Session phase. Transitions are one-directional; `GameOver` is terminal
/// until the frame loop rebuilds the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Waiting,
    Running,
    GameOver,
}

/// Cloud layout: (starting column, row, speed cols/sec, extent cols).
const CLOUD_LAYERS: [(f64, u16, f64, f64); 3] = [
    (8.0, 2, 1.0, 5.0),
    (24.0, 4, 1.6, 4.0),
    (44.0, 3, 2.2, 4.0),
];

/// The whole game model: one aggregate, exclusively owned by the frame
/// loop, mutated only through `handle_input` and `tick`.
#[derive(Debug, Clone)]
pub struct GameSession {
    phase: GamePhase,
    pub clock: Clock,
    pub player: Player,
    pub spawner: ObstacleSpawner,
    pub sky: DayNightCycle,
    pub score: ScoreTracker,
    pub clouds: Vec<ScrollLayer>,

    // Cached tuning
    gravity: f64,
    jump_impulse: f64,
}

impl GameSession {
    pub fn new(config: &RunnerConfig) -> Self {
        let clouds = CLOUD_LAYERS
            .iter()
            .map(|&(x, row, speed, extent)| {
                ScrollLayer::new(x, row, speed, extent, WORLD_COLS as f64)
            })
            .collect();

        Self {
            phase: GamePhase::Waiting,
            clock: Clock::new(),
            player: Player::new(),
            spawner: ObstacleSpawner::new(config.spawn_interval, config.obstacle_speed),
            sky: DayNightCycle::new(config.day_length),
            score: ScoreTracker::new(),
            clouds,
            gravity: config.gravity,
            jump_impulse: config.jump_impulse,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The single abstract tap/keypress. Starts the run from the waiting
    /// screen; jumps while running (ignored unless grounded); ignored
    /// once the run has ended.
    pub fn handle_input(&mut self) {
        match self.phase {
            GamePhase::Waiting => self.phase = GamePhase::Running,
            GamePhase::Running => self.player.apply_jump_impulse(self.jump_impulse),
            GamePhase::GameOver => {}
        }
    }

    /// Advance the simulation by `dt` seconds. Inert outside `Running`,
    /// so the terminal phase freezes every position and counter at once.
    /// Returns true if any tracked state changed.
    ///
    /// Component order is load-bearing: obstacles move before the
    /// collision check, so a hit lands in the tick it happens rather than
    /// one frame late.
    pub fn tick(&mut self, dt: f64) -> bool {
        if self.phase != GamePhase::Running || dt <= 0.0 {
            return false;
        }

        self.clock.advance(dt);
        for cloud in &mut self.clouds {
            cloud.advance(dt);
        }
        let mut rng = rand::thread_rng();
        self.spawner.update(dt, &mut rng);
        self.player.integrate(dt, self.gravity);
        self.sky.update(dt);
        self.score.update(dt);

        if collision::check(&self.player, self.spawner.live()) {
            self.phase = GamePhase::GameOver;
        }
        true
    }
}
