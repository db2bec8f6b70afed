//! Game core: the session state machine and its tick-driven components.
//!
//! Everything under this module is pure simulation — no terminal, no wall
//! clock, no I/O. The frame loop in `main.rs` feeds it per-frame deltas
//! and the renderer reads its state.

pub mod clock;
pub mod collision;
pub mod config;
pub mod obstacles;
pub mod player;
pub mod score;
pub mod scroll;
pub mod session;
pub mod sky;

// These re-exports form the library's public surface (exercised by the
// integration tests via `duskrunner::core::…`). The binary target compiles
// this module too but doesn't touch every re-export, so silence the
// per-target `unused_imports` deny here.
#[allow(unused_imports)]
pub use clock::Clock;
#[allow(unused_imports)]
pub use collision::Aabb;
#[allow(unused_imports)]
pub use config::RunnerConfig;
#[allow(unused_imports)]
pub use obstacles::{CritterLook, Obstacle, ObstacleSpawner};
#[allow(unused_imports)]
pub use player::Player;
#[allow(unused_imports)]
pub use score::ScoreTracker;
#[allow(unused_imports)]
pub use scroll::ScrollLayer;
#[allow(unused_imports)]
pub use session::{GamePhase, GameSession};
#[allow(unused_imports)]
pub use sky::{DayNightCycle, SkyTargets};

/// Playing field width in columns.
pub const WORLD_COLS: u16 = 64;
/// Playing field height in rows.
pub const WORLD_ROWS: u16 = 18;
/// Row the runner's feet rest on.
pub const GROUND_ROW: u16 = 15;
