//! Terminal rendering. Reads core state every frame; never mutates it.

pub mod game_common;
pub mod run_scene;

use ratatui::Frame;

use crate::core::session::GameSession;

/// Draw the whole UI for one frame.
pub fn draw(frame: &mut Frame, session: &GameSession) {
    let area = frame.size();
    run_scene::render_run_scene(frame, area, session);
}
