//! Run scene rendering.
//!
//! Uses a cell buffer for per-character color control: sky, clouds,
//! sun/moon, ground, critters, and the runner are drawn into a 2D grid
//! and then stamped row-by-row as Paragraph widgets.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::core::obstacles::CritterLook;
use crate::core::player::{RUNNER_COL, RUNNER_HEIGHT, RUNNER_WIDTH};
use crate::core::session::{GamePhase, GameSession};
use crate::core::{GROUND_ROW, WORLD_COLS, WORLD_ROWS};

use super::game_common::{
    create_scene_layout, render_info_panel_frame, render_overlay_panel, render_status_bar,
};

// ── Ground rendering characters ─────────────────────────────────────
const GROUND_CHAR: char = '▓';
const GROUND_SUB: char = '░';
const CLOUD_CHAR: char = '▒';

/// Render the full run scene.
pub fn render_run_scene(frame: &mut Frame, area: Rect, session: &GameSession) {
    let border_color = if session.sky.is_day() {
        Color::LightYellow
    } else {
        Color::LightBlue
    };

    let layout = create_scene_layout(frame, area, " duskrunner ", border_color, 15, 20);

    render_play_field(frame, layout.content, session);

    match session.phase() {
        GamePhase::Waiting => render_start_prompt(frame, layout.content),
        GamePhase::GameOver => render_game_over(frame, layout.content, session),
        GamePhase::Running => {}
    }

    render_status_bar_content(frame, layout.status_bar, session);
    render_info_panel(frame, layout.info_panel, session);
}

/// Cell in the render buffer with foreground and background colors.
#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

/// Render the play field: sky, clouds, sun/moon, ground, critters, runner.
fn render_play_field(frame: &mut Frame, area: Rect, session: &GameSession) {
    if area.height < 2 || area.width < 10 {
        return;
    }

    let render_height = area.height.min(WORLD_ROWS);
    let render_width = area.width.min(WORLD_COLS);

    let mut buffer: Vec<Vec<Cell>> =
        vec![vec![Cell::default(); render_width as usize]; render_height as usize];

    let y_scale = render_height as f64 / WORLD_ROWS as f64;
    let x_scale = render_width as f64 / WORLD_COLS as f64;

    let targets = session.sky.targets();
    let sky_bg = Color::Rgb(targets.tint.0, targets.tint.1, targets.tint.2);
    let ground_row = ((GROUND_ROW + 1) as f64 * y_scale).round() as usize;
    let ground_row = ground_row.min(render_height as usize - 1);

    // ── Sky backdrop ──────────────────────────────────────────────────
    for row in buffer.iter_mut().take(ground_row) {
        for cell in row.iter_mut() {
            cell.bg = sky_bg;
        }
    }

    // ── Clouds (parallax layers) ──────────────────────────────────────
    let cloud_fg = if session.sky.is_day() {
        Color::Rgb(205, 205, 215)
    } else {
        Color::Rgb(110, 118, 140)
    };
    for cloud in &session.clouds {
        let row = (cloud.row as f64 * y_scale).round() as usize;
        if row >= ground_row {
            continue;
        }
        let start = (cloud.x * x_scale).round() as i32;
        let span = (cloud.extent * x_scale).round().max(1.0) as i32;
        for dx in 0..span {
            let col = start + dx;
            if col >= 0 && col < render_width as i32 {
                buffer[row][col as usize].ch = CLOUD_CHAR;
                buffer[row][col as usize].fg = cloud_fg;
            }
        }
    }

    // ── Sun or moon (top-right, per the sky targets) ──────────────────
    if render_width > 6 && render_height > 2 {
        let col = (render_width - 4) as usize;
        let (ch, fg) = if targets.sun_alpha > targets.moon_alpha {
            ('O', Color::Rgb(250, 205, 60))
        } else {
            ('C', Color::Rgb(215, 215, 235))
        };
        buffer[1][col].ch = ch;
        buffer[1][col].fg = fg;
    }

    // ── Ground band ───────────────────────────────────────────────────
    let (ground_fg, ground_bg) = if session.sky.is_day() {
        (Color::Rgb(150, 120, 70), Color::Rgb(80, 62, 36))
    } else {
        (Color::Rgb(90, 75, 50), Color::Rgb(45, 36, 24))
    };
    for row in ground_row..render_height as usize {
        for (i, cell) in buffer[row].iter_mut().enumerate() {
            if row == ground_row {
                *cell = Cell {
                    ch: GROUND_CHAR,
                    fg: ground_fg,
                    bg: ground_bg,
                };
            } else {
                *cell = Cell {
                    ch: if i % 5 == 0 { GROUND_SUB } else { ' ' },
                    fg: ground_fg,
                    bg: ground_bg,
                };
            }
        }
    }

    // ── Critters ──────────────────────────────────────────────────────
    for obstacle in session.spawner.live() {
        let (ch, fg) = match obstacle.look {
            CritterLook::Ant => ('m', Color::Rgb(175, 85, 50)),
            CritterLook::Beetle => ('o', Color::Rgb(120, 120, 135)),
        };
        let row = (GROUND_ROW as f64 * y_scale).round() as usize;
        let start = (obstacle.x * x_scale).round() as i32;
        let width = (obstacle.bounds().w * x_scale).ceil().max(1.0) as i32;
        for dx in 0..width {
            let col = start + dx;
            if col >= 0 && col < render_width as i32 && row < render_height as usize {
                buffer[row][col as usize].ch = ch;
                buffer[row][col as usize].fg = fg;
            }
        }
    }

    // ── Runner ────────────────────────────────────────────────────────
    let runner_color = if session.phase() == GamePhase::GameOver {
        Color::Red
    } else {
        Color::LightYellow
    };
    let runner_col = (RUNNER_COL as f64 * x_scale).round() as i32;
    let runner_foot_row = (session.player.y * y_scale).round() as i32;
    let runner_w = (RUNNER_WIDTH as f64 * x_scale).ceil().max(1.0) as i32;
    let stride_frame = (session.clock.elapsed() * 8.0) as u64 % 2;

    for dy in 0..RUNNER_HEIGHT as i32 {
        let row = runner_foot_row - dy;
        if row < 0 || row >= render_height as i32 {
            continue;
        }
        for dx in 0..runner_w {
            let col = runner_col + dx;
            if col < 0 || col >= render_width as i32 {
                continue;
            }
            let ch = if dy == 0 && session.player.grounded {
                // Feet: alternating stride while on the ground
                if stride_frame == 0 {
                    if dx == 0 {
                        '/'
                    } else {
                        ' '
                    }
                } else if dx == 0 {
                    ' '
                } else {
                    '\\'
                }
            } else {
                '█'
            };
            if ch != ' ' {
                buffer[row as usize][col as usize].ch = ch;
                buffer[row as usize][col as usize].fg = runner_color;
            }
        }
    }

    // ── Score readout (top-left) ──────────────────────────────────────
    let score_text = format!("Score: {}", session.score.points());
    for (i, ch) in score_text.chars().enumerate() {
        if i + 1 < render_width as usize {
            buffer[0][i + 1] = Cell {
                ch,
                fg: Color::White,
                bg: sky_bg,
            };
        }
    }

    // ── Render buffer to terminal ─────────────────────────────────────
    let x_offset = area.x;
    let y_offset = area.y;

    for (row_idx, row_data) in buffer.iter().enumerate().take(render_height as usize) {
        let mut spans: Vec<Span> = Vec::new();
        let mut current_fg = Color::Reset;
        let mut current_bg = Color::Reset;
        let mut current_text = String::new();

        for &cell in row_data.iter() {
            if (cell.fg != current_fg || cell.bg != current_bg) && !current_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut current_text),
                    Style::default().fg(current_fg).bg(current_bg),
                ));
            }
            current_fg = cell.fg;
            current_bg = cell.bg;
            current_text.push(cell.ch);
        }
        if !current_text.is_empty() {
            spans.push(Span::styled(
                current_text,
                Style::default().fg(current_fg).bg(current_bg),
            ));
        }

        let line = Paragraph::new(Line::from(spans));
        let row_area = Rect::new(x_offset, y_offset + row_idx as u16, render_width, 1);
        if row_area.y < area.y + area.height {
            frame.render_widget(line, row_area);
        }
    }
}

/// Render the "Press Space to Start" prompt centered on the play field.
fn render_start_prompt(frame: &mut Frame, area: Rect) {
    if area.height < 5 || area.width < 20 {
        return;
    }

    let center_y = area.y + area.height / 2;
    let prompt = "[ Press Space to Start ]";
    let x = area.x + area.width.saturating_sub(prompt.len() as u16) / 2;

    let line = Paragraph::new(Line::from(vec![Span::styled(
        prompt,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )]));

    let prompt_area = Rect::new(x, center_y, prompt.len() as u16, 1);
    if prompt_area.y < area.y + area.height {
        frame.render_widget(line, prompt_area);
    }
}

/// Render the game over overlay on top of the frozen scene.
fn render_game_over(frame: &mut Frame, area: Rect, session: &GameSession) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("You survived {} seconds.", session.score.points()),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[R]", Style::default().fg(Color::Yellow)),
            Span::styled(" Restart   ", Style::default().fg(Color::DarkGray)),
            Span::styled("[Q]", Style::default().fg(Color::Yellow)),
            Span::styled(" Quit", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
    ];
    render_overlay_panel(frame, area, " GAME OVER ", Color::Red, lines);
}

/// Render the status bar below the play field.
fn render_status_bar_content(frame: &mut Frame, area: Rect, session: &GameSession) {
    match session.phase() {
        GamePhase::Waiting => render_status_bar(
            frame,
            area,
            "Ready",
            Color::LightYellow,
            &[("[Space]", "Start"), ("[Q]", "Quit")],
        ),
        GamePhase::Running => render_status_bar(
            frame,
            area,
            "Run!",
            Color::LightYellow,
            &[("[Space/Up]", "Jump"), ("[Q]", "Quit")],
        ),
        GamePhase::GameOver => render_status_bar(
            frame,
            area,
            "Down",
            Color::Red,
            &[("[R]", "Restart"), ("[Q]", "Quit")],
        ),
    }
}

/// Render the info panel on the right side.
fn render_info_panel(frame: &mut Frame, area: Rect, session: &GameSession) {
    let inner = render_info_panel_frame(frame, area);

    let (sky_label, sky_color) = if session.sky.is_day() {
        ("Day", Color::LightYellow)
    } else {
        ("Night", Color::LightBlue)
    };
    let phase_pct = (session.sky.phase_progress() * 100.0).round() as u32;

    let lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", session.score.points()),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Sky: ", Style::default().fg(Color::DarkGray)),
            Span::styled(sky_label, Style::default().fg(sky_color)),
            Span::styled(
                format!(" ({}%)", phase_pct),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(" █ ", Style::default().fg(Color::LightYellow)),
            Span::styled("Runner", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(" m ", Style::default().fg(Color::Rgb(175, 85, 50))),
            Span::styled("Critter", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(" ▒ ", Style::default().fg(Color::Rgb(205, 205, 215))),
            Span::styled("Cloud", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Jump the critters.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "Survive the night.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let text = Paragraph::new(lines);
    frame.render_widget(text, inner);
}
