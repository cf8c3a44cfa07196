use macroquad::prelude::*;
use crate::application::{GameState, Phase};
use crate::domain::{CellState, Grid};
use crate::ui::{Button, MARGIN, PANEL_WIDTH, cell_size, panel_x};

const BEIGE: Color = Color::new(0.96, 0.96, 0.86, 1.0);
const GRID_LINE: Color = Color::new(0.8, 0.8, 0.8, 1.0);

/// Fill color per state. Transient states are only on screen while half-stepping.
const fn cell_color(cell: CellState) -> Color {
    match cell {
        CellState::Dead => WHITE,
        CellState::Alive => BLACK,
        CellState::Zombie => Color::new(0.75, 0.2, 0.2, 1.0),
        CellState::Embryo => Color::new(0.3, 0.7, 0.3, 1.0),
    }
}

/// Top-left screen corner of cell (x, y)
pub fn grid_to_screen(x: usize, y: usize, size: f32) -> (f32, f32) {
    (MARGIN + x as f32 * size, MARGIN + y as f32 * size)
}

/// Draw every cell of the grid inside the margin
pub fn draw_grid(grid: &Grid) {
    let (width, height) = grid.dimensions();
    let size = cell_size(width, height);
    let draw_lines = size >= 4.0;

    for (x, y, cell) in grid.iter_cells() {
        let (sx, sy) = grid_to_screen(x, y, size);
        draw_rectangle(sx, sy, size, size, cell_color(cell));
        if draw_lines {
            draw_rectangle_lines(sx, sy, size, size, 1.0, GRID_LINE);
        }
    }

    draw_rectangle_lines(
        MARGIN,
        MARGIN,
        width as f32 * size,
        height as f32 * size,
        2.0,
        BLACK,
    );
}

/// Draw the side panel: buttons, time step and status
pub fn draw_controls(state: &GameState, buttons: &[Button], mouse_pos: (f32, f32)) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), BEIGE);

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let (gw, gh) = state.grid.dimensions();
    let status = match (state.is_running(), state.phase) {
        (_, Phase::Marked) => "Half-step",
        (true, Phase::Stable) => "Running",
        (false, Phase::Stable) => "Paused",
    };

    let labels = [
        (format!("Time = {}", state.time_step), 250.0, 20.0),
        (status.to_string(), 275.0, 16.0),
        (format!("Grid: {}x{}", gw, gh), 300.0, 14.0),
        (format!("Alive: {}", state.grid.live_count()), 318.0, 14.0),
        (format!("{:.0} gen/s", state.updates_per_second), 336.0, 14.0),
        (
            format!("{} {:.2}ms", state.mode.name(), state.last_generation_ms),
            354.0,
            14.0,
        ),
        (state.mode.description().to_string(), 370.0, 12.0),
        ("P: pause  R: resume".to_string(), 400.0, 12.0),
        ("Paused - Space: step  H: half".to_string(), 415.0, 12.0),
        ("N: random  T: test  I: reset".to_string(), 430.0, 12.0),
        ("C: next pattern".to_string(), 445.0, 12.0),
        ("M: mode  Up/Down: speed".to_string(), 460.0, 12.0),
    ];

    labels.iter().for_each(|(text, y, size)| {
        draw_text(text, px + 8.0, *y, *size, BLACK);
    });
}
