mod button;

pub use button::Button;

// UI constants - functions for responsive layout
use macroquad::prelude::{screen_width, screen_height};

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
/// Gap around the grid area, matches the classic 100px window margin scaled down
pub const MARGIN: f32 = 40.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Square cell size that fits a grid of the given dimensions in the grid area
pub fn cell_size(grid_width: usize, grid_height: usize) -> f32 {
    let w = (grid_area_width() - 2.0 * MARGIN) / grid_width as f32;
    let h = (grid_area_height() - 2.0 * MARGIN) / grid_height as f32;
    w.min(h).max(1.0)
}

/// Create UI buttons with standard layout.
/// Order matters: `input::process_button_clicks` dispatches on index.
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x();
    vec![
        Button::new(px, 20.0, PANEL_WIDTH, BUTTON_HEIGHT, "Play/Pause"),
        Button::new(px, 70.0, PANEL_WIDTH, BUTTON_HEIGHT, "Step"),
        Button::new(px, 120.0, PANEL_WIDTH, BUTTON_HEIGHT, "Random"),
        Button::new(px, 170.0, PANEL_WIDTH, BUTTON_HEIGHT, "Test World"),
    ]
}
