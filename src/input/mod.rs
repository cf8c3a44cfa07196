use macroquad::prelude::*;
use crate::application::GameState;
use crate::ui::Button;

/// Process keyboard input functionally
pub fn process_keyboard_input(mut state: GameState) -> GameState {
    if is_key_pressed(KeyCode::P) {
        state.pause();
    } else if is_key_pressed(KeyCode::R) {
        state.resume();
    }

    if is_key_pressed(KeyCode::Space) {
        state.manual_step();
    } else if is_key_pressed(KeyCode::H) {
        state.manual_half_step();
    }

    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 7] = [
        (KeyCode::N, GameState::randomize),
        (KeyCode::T, GameState::reseed_test_world),
        (KeyCode::C, GameState::next_pattern),
        (KeyCode::I, GameState::reset),
        (KeyCode::M, GameState::cycle_mode),
        (KeyCode::Up, |s| s.adjust_speed(1.0)),
        (KeyCode::Down, |s| s.adjust_speed(-1.0)),
    ];

    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// Process button clicks functionally, in `ui::create_buttons` order
pub fn process_button_clicks(
    state: GameState,
    buttons: &[Button],
    mouse_pos: (f32, f32)
) -> GameState {
    buttons
        .iter()
        .enumerate()
        .fold(state, |mut s, (idx, btn)| {
            if !btn.is_clicked(mouse_pos) {
                return s;
            }
            match idx {
                0 => s.toggle_running(),
                1 => {
                    s.manual_step();
                    s
                }
                2 => s.randomize(),
                3 => s.reseed_test_world(),
                _ => s,
            }
        })
}
