use macroquad::logging::{error, info};
use macroquad::prelude::*;
use two_phase_life::{
    GameState, SimulationConfig,
    ui, rendering, input,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: 760,
        window_height: 600,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = match SimulationConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            eprintln!("usage: two_phase_life [t|r] [rows cols] [--seed N] [--p-alive P]");
            std::process::exit(2);
        }
    };
    info!(
        "starting {}x{} world, initial condition {:?}",
        config.width, config.height, config.initial
    );

    let mut state = match GameState::from_config(&config) {
        Ok(state) => state,
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        }
    };

    loop {
        let mouse_pos = mouse_position();

        let mut buttons = ui::create_buttons();
        buttons[0].set_label(if state.is_running() { "Pause" } else { "Play" });

        state = input::process_button_clicks(state, &buttons, mouse_pos);
        state = input::process_keyboard_input(state);

        // A generation is applied whole inside tick, never across frames
        state = state.tick(get_frame_time());

        clear_background(WHITE);
        rendering::draw_grid(&state.grid);
        rendering::draw_controls(&state, &buttons, mouse_pos);

        next_frame().await;
    }
}
