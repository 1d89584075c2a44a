use std::fmt::Display;

use clap::Parser;
use macroquad::prelude::*;
use pctlife::{
    BoardLayout, Config, GameState, GridEngine, PatternError, input, rendering,
    ui::{ColorPicker, MENU_BAR_HEIGHT, MIN_WINDOW_WIDTH, MenuAction, MenuBar, PickerTarget},
};
use tracing_subscriber::EnvFilter;

fn window_conf(config: &Config, layout: &BoardLayout) -> Conf {
    let side = layout.extent(config.board_size as usize);
    Conf {
        window_title: "PctLife".to_owned(),
        window_width: side.max(MIN_WINDOW_WIDTH) as i32,
        window_height: (side + MENU_BAR_HEIGHT) as i32,
        window_resizable: false,
        ..Default::default()
    }
}

fn bail_out(msg: impl Display) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

/// Message printed to stderr before exiting on a bad pattern file
fn load_failure(err: &PatternError) -> String {
    format!("Failed to load pattern: {err}")
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pctlife=info")),
        )
        .init();

    let config = Config::parse();
    if let Err(err) = config.validate() {
        bail_out(err);
    }

    let mut engine = GridEngine::new(config.board_size as usize);
    match &config.pattern {
        Some(path) => {
            if let Err(err) = engine.load_pattern_file(path) {
                tracing::warn!(%err, "rejected pattern");
                bail_out(load_failure(&err));
            }
        }
        None => engine.randomize(),
    }

    tracing::info!(
        board_size = config.board_size,
        cell_size = config.cell_size,
        cell_gap = config.cell_gap,
        "PctLife starting"
    );

    let layout = BoardLayout::new(config.cell_size, config.cell_gap);
    let state = GameState::new(engine).running();
    macroquad::Window::from_config(window_conf(&config, &layout), run(state, layout));
}

async fn run(mut state: GameState, layout: BoardLayout) {
    let mut menu_bar = MenuBar::new(state.speed);
    let mut picker: Option<ColorPicker> = None;

    loop {
        let mouse_pos = mouse_position();

        // The chooser is modal: menus and shortcuts wait until it closes
        if let Some(open) = &picker {
            if let Some(outcome) = open.update(mouse_pos) {
                state.submit(outcome.into_command(open.target()));
                picker = None;
            }
        } else {
            match menu_bar.update(mouse_pos) {
                Some(MenuAction::Command(command)) => state.submit(command),
                Some(MenuAction::Pick(target)) => {
                    let current = match target {
                        PickerTarget::Foreground => state.palette.live(),
                        PickerTarget::Background => state.palette.dead(),
                    };
                    let center = (screen_width() / 2.0, screen_height() / 2.0);
                    picker = Some(ColorPicker::open(target, current, center));
                }
                None => {}
            }
            state.submit_all(input::process_keyboard_input());
        }

        state = state.tick(get_frame_time());
        if state.exit_requested {
            break;
        }
        menu_bar.sync_speed(state.speed);

        clear_background(Color::new(0.1, 0.1, 0.1, 1.0));
        rendering::draw_board(&state.engine, &state.palette, &layout);
        menu_bar.draw(mouse_pos);
        rendering::draw_status(&state, &layout, mouse_pos);
        if let Some(open) = &picker {
            open.draw(mouse_pos);
        }

        next_frame().await;
    }
}
