use std::fs::File;

use log::{LevelFilter, info, warn};
use macroquad::prelude::*;
use simplelog::{Config, WriteLogger};

use snake_powerups::app::App;
use snake_powerups::clock::{Clock, QuadClock};
use snake_powerups::config::{CONFIG_FILE, GameConfig};
use snake_powerups::game::Game;
use snake_powerups::grid::{SCREEN_HEIGHT, SCREEN_WIDTH};
use snake_powerups::rng::SeededRng;
use snake_powerups::{input, render};

fn window_conf() -> Conf {
    Conf {
        window_title: "Snake - Power-Up Edition".to_owned(),
        window_width: SCREEN_WIDTH,
        window_height: SCREEN_HEIGHT,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

fn init_logging(config: &GameConfig) {
    let level = config.level_filter().unwrap_or(LevelFilter::Info);
    match File::create(&config.log_file) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(level, Config::default(), file) {
                eprintln!("logger already set: {e}");
            }
        }
        Err(e) => eprintln!("cannot open log file {}: {e}", config.log_file),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let (config, config_err) = match GameConfig::load(CONFIG_FILE) {
        Ok(config) => (config, None),
        Err(e) => (GameConfig::default(), Some(e)),
    };
    init_logging(&config);
    if let Some(e) = config_err {
        warn!("{e}; using defaults");
    }

    let seed = config
        .seed
        .unwrap_or_else(|| (macroquad::miniquad::date::now() * 1_000_000.0) as u64);
    info!("starting with seed {} at {} ticks/s", seed, config.base_tick_rate);

    let game = Game::new(config.base_tick_rate, SeededRng::seeded(seed));
    let mut app = App::new(game, QuadClock);

    loop {
        let commands = input::poll_commands();
        if !app.update(&commands) {
            break;
        }

        render::draw(&app.snapshot(), app.clock().now());
        next_frame().await;
    }
}
