//! Headless Pong host.
//!
//! Stands in for the renderer: builds a session from an optional JSON config,
//! feeds scripted input, ticks at a fixed rate and prints every snapshot as a
//! JSON line on stdout.
//!
//! Usage: pong_headless [config.json] [ticks] [seed]

use std::io::{self, Write};
use std::process::ExitCode;

use pong_core::{Config, ControlMode, Game, InputEvent, Params};

mod script;

const DEFAULT_TICKS: u64 = 600;
const DEFAULT_SEED: u64 = 12345;

fn load_config(path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)?;
            Ok(Config::from_json(&json)?)
        }
        None => Ok(Config::new()),
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = load_config(args.first().map(String::as_str))?;
    let ticks = match args.get(1) {
        Some(ticks) => ticks.parse()?,
        None => DEFAULT_TICKS,
    };
    let seed = match args.get(2) {
        Some(seed) => seed.parse()?,
        None => DEFAULT_SEED,
    };

    let mode = config.controls.mode;
    let mut game = Game::new(config, seed)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut resets = 0u32;

    for tick in 0..ticks {
        let events: Vec<InputEvent> = match mode {
            ControlMode::Pointer => script::pointer_events(tick, &game.field),
            ControlMode::Keyboard => script::keyboard_events(tick, &game.config.controls),
        };
        for event in events {
            game.push_event(event);
        }

        let snapshot = game.tick(Params::FIXED_DT);
        if let Some(loser) = game.events.round_reset {
            resets += 1;
            log::info!("tick {}: {:?} side missed", snapshot.tick, loser);
        }
        serde_json::to_writer(&mut out, &snapshot)?;
        writeln!(out)?;
    }

    log::info!("finished {} ticks with {} round resets", ticks, resets);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
