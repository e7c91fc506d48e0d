mod config;
mod game;
mod grid;
mod input;
mod items;
mod sim;
mod snake;
mod term;

use std::{fs::File, path::Path, sync::mpsc};

use anyhow::{Context, Result};
use clap::Parser;

use config::Config;
use game::Outcome;
use input::Command;
use sim::Simulation;
use term::TermManager;

pub type TermInt = u16;
pub type Coords = (i32, i32);

fn main() -> Result<()> {
    let config = Config::parse();
    config.validate()?;
    init_logging(config.log_file.as_deref())?;
    log::info!("starting with {:?}", config);

    let grid = config.grid();
    let mut term = TermManager::setup(&grid)?;

    let (tx, rx) = mpsc::channel();
    input::spawn(tx);

    term.show_message(&[
        "Arrow keys or WASD to move",
        "Esc or q to quit",
        "",
        "Press any key to begin",
    ])?;
    if matches!(wait_for_key(&rx), Some(Command::Quit) | None) {
        log::info!("quit from intro");
        return Ok(());
    }
    term.hide_message()?;

    let mut sim = Simulation::start(grid, config.items, &mut rand::thread_rng());

    // Dropping `term` on return restores the terminal on every path
    match game::run(&mut sim, &mut term, &rx, config.tick_period()) {
        Outcome::Quit => {}
        Outcome::Finished(result) => {
            log::info!("game over, result {}, {} items left", result.length, sim.items().len());
            wait_for_key(&rx);
        }
    }

    Ok(())
}

fn wait_for_key(rx: &mpsc::Receiver<Command>) -> Option<Command> {
    rx.recv().ok()
}

fn init_logging(path: Option<&Path>) -> Result<()> {
    // stdout belongs to the game, so logs only go to a file when asked for
    let path = match path {
        Some(path) => path,
        None => return Ok(()),
    };

    let file = File::create(path).with_context(|| format!("Failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("Failed to install logger")?;
    Ok(())
}
