use std::{
    io,
    sync::mpsc::{Receiver, RecvTimeoutError},
    thread::sleep,
    time::{Duration, Instant},
};

use crate::input::Command;
use crate::sim::{GameResult, Scene, Simulation, Status};
use crate::snake::Direction;

/// Anything that can draw a scene. Called once per tick while running and
/// once more with the terminated scene.
pub trait RenderSink {
    fn render(&mut self, scene: &Scene<'_>) -> io::Result<()>;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    Finished(GameResult),
    Quit,
}

/// Drives `sim` with a fixed-period clock until it terminates or a quit
/// command arrives.
///
/// This is the only place the simulation is touched: commands and clock ticks
/// are serialized through this loop. Turns received between two ticks are
/// coalesced, the latest wins and is applied right before the next step.
pub fn run<S: RenderSink>(
    sim: &mut Simulation,
    sink: &mut S,
    commands: &Receiver<Command>,
    period: Duration,
) -> Outcome {
    draw(sink, &sim.scene());

    let mut pending: Option<Direction> = None;
    let mut input_open = true;
    let mut next_tick = Instant::now() + period;

    loop {
        let wait = next_tick.saturating_duration_since(Instant::now());

        if input_open {
            match commands.recv_timeout(wait) {
                Ok(Command::Quit) => {
                    log::info!("quit requested");
                    return Outcome::Quit;
                }
                Ok(Command::Turn(dir)) => {
                    pending = Some(dir);
                    continue;
                }
                Ok(Command::Other) => continue,
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => {
                    log::warn!("input source closed, ticking on");
                    input_open = false;
                    continue;
                }
            }
        } else {
            sleep(wait);
        }

        if let Some(dir) = pending.take() {
            sim.steer(dir);
        }
        let status = sim.tick();
        draw(sink, &sim.scene());

        if let Status::Terminated(result) = status {
            return Outcome::Finished(result);
        }

        // Don't try to catch up on ticks missed while the machine was busy
        next_tick = (next_tick + period).max(Instant::now());
    }
}

fn draw<S: RenderSink>(sink: &mut S, scene: &Scene<'_>) {
    if let Err(e) = sink.render(scene) {
        log::warn!("render error: {}", e);
    }
}
