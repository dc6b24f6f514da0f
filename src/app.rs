use log::info;

use crate::clock::Clock;
use crate::game::{Game, GameStatus, Snapshot};
use crate::grid::Direction;
use crate::pacing::TickPacer;
use crate::rng::RandomSource;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Steer(Direction),
    Restart,
    Quit,
}

/// Drives a [`Game`] from a clock: routes player commands and ticks the
/// simulation whenever the pacer says a step is due.
pub struct App<C, R> {
    game: Game<R>,
    clock: C,
    pacer: TickPacer,
}

impl<C: Clock, R: RandomSource> App<C, R> {
    pub fn new(game: Game<R>, clock: C) -> Self {
        Self { game, clock, pacer: TickPacer::new() }
    }

    pub fn game(&self) -> &Game<R> {
        &self.game
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        self.game.snapshot()
    }

    /// Handles this frame's commands and runs at most one tick.
    /// Returns false once the player asked to quit.
    pub fn update(&mut self, commands: &[Command]) -> bool {
        for command in commands {
            match *command {
                Command::Quit => {
                    info!("quit requested");
                    return false;
                }
                Command::Steer(dir) => {
                    if self.game.status() == GameStatus::Playing {
                        self.game.on_input(dir);
                    }
                }
                Command::Restart => {
                    if self.game.status() == GameStatus::GameOver {
                        self.game.restart();
                        self.pacer.reset();
                    }
                }
            }
        }

        if self.game.status() == GameStatus::Playing {
            let now = self.clock.now();
            if self.pacer.due(now, self.game.tick_rate()) {
                self.game.tick(now);
            }
        }
        true
    }
}
