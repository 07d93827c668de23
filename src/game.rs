use std::{thread::sleep, time::{Duration, Instant}};

use crate::apple::Apple;
use crate::config::Config;
use crate::grid::{Cell, Direction::{self, *}};
use crate::snake::Snake;
use crate::term::TermManager;
use crate::{CellInt, Coords, TermInt};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::Color;
use rand::{thread_rng, Rng};

use LoopState::*;

// The board sits inside a one-character border.
const BOARD_ORIGIN: Coords = (1, 1);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// A key press translated to something the game understands.
#[derive(Copy, Clone)]
pub enum Command {
    Turn(Direction),
    Quit,
}

/// The state of one run: everything that changes per tick and everything the
/// renderer reads. No I/O happens in here.
pub struct Session {
    snake: Snake,
    apple: Apple,
    state: LoopState,
    grid_size: CellInt,
}

impl Session {
    pub fn new(rng: &mut impl Rng, grid_size: CellInt) -> Self {
        let snake = Snake::new(grid_size);
        let apple = Apple::spawn(rng, grid_size, snake.body());

        Session { snake, apple, state: Running, grid_size }
    }

    /// Advance the game by one tick: apply the drained input, move the snake,
    /// resolve self-collision, then consumption. A quit command stops the
    /// session right away and the rest of the tick is skipped.
    pub fn step(&mut self, commands: &[Command], rng: &mut impl Rng) {
        for command in commands {
            match command {
                Command::Quit => {
                    self.state = Stopped;
                    return;
                }
                Command::Turn(direction) => self.snake.change_direction(*direction),
            }
        }

        self.snake.advance(self.grid_size);
        self.snake.check_self_collision();

        if self.snake.head() == self.apple.position() {
            self.snake.grow(self.grid_size);
            self.apple.respawn(rng, self.grid_size, self.snake.body());
        }

        if !self.snake.is_alive() {
            self.state = Stopped;
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> &Apple {
        &self.apple
    }
}

pub struct SnakeGame {
    config: Config,
    term: TermManager,
}

impl SnakeGame {
    pub fn new(config: Config) -> Self {
        SnakeGame { config, term: TermManager::new() }
    }

    pub fn initialize(&mut self) {
        self.term.setup((self.config.screen_width, self.config.screen_height));
        self.term.clear();

        let extent = self.board_extent();
        self.term.draw_border((0, 0), extent + 2, extent + 2);
    }

    pub fn run(&mut self) {
        let mut rng = thread_rng();
        let mut session = Session::new(&mut rng, self.config.grid_size);

        let tick = Duration::from_secs(1) / self.config.fps;
        let mut next_tick = Instant::now() + tick;

        while session.state() == Running {
            let commands: Vec<Command> = self.term.read_key_events_queue()
                .iter()
                .filter_map(map_key)
                .collect();
            let quit_requested = commands.iter().any(|c| matches!(c, Command::Quit));

            session.step(&commands, &mut rng);

            if quit_requested {
                break; // Quit skips the final render, death does not
            }

            self.draw_frame(&session);

            let now = Instant::now();
            if next_tick > now {
                sleep(next_tick - now);
            }
            next_tick += tick;
        }

        self.term.restore();
    }

    ///////////////////////////////////////////////////////////////////////////

    fn draw_frame(&mut self, session: &Session) {
        let extent = self.board_extent();
        self.term.fill_rect(BOARD_ORIGIN, extent, extent, self.config.colors.background);

        for (i, cell) in session.snake().body().iter().enumerate() {
            let color = if i == 0 {self.config.colors.head} else {self.config.colors.body};
            self.draw_cell(*cell, color);
        }

        self.draw_cell(session.apple().position(), self.config.colors.apple);
        self.term.flush();
    }

    fn draw_cell(&mut self, cell: Cell, color: Color) {
        let cell_size = self.config.cell_size;
        let (x, y) = cell.to_xy(self.config.grid_size);
        let origin = (
            BOARD_ORIGIN.0 + x as TermInt * cell_size,
            BOARD_ORIGIN.1 + y as TermInt * cell_size,
        );

        self.term.fill_rect(origin, cell_size, cell_size, color);
    }

    fn board_extent(&self) -> TermInt {
        self.config.grid_size as TermInt * self.config.cell_size
    }
}

fn map_key(event: &KeyEvent) -> Option<Command> {
    if is_ctrl_c(event) {
        return Some(Command::Quit);
    }

    match event.code {
        KeyCode::Char('w') | KeyCode::Up => Some(Command::Turn(Up)),
        KeyCode::Char('a') | KeyCode::Left => Some(Command::Turn(Left)),
        KeyCode::Char('s') | KeyCode::Down => Some(Command::Turn(Down)),
        KeyCode::Char('d') | KeyCode::Right => Some(Command::Turn(Right)),
        KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
