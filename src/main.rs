mod apple;
mod config;
mod game;
mod grid;
mod snake;
mod term;

pub type TermInt = u16;
pub type Coords = (TermInt, TermInt);
pub type CellInt = i16;

fn main() {
    let mut game = game::SnakeGame::new(config::Config::default());
    game.initialize();
    game.run();
}
