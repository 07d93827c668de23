use crossterm::style::Color;

use crate::{CellInt, TermInt};

/// Everything tunable about a game, fixed at startup and handed to
/// `SnakeGame` as a whole. Screen size is independent of the board extent;
/// the board is drawn at its natural size inside it.
pub struct Config {
    pub grid_size: CellInt,
    pub cell_size: TermInt,
    pub screen_width: TermInt,
    pub screen_height: TermInt,
    pub fps: u32,
    pub colors: Palette,
}

pub struct Palette {
    pub head: Color,
    pub body: Color,
    pub apple: Color,
    pub background: Color,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            grid_size: 16,
            cell_size: 2,
            screen_width: 35,
            screen_height: 35,
            fps: 10,
            colors: Palette {
                head: Color::Red,
                body: Color::Green,
                apple: Color::White,
                background: Color::Black,
            },
        }
    }
}
