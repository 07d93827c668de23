use crate::grid::{Cell, Direction, Direction::*};
use crate::CellInt;

pub struct Snake {
    body: Vec<Cell>,
    direction: Direction,
    alive: bool,
}

impl Snake {
    /// Three segments starting at the flat indices `[2N+1, 2N, 2N-1]`, head
    /// first, heading right.
    pub fn new(size: CellInt) -> Self {
        let body = vec![
            Cell::new(size * 2 + 1),
            Cell::new(size * 2),
            Cell::new(size * 2 - 1),
        ];

        Snake { body, direction: Right, alive: true }
    }

    #[cfg(test)]
    pub fn from_cells(cells: &[CellInt], direction: Direction) -> Self {
        let body = cells.iter().map(|&i| Cell::new(i)).collect();
        Snake { body, direction, alive: true }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    /// Move one cell in the current heading: the new head is prepended and
    /// the tail dropped. Stepping off the board kills the snake and leaves
    /// the body as it was. Self-collision is not evaluated here.
    pub fn advance(&mut self, size: CellInt) {
        match self.head().step(self.direction, size) {
            Some(new_head) => {
                self.body.pop();
                self.body.insert(0, new_head);
            }
            None => self.alive = false,
        }
    }

    /// Like `advance`, but the tail is kept, so the body gains a segment.
    /// Called on the tick the apple is consumed, with the heading of that tick.
    pub fn grow(&mut self, size: CellInt) {
        match self.head().step(self.direction, size) {
            Some(new_head) => self.body.insert(0, new_head),
            None => self.alive = false,
        }
    }

    /// Change heading, unless the request would reverse the snake straight
    /// into its own neck. Those requests are silently dropped.
    pub fn change_direction(&mut self, new_direction: Direction) {
        if !new_direction.is_opposite(self.direction) {
            self.direction = new_direction;
        }
    }

    /// Kills the snake iff the head overlaps a later body segment. Must run
    /// right after `advance`, before the apple check.
    pub fn check_self_collision(&mut self) {
        let head = self.head();
        if self.body[1..].contains(&head) {
            self.alive = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: CellInt = 16;

    fn indices(snake: &Snake) -> Vec<CellInt> {
        snake.body().iter().map(|c| c.index()).collect()
    }

    #[test]
    fn a_fresh_snake_is_alive_and_three_segments_long() {
        let mut snake = Snake::new(SIZE);
        assert_eq!(indices(&snake), vec![33, 32, 31]);
        snake.check_self_collision();
        assert!(snake.is_alive());
    }

    #[test]
    fn advance_prepends_the_head_and_drops_the_tail() {
        let mut snake = Snake::new(SIZE);
        snake.advance(SIZE);
        assert_eq!(indices(&snake), vec![34, 33, 32]);
        assert_eq!(snake.body().len(), 3);
    }

    #[test]
    fn reversing_into_the_neck_is_rejected() {
        let mut snake = Snake::new(SIZE);
        snake.advance(SIZE);
        snake.change_direction(Left);
        assert_eq!(snake.get_direction(), Right);
    }

    #[test]
    fn other_turns_take_effect_on_the_next_advance() {
        let mut snake = Snake::new(SIZE);
        snake.change_direction(Down);
        snake.advance(SIZE);
        assert_eq!(snake.head().index(), 33 + SIZE);
    }

    #[test]
    fn grow_keeps_every_prior_segment() {
        let mut snake = Snake::new(SIZE);
        snake.grow(SIZE);
        assert_eq!(indices(&snake), vec![34, 33, 32, 31]);
    }

    #[test]
    fn head_overlapping_the_body_is_fatal() {
        // A hook about to close: heading down from (1,1) into (1,2), which
        // is still occupied after the tail at (0,2) is dropped.
        let mut snake = Snake::from_cells(&[17, 18, 34, 33, 32], Down);
        snake.advance(SIZE);
        snake.check_self_collision();
        assert!(!snake.is_alive());
    }

    #[test]
    fn stepping_into_the_vacated_tail_cell_is_safe() {
        // Same hook one segment shorter: the tail moves out of (1,2) on the
        // same tick the head moves in.
        let mut snake = Snake::from_cells(&[17, 18, 34, 33], Down);
        snake.advance(SIZE);
        snake.check_self_collision();
        assert!(snake.is_alive());
    }

    #[test]
    fn walking_off_the_board_is_fatal_and_keeps_the_body() {
        let mut snake = Snake::from_cells(&[15, 14, 13], Right);
        snake.advance(SIZE);
        assert!(!snake.is_alive());
        assert_eq!(indices(&snake), vec![15, 14, 13]);
    }

    #[test]
    fn growing_off_the_board_is_fatal_too() {
        let mut snake = Snake::from_cells(&[15, 14, 13], Right);
        snake.grow(SIZE);
        assert!(!snake.is_alive());
        assert_eq!(snake.body().len(), 3);
    }
}
