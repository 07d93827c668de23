use rand::Rng;

use crate::grid::Cell;
use crate::CellInt;

pub struct Apple {
    cell: Cell,
}

impl Apple {
    /// Place a fresh apple somewhere the snake is not.
    pub fn spawn(rng: &mut impl Rng, size: CellInt, occupied: &[Cell]) -> Self {
        Apple { cell: random_free_cell(rng, size, occupied) }
    }

    /// Redraw the apple's position, rejecting occupied cells until a free one
    /// comes up. Terminates as long as the snake leaves at least one cell open,
    /// which holds at any playable board size.
    pub fn respawn(&mut self, rng: &mut impl Rng, size: CellInt, occupied: &[Cell]) {
        self.cell = random_free_cell(rng, size, occupied);
    }

    #[cfg(test)]
    pub fn at(cell: Cell) -> Self {
        Apple { cell }
    }

    pub fn position(&self) -> Cell {
        self.cell
    }
}

fn random_free_cell(rng: &mut impl Rng, size: CellInt, occupied: &[Cell]) -> Cell {
    let cells = size * size;

    let mut cell = Cell::new(rng.gen_range(0..cells));
    while occupied.contains(&cell) {
        cell = Cell::new(rng.gen_range(0..cells));
    }

    cell
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn respawn_avoids_every_occupied_cell() {
        let mut rng = StdRng::seed_from_u64(7);
        let occupied: Vec<Cell> = (0..8).map(Cell::new).collect();

        let mut apple = Apple::spawn(&mut rng, 4, &occupied);
        for _ in 0..100 {
            apple.respawn(&mut rng, 4, &occupied);
            assert!(!occupied.contains(&apple.position()));
        }
    }

    #[test]
    fn the_single_free_cell_is_always_chosen() {
        let mut rng = StdRng::seed_from_u64(7);
        let occupied: Vec<Cell> = (0..9).filter(|&i| i != 5).map(Cell::new).collect();

        let apple = Apple::spawn(&mut rng, 3, &occupied);
        assert_eq!(apple.position(), Cell::new(5));
    }
}
