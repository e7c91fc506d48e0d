use rand::Rng;

use crate::Coords;

/// The playing field. The border ring sits on `x = 0`, `x = width`,
/// `y = 0` and `y = height`; everything strictly inside is playable.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Self {
        Grid { width, height }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `pos` lies strictly inside the border ring
    pub fn contains(&self, pos: Coords) -> bool {
        pos.0 > 0 && pos.0 < self.width && pos.1 > 0 && pos.1 < self.height
    }

    pub fn center(&self) -> Coords {
        (self.width / 2, self.height / 2)
    }

    /// Uniformly random interior cell
    pub fn random_interior<R: Rng>(&self, rng: &mut R) -> Coords {
        (rng.gen_range(1..self.width), rng.gen_range(1..self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_contains_interior() {
        let grid = Grid::new(10, 10);
        assert!(grid.contains((1, 1)));
        assert!(grid.contains((9, 9)));
        assert!(grid.contains((5, 5)));
    }

    #[test]
    fn test_border_ring_is_outside() {
        let grid = Grid::new(10, 10);
        for i in 0..=10 {
            assert!(!grid.contains((0, i)));
            assert!(!grid.contains((10, i)));
            assert!(!grid.contains((i, 0)));
            assert!(!grid.contains((i, 10)));
        }
        assert!(!grid.contains((-1, 5)));
        assert!(!grid.contains((5, 11)));
    }

    #[test]
    fn test_random_interior_stays_inside() {
        let grid = Grid::new(4, 3);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            assert!(grid.contains(grid.random_interior(&mut rng)));
        }
    }

    #[test]
    fn test_center() {
        assert_eq!(Grid::new(60, 40).center(), (30, 20));
        assert!(Grid::new(3, 3).contains(Grid::new(3, 3).center()));
    }
}
