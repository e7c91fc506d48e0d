use rand::Rng;

use crate::grid::Grid;
use crate::Coords;

/// Uncollected pickups. Duplicate positions are allowed, each one counts
/// as its own item.
#[derive(Debug, Clone, Default)]
pub struct ItemSet {
    items: Vec<Coords>,
}

impl ItemSet {
    pub fn new(items: Vec<Coords>) -> Self {
        ItemSet { items }
    }

    /// Places `count` items independently and uniformly over the interior
    pub fn scatter<R: Rng>(count: usize, grid: &Grid, rng: &mut R) -> Self {
        let items = (0..count).map(|_| grid.random_interior(rng)).collect();
        ItemSet { items }
    }

    /// Removes and returns the first item found at `pos`
    pub fn consume_at(&mut self, pos: Coords) -> Option<Coords> {
        let idx = self.items.iter().position(|item| *item == pos)?;
        Some(self.items.remove(idx))
    }

    pub fn positions(&self) -> &[Coords] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_scatter_count_and_bounds() {
        let grid = Grid::new(60, 40);
        let mut rng = StdRng::seed_from_u64(12345);
        let items = ItemSet::scatter(100, &grid, &mut rng);
        assert_eq!(items.len(), 100);
        assert!(items.positions().iter().all(|pos| grid.contains(*pos)));
    }

    #[test]
    fn test_consume_removes_one() {
        let mut items = ItemSet::new(vec![(1, 1), (2, 2), (3, 3)]);
        assert_eq!(items.consume_at((2, 2)), Some((2, 2)));
        assert_eq!(items.positions(), &[(1, 1), (3, 3)]);
    }

    #[test]
    fn test_consume_missing_is_noop() {
        let mut items = ItemSet::new(vec![(1, 1)]);
        assert_eq!(items.consume_at((4, 4)), None);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_duplicates_consumed_one_per_call() {
        let mut items = ItemSet::new(vec![(5, 5), (1, 2), (5, 5)]);
        assert!(items.consume_at((5, 5)).is_some());
        assert_eq!(items.len(), 2);
        assert!(items.consume_at((5, 5)).is_some());
        assert!(items.consume_at((5, 5)).is_none());
        assert_eq!(items.positions(), &[(1, 2)]);
    }
}
