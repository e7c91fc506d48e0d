//! Tick-driven game state machine.
//!
//! A `Simulation` owns the player, the item set and the grid and advances
//! them one discrete step per `tick`. It never blocks and never fails; the
//! only way out of `Running` is a collision, which is a normal outcome.

use rand::Rng;

use crate::grid::Grid;
use crate::items::ItemSet;
use crate::snake::{Direction, Player};
use crate::Coords;

/// Why the game ended
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Cause {
    SelfCollision,
    OutOfBounds,
}

/// Final body length, captured once on termination
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub length: usize,
    pub cause: Cause,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Status {
    Running,
    Terminated(GameResult),
}

/// Consistent view of one tick, handed to the render sink
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub grid: Grid,
    pub head: Coords,
    pub heading: Direction,
    pub body: &'a [Coords],
    pub items: &'a [Coords],
    pub status: Status,
}

pub struct Simulation {
    grid: Grid,
    player: Player,
    items: ItemSet,
    status: Status,
}

impl Simulation {
    pub fn new(grid: Grid, player: Player, items: ItemSet) -> Self {
        Simulation { grid, player, items, status: Status::Running }
    }

    /// Player at the grid centre heading down, `item_count` items scattered
    /// over the interior
    pub fn start<R: Rng>(grid: Grid, item_count: usize, rng: &mut R) -> Self {
        let player = Player::new(grid.center(), Direction::Down);
        let items = ItemSet::scatter(item_count, &grid, rng);
        Simulation::new(grid, player, items)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn items(&self) -> &ItemSet {
        &self.items
    }

    pub fn steer(&mut self, direction: Direction) {
        self.player.set_direction(direction);
    }

    /// Advances one step. Once terminated, further calls change nothing.
    pub fn tick(&mut self) -> Status {
        if let Status::Terminated(_) = self.status {
            return self.status;
        }

        self.player.advance();
        let head = self.player.position();

        if self.items.consume_at(head).is_some() {
            self.player.grow();
            log::debug!(
                "item taken at {:?}, length {}, {} left",
                head,
                self.player.body().len(),
                self.items.len()
            );
        }

        let cause = if self.player.body().collides_with(head) {
            Some(Cause::SelfCollision)
        } else if !self.grid.contains(head) {
            Some(Cause::OutOfBounds)
        } else {
            None
        };

        if let Some(cause) = cause {
            let result = GameResult { length: self.player.body().len(), cause };
            log::info!("terminated at {:?}: {:?}", head, result);
            self.status = Status::Terminated(result);
        }

        self.status
    }

    pub fn scene(&self) -> Scene<'_> {
        Scene {
            grid: self.grid,
            head: self.player.position(),
            heading: self.player.direction(),
            body: self.player.body().positions(),
            items: self.items.positions(),
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::{Body, Direction::*};
    use rand::{rngs::StdRng, SeedableRng};

    fn sim(head: Coords, dir: Direction, body: Vec<Coords>, items: Vec<Coords>) -> Simulation {
        Simulation::new(
            Grid::new(10, 10),
            Player::with_body(head, dir, Body::from(body)),
            ItemSet::new(items),
        )
    }

    #[test]
    fn test_start_layout() {
        let mut rng = StdRng::seed_from_u64(1);
        let sim = Simulation::start(Grid::new(60, 40), 100, &mut rng);
        assert_eq!(sim.player().position(), (30, 20));
        assert_eq!(sim.player().direction(), Down);
        assert!(sim.player().body().is_empty());
        assert_eq!(sim.items().len(), 100);
        assert_eq!(sim.status(), Status::Running);
    }

    #[test]
    fn test_consume_and_grow_behind() {
        let mut sim = sim((5, 5), Down, vec![], vec![(5, 6)]);
        assert_eq!(sim.tick(), Status::Running);
        assert_eq!(sim.player().position(), (5, 6));
        assert_eq!(sim.player().body().positions(), &[(5, 7)]);
        assert!(sim.items().is_empty());
    }

    #[test]
    fn test_right_wall() {
        let mut sim = sim((9, 5), Right, vec![], vec![]);
        let status = sim.tick();
        assert_eq!(sim.player().position(), (10, 5));
        assert_eq!(
            status,
            Status::Terminated(GameResult { length: 0, cause: Cause::OutOfBounds })
        );
    }

    #[test]
    fn test_every_border_terminates() {
        let cases = [((1, 5), Left), ((5, 1), Up), ((9, 5), Right), ((5, 9), Down)];
        for (head, dir) in cases {
            let mut sim = sim(head, dir, vec![], vec![]);
            assert!(matches!(sim.tick(), Status::Terminated(_)), "{:?} {:?}", head, dir);
        }
    }

    #[test]
    fn test_reverse_into_body() {
        let mut sim = sim((5, 5), Right, vec![(4, 5), (3, 5), (2, 5)], vec![]);
        sim.steer(Left);
        let status = sim.tick();
        assert_eq!(sim.player().position(), (4, 5));
        assert_eq!(
            status,
            Status::Terminated(GameResult { length: 3, cause: Cause::SelfCollision })
        );
    }

    #[test]
    fn test_self_collision_wins_over_wall() {
        // Head steps onto a border cell that a segment currently occupies.
        let mut sim = sim((1, 5), Right, vec![(0, 5), (0, 4)], vec![]);
        sim.steer(Left);
        let status = sim.tick();
        assert_eq!(sim.player().position(), (0, 5));
        assert!(matches!(
            status,
            Status::Terminated(GameResult { cause: Cause::SelfCollision, .. })
        ));
    }

    #[test]
    fn test_terminated_is_final() {
        let mut sim = sim((9, 5), Right, vec![], vec![]);
        let first = sim.tick();
        let head = sim.player().position();
        assert_eq!(sim.tick(), first);
        assert_eq!(sim.player().position(), head);
    }

    #[test]
    fn test_stacked_items_one_per_visit() {
        let mut sim = sim((5, 5), Down, vec![], vec![(5, 6), (5, 6)]);
        sim.tick();
        assert_eq!(sim.items().len(), 1);
        assert_eq!(sim.player().body().len(), 1);
    }

    #[test]
    fn test_length_tracks_consumption() {
        let items = vec![(5, 2), (5, 3), (5, 6)];
        let mut sim = sim((5, 1), Down, vec![], items);
        let mut lengths = vec![];
        for _ in 0..7 {
            if sim.tick() != Status::Running {
                break;
            }
            lengths.push(sim.player().body().len());
        }
        assert_eq!(lengths, vec![1, 2, 2, 2, 3, 3, 3]);
    }

    #[test]
    fn test_scene_matches_state() {
        let sim = sim((5, 5), Up, vec![(5, 6)], vec![(2, 2)]);
        let scene = sim.scene();
        assert_eq!(scene.grid, Grid::new(10, 10));
        assert_eq!(scene.head, (5, 5));
        assert_eq!(scene.heading, Up);
        assert_eq!(scene.body, &[(5, 6)]);
        assert_eq!(scene.items, &[(2, 2)]);
        assert_eq!(scene.status, Status::Running);
    }
}
