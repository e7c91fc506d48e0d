use crate::Coords;
use Direction::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Right,
    Left,
}

impl Direction {
    /// One cell in this direction. The origin is the top-left corner, so
    /// `Up` decreases `y`.
    pub fn step(self, pos: Coords) -> Coords {
        match self {
            Up => (pos.0, pos.1 - 1),
            Down => (pos.0, pos.1 + 1),
            Right => (pos.0 + 1, pos.1),
            Left => (pos.0 - 1, pos.1),
        }
    }

    /// Where a segment grown at `head` is placed. Opposite the travel
    /// direction on the x axis; the y axis is taken y-up, so this mirrors
    /// `step` vertically.
    pub fn trailing(self, head: Coords) -> Coords {
        match self {
            Up => (head.0, head.1 - 1),
            Down => (head.0, head.1 + 1),
            Right => (head.0 - 1, head.1),
            Left => (head.0 + 1, head.1),
        }
    }

    pub fn head_char(self) -> char {
        match self {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }
}

/// Trailing segments, index 0 nearest the head.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Body {
    segments: Vec<Coords>,
}

impl Body {
    pub fn new() -> Self {
        Body { segments: vec![] }
    }

    /// Appends one segment at the tail end
    pub fn extend(&mut self, pos: Coords) {
        self.segments.push(pos);
    }

    /// Moves the whole chain one step as a shift register: the first segment
    /// takes `head_old_pos`, every other one takes its predecessor's old spot.
    pub fn shift_following(&mut self, head_old_pos: Coords) {
        let mut prev = head_old_pos;
        for seg in self.segments.iter_mut() {
            prev = std::mem::replace(seg, prev);
        }
    }

    pub fn collides_with(&self, pos: Coords) -> bool {
        self.segments.contains(&pos)
    }

    pub fn positions(&self) -> &[Coords] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl From<Vec<Coords>> for Body {
    fn from(segments: Vec<Coords>) -> Self {
        Body { segments }
    }
}

/// The head and everything it drags along.
#[derive(Debug, Clone)]
pub struct Player {
    position: Coords,
    direction: Direction,
    body: Body,
}

impl Player {
    pub fn new(position: Coords, direction: Direction) -> Self {
        Player { position, direction, body: Body::new() }
    }

    pub fn with_body(position: Coords, direction: Direction, body: Body) -> Self {
        Player { position, direction, body }
    }

    pub fn position(&self) -> Coords {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Reversing straight into the body is allowed.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Shifts the body behind the current head, then moves the head one cell.
    /// Returns the head's pre-move position.
    pub fn advance(&mut self) -> Coords {
        let old_head = self.position;
        self.body.shift_following(old_head);
        self.position = self.direction.step(old_head);
        old_head
    }

    /// Grows one segment trailing the head
    pub fn grow(&mut self) {
        self.body.extend(self.direction.trailing(self.position));
    }
}
