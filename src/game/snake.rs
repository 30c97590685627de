use super::direction::Direction;
use super::grid::{Grid, Position};

/// What happened when the snake tried to advance one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum MoveOutcome {
    /// The head moved; the body was trimmed to the target length
    Moved,
    /// The new head would leave the grid; nothing was mutated
    HitWall,
}

/// The snake: an ordered sequence of occupied cells, head first
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Occupied cells, head at index 0
    pub cells: Vec<Position>,
    /// Direction committed for the current tick
    pub direction: Direction,
    /// At most one buffered direction request, applied next tick
    pending: Option<Direction>,
    /// Length the body converges to; growth defers the tail trim
    target_len: usize,
}

impl Snake {
    /// Create a snake of length 1 facing right
    pub fn new(head: Position) -> Self {
        Self {
            cells: vec![head],
            direction: Direction::Right,
            pending: None,
            target_len: 1,
        }
    }

    pub fn head(&self) -> Position {
        self.cells[0]
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn target_len(&self) -> usize {
        self.target_len
    }

    /// Buffer a direction change for the next tick.
    ///
    /// A request to reverse straight into the body is silently ignored;
    /// that is policy, not an error.
    pub fn request_direction(&mut self, direction: Direction) {
        if !self.direction.is_opposite(direction) {
            self.pending = Some(direction);
        }
    }

    /// Commit the buffered direction, re-checking the reversal rule,
    /// and clear the buffer either way.
    pub fn apply_pending_direction(&mut self) {
        if let Some(next) = self.pending.take() {
            if !self.direction.is_opposite(next) {
                self.direction = next;
            }
        }
    }

    /// Advance one cell in the current direction.
    ///
    /// Leaves the snake untouched and reports `HitWall` if the new head
    /// would fall outside the grid. Otherwise the new head is prepended
    /// and the tail trimmed back to the target length.
    pub fn advance(&mut self, grid: &Grid) -> MoveOutcome {
        let new_head = self.head().moved_in_direction(self.direction);

        if !grid.contains(new_head) {
            return MoveOutcome::HitWall;
        }

        self.cells.insert(0, new_head);
        if self.cells.len() > self.target_len {
            self.cells.pop();
        }

        MoveOutcome::Moved
    }

    /// Raise the target length by one; takes effect on the next advance
    pub fn grow(&mut self) {
        self.target_len += 1;
    }

    /// True if the head occupies the same cell as any body segment
    pub fn self_collision(&self) -> bool {
        self.cells[1..].contains(&self.head())
    }

    /// Shrink back to a single segment at the grid center, facing right,
    /// with any buffered direction discarded
    pub fn reset(&mut self, center: Position) {
        self.target_len = 1;
        self.cells.clear();
        self.cells.push(center);
        self.direction = Direction::Right;
        self.pending = None;
    }
}
