//! Snake body - ordered cells, head first

use std::collections::VecDeque;

use crate::types::{Direction, Point, START_DIRECTION, START_SNAKE};

/// The snake: a head-first sequence of occupied cells plus its heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Point>,
    direction: Direction,
}

impl Snake {
    /// Build a snake from head-first cells.
    ///
    /// Returns `None` for an empty body or one with duplicate cells.
    pub fn new(cells: &[Point], direction: Direction) -> Option<Self> {
        if cells.is_empty() {
            return None;
        }
        for (i, p) in cells.iter().enumerate() {
            if cells[..i].contains(p) {
                return None;
            }
        }
        Some(Self {
            body: cells.iter().copied().collect(),
            direction,
        })
    }

    /// The fixed starting snake.
    pub fn initial() -> Self {
        Self {
            body: START_SNAKE.iter().copied().collect(),
            direction: START_DIRECTION,
        }
    }

    pub fn head(&self) -> Point {
        // Non-empty by construction; `advance` always pushes before popping.
        self.body[0]
    }

    pub fn tail(&self) -> Point {
        self.body[self.body.len() - 1]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, p: Point) -> bool {
        self.body.contains(&p)
    }

    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    /// The cell the head would move into next.
    pub fn next_head(&self) -> Point {
        self.head().step(self.direction)
    }

    /// Change heading unless `dir` is the exact reverse of the current one.
    pub fn turn(&mut self, dir: Direction) -> bool {
        if dir.is_opposite(self.direction) {
            return false;
        }
        self.direction = dir;
        true
    }

    /// Push a new head; drop the tail unless growing.
    pub fn advance(&mut self, new_head: Point, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            self.body.pop_back();
        }
    }
}
