//! Tile positions and their 4-neighbourhood

use std::fmt;

/// Position of a pixel inside a square tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    /// Column, growing to the right
    pub x: usize,
    /// Row, growing downwards
    pub y: usize,
}

impl Coordinate {
    /// Create a coordinate
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Check that both components lie in `[0, size)`
    pub const fn is_within(self, size: usize) -> bool {
        self.x < size && self.y < size
    }

    /// Axis-aligned neighbours inside a tile of the given side length
    ///
    /// Yields left, right, up, down in that order, skipping any that fall
    /// outside the tile.
    pub fn adjacent_within(self, size: usize) -> impl Iterator<Item = Self> {
        let left = self.x.checked_sub(1).map(|x| Self::new(x, self.y));
        let right = Some(Self::new(self.x + 1, self.y));
        let up = self.y.checked_sub(1).map(|y| Self::new(self.x, y));
        let down = Some(Self::new(self.x, self.y + 1));

        [left, right, up, down]
            .into_iter()
            .flatten()
            .filter(move |c| c.is_within(size))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
