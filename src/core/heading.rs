//! Cardinal headings.
//!
//! Headings form a cycle `North → East → South → West → North`.
//! Turning right is `next`, turning left is `prev`.

use serde::{Deserialize, Serialize};

/// One of the four cardinal directions a robot can face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// All headings in clockwise order, starting at `North`.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    /// Iterate over all headings in clockwise order.
    pub fn all() -> impl Iterator<Item = Heading> {
        Self::ALL.into_iter()
    }

    const fn index(self) -> usize {
        match self {
            Heading::North => 0,
            Heading::East => 1,
            Heading::South => 2,
            Heading::West => 3,
        }
    }

    /// The heading after a quarter turn clockwise.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % 4]
    }

    /// The heading after a quarter turn counter-clockwise.
    #[must_use]
    pub const fn prev(self) -> Self {
        Self::ALL[(self.index() + 3) % 4]
    }

    /// The heading after a half turn.
    #[must_use]
    pub const fn opposite(self) -> Self {
        self.next().next()
    }
}

impl std::fmt::Display for Heading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Heading::North => "NORTH",
            Heading::East => "EAST",
            Heading::South => "SOUTH",
            Heading::West => "WEST",
        };
        f.write_str(name)
    }
}
