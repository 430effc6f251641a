//! Remaining `(position, alignment)` option space during a placement search.
//!
//! The space is an explicit value threaded through the search loop; its only transitions
//! are monotonic set-shrinking, never re-growth within one search. The two alignment sets
//! are named by axis, not by position: `above`/`below` share the horizontal alignment axis
//! and `before`/`after` the vertical one.

use rustc_hash::FxHashSet;

use crate::model::{Alignment, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpace {
    positions: FxHashSet<Position>,
    x_alignment: FxHashSet<Alignment>,
    y_alignment: FxHashSet<Alignment>,
}

impl Default for OptionSpace {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionSpace {
    /// The full 4×3 option space.
    pub fn new() -> Self {
        Self {
            positions: [
                Position::Above,
                Position::Below,
                Position::After,
                Position::Before,
            ]
            .into_iter()
            .collect(),
            x_alignment: [Alignment::Start, Alignment::Center, Alignment::End]
                .into_iter()
                .collect(),
            y_alignment: [Alignment::Start, Alignment::Center, Alignment::End]
                .into_iter()
                .collect(),
        }
    }

    pub fn has_position(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }

    pub fn positions_remaining(&self) -> usize {
        self.positions.len()
    }

    /// The alignment set `position` chooses from (its own axis).
    pub fn axis(&self, position: Position) -> &FxHashSet<Alignment> {
        match position {
            Position::Above | Position::Below => &self.x_alignment,
            Position::Before | Position::After => &self.y_alignment,
        }
    }

    pub fn x_alignment(&self) -> &FxHashSet<Alignment> {
        &self.x_alignment
    }

    pub fn y_alignment(&self) -> &FxHashSet<Alignment> {
        &self.y_alignment
    }

    /// Removes a failed position, and with it the one alignment on that position's
    /// *perpendicular* axis that the same shortage of room rules out:
    ///
    /// | position | perpendicular-axis alignment removed |
    /// |----------|--------------------------------------|
    /// | above    | end                                  |
    /// | below    | start                                |
    /// | before   | end                                  |
    /// | after    | start                                |
    pub fn exclude_position(&mut self, position: Position) {
        self.positions.remove(&position);

        let (axis, removed) = match position {
            Position::Above => (&mut self.y_alignment, Alignment::End),
            Position::Below => (&mut self.y_alignment, Alignment::Start),
            Position::Before => (&mut self.x_alignment, Alignment::End),
            Position::After => (&mut self.x_alignment, Alignment::Start),
        };

        axis.remove(&removed);
    }

    /// Removes a failed alignment from `position`'s own axis. A non-center failure also
    /// rules out the position on the perpendicular axis that places the panel in the same
    /// overflowing region:
    ///
    /// | position     | start excludes | end excludes |
    /// |--------------|----------------|--------------|
    /// | above, below | before         | after        |
    /// | before, after| above          | below        |
    pub fn exclude_alignment(&mut self, position: Position, alignment: Alignment) {
        match position {
            Position::Above | Position::Below => self.x_alignment.remove(&alignment),
            Position::Before | Position::After => self.y_alignment.remove(&alignment),
        };

        let excluded = match (position, alignment) {
            (_, Alignment::Center) => return,
            (Position::Above | Position::Below, Alignment::Start) => Position::Before,
            (Position::Above | Position::Below, Alignment::End) => Position::After,
            (Position::Before | Position::After, Alignment::Start) => Position::Above,
            (Position::Before | Position::After, Alignment::End) => Position::Below,
        };

        self.positions.remove(&excluded);
    }
}
