//! Core engine for a single-player grid-reveal puzzle game.
//!
//! The crate is a pure state machine with no rendering dependency: a
//! presentation layer constructs a [`Board`], forwards player input to
//! [`Board::reveal`] and [`Board::toggle_flag`], and draws from
//! [`Board::display_cell`] or a [`BoardSnapshot`]. Restarting is explicit
//! ownership transfer: drop the old board, build a new one.

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use clock::*;
pub use error::*;
pub use generator::*;
pub use snapshot::*;
pub use types::*;

mod board;
mod cell;
mod clock;
mod error;
mod generator;
mod snapshot;
mod types;

/// Board dimensions and requested mine count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    /// Clamps dimensions to at least 1x1 and the mine count so that at least
    /// one safe cell always exists.
    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        let max_mines = cell_count(rows, cols) - 1;
        if mines > max_mines {
            log::warn!(
                "requested {} mines but only {} fit on {}x{}",
                mines,
                max_mines,
                rows,
                cols
            );
        }
        Self::new_unchecked(rows, cols, mines.min(max_mines))
    }

    pub const fn total_cells(&self) -> CellCount {
        cell_count(self.rows, self.cols)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }

    pub const fn beginner() -> Self {
        Self::new_unchecked(9, 9, 10)
    }

    pub const fn intermediate() -> Self {
        Self::new_unchecked(16, 16, 40)
    }

    pub const fn expert() -> Self {
        Self::new_unchecked(16, 30, 99)
    }
}
