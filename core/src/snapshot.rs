use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// What the presentation layer is allowed to see for one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayCell {
    Hidden,
    Flagged,
    Revealed(u8),
    Mine,
    TriggeredMine,
    Misflagged,
}

/// Read-only aggregate of everything a frontend needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub config: GameConfig,
    pub phase: GamePhase,
    pub mines_remaining: i32,
    pub elapsed_secs: u64,
    pub cells: Array2<DisplayCell>,
}

impl BoardSnapshot {
    pub fn of(board: &Board) -> Self {
        let config = board.config();
        let mut cells = Array2::from_elem(
            [config.rows as usize, config.cols as usize],
            DisplayCell::Hidden,
        );
        for row in 0..config.rows {
            for col in 0..config.cols {
                cells[grid_index((row, col))] = board.display_cell((row, col));
            }
        }

        Self {
            config,
            phase: board.phase(),
            mines_remaining: board.mines_remaining(),
            elapsed_secs: board.elapsed_secs(),
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_captures_display_state() {
        let mut b = Board::from_mine_coords(2, 2, &[(0, 0)]).unwrap();
        b.reveal((1, 1)).unwrap();
        b.toggle_flag((0, 0)).unwrap();

        let snap = BoardSnapshot::of(&b);
        assert_eq!(snap.phase, GamePhase::InProgress);
        assert_eq!(snap.mines_remaining, 0);
        assert_eq!(snap.cells[[1, 1]], DisplayCell::Revealed(1));
        assert_eq!(snap.cells[[0, 0]], DisplayCell::Flagged);
        assert_eq!(snap.cells[[0, 1]], DisplayCell::Hidden);
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let mut b = Board::from_mine_coords(2, 3, &[(1, 2)]).unwrap();
        b.reveal((0, 0)).unwrap();

        let snap = BoardSnapshot::of(&b);
        let json = serde_json::to_string(&snap).unwrap();
        let back: BoardSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }

    #[test]
    fn lost_snapshot_shows_the_whole_minefield() {
        let mut b = Board::from_mine_coords(1, 3, &[(0, 0), (0, 2)]).unwrap();
        b.reveal((0, 2)).unwrap();

        let snap = BoardSnapshot::of(&b);
        assert_eq!(snap.phase, GamePhase::Lost);
        assert_eq!(snap.cells[[0, 2]], DisplayCell::TriggeredMine);
        assert_eq!(snap.cells[[0, 0]], DisplayCell::Mine);
        assert_eq!(snap.cells[[0, 1]], DisplayCell::Hidden);
    }
}
