use std::collections::VecDeque;

use hashbrown::HashSet;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Lifecycle of one board. Terminal states are one-way: restarting requires
/// dropping the board and constructing a fresh one.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GamePhase {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl GamePhase {
    pub const fn is_initial(self) -> bool {
        matches!(self, Self::NotStarted)
    }

    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GamePhase {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// Outcome of a reveal action.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    Exploded,
    Won,
}

impl RevealOutcome {
    /// Whether this outcome changed the board.
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Outcome of a flag toggle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum FlagOutcome {
    NoChange,
    Flagged,
    Unflagged,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Owns the grid of cells and drives one whole game: mine layout, adjacency
/// counts, reveals with flood-fill, flag bookkeeping, and the end conditions.
///
/// All out-of-turn actions (revealing a revealed or flagged cell, anything
/// after the game ended) are no-ops reported as `NoChange`; only
/// out-of-bounds coordinates are an error.
#[derive(Clone, Debug)]
pub struct Board {
    config: GameConfig,
    grid: Array2<Cell>,
    revealed_safe: CellCount,
    flagged: CellCount,
    phase: GamePhase,
    triggered_mine: Option<Coord2>,
    clock: GameClock,
}

impl Board {
    /// Session-random board.
    pub fn new(config: GameConfig) -> Self {
        Self::with_placer(config, &mut RandomPlacer::from_entropy())
    }

    /// Reproducible board for a given seed.
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_placer(config, &mut RandomPlacer::from_seed(seed))
    }

    pub fn with_placer(config: GameConfig, placer: &mut dyn MinePlacer) -> Self {
        let mask = placer.place_mines(config);
        Self::from_mask(config, &mask)
    }

    /// Fully deterministic layout from explicit mine positions. At least one
    /// cell must stay safe.
    pub fn from_mine_coords(rows: Coord, cols: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let rows = rows.max(1);
        let cols = cols.max(1);

        let mut mask: Array2<bool> = Array2::default([rows as usize, cols as usize]);
        for &(row, col) in mine_coords {
            if row >= rows || col >= cols {
                return Err(GameError::InvalidCoords);
            }
            mask[grid_index((row, col))] = true;
        }

        let mines = mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        if mines > cell_count(rows, cols) - 1 {
            return Err(GameError::TooManyMines);
        }

        Ok(Self::from_mask(
            GameConfig::new_unchecked(rows, cols, mines),
            &mask,
        ))
    }

    fn from_mask(config: GameConfig, mask: &Array2<bool>) -> Self {
        let bounds = (config.rows, config.cols);
        let mut grid: Array2<Cell> =
            Array2::default([config.rows as usize, config.cols as usize]);

        for row in 0..config.rows {
            for col in 0..config.cols {
                let coords = (row, col);
                let is_mine = mask[grid_index(coords)];
                let adjacent_mines = if is_mine {
                    0
                } else {
                    moore_neighbors(coords, bounds)
                        .into_iter()
                        .filter(|&pos| mask[grid_index(pos)])
                        .count() as u8
                };
                grid[grid_index(coords)] = Cell {
                    is_mine,
                    adjacent_mines,
                    state: CellState::Hidden,
                };
            }
        }

        Self {
            config,
            grid,
            revealed_safe: 0,
            flagged: 0,
            phase: GamePhase::default(),
            triggered_mine: None,
            clock: GameClock::default(),
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn rows(&self) -> Coord {
        self.config.rows
    }

    pub fn cols(&self) -> Coord {
        self.config.cols
    }

    pub fn total_mines(&self) -> CellCount {
        self.config.mines
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.config.safe_cells()
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    /// Non-mine cells revealed so far. Only ever increases.
    pub fn revealed_safe_count(&self) -> CellCount {
        self.revealed_safe
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged
    }

    /// `mines - flags`, for the counter display. Goes negative when the
    /// player over-flags; deliberately not clamped.
    pub fn mines_remaining(&self) -> i32 {
        i32::from(self.config.mines) - i32::from(self.flagged)
    }

    /// Whole seconds since the first reveal, frozen once the game ends.
    pub fn elapsed_secs(&self) -> u64 {
        self.clock.elapsed_secs()
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    /// The mine that ended the game, `None` unless lost.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Direct cell access; `coords` must be in bounds.
    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.grid[grid_index(coords)]
    }

    /// Reveal a cell. No-op if the cell is revealed or flagged, or the game
    /// is over. The first reveal of the game starts the clock.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate(coords)?;
        if self.phase.is_over() {
            return Ok(RevealOutcome::NoChange);
        }

        let cell = self.cell_at(coords);
        if !cell.state.is_hidden() {
            return Ok(RevealOutcome::NoChange);
        }

        self.mark_started();

        if cell.is_mine {
            self.grid[grid_index(coords)].state = CellState::Revealed;
            self.triggered_mine = Some(coords);
            log::debug!("mine hit at {:?}", coords);
            self.end_game(false);
            return Ok(RevealOutcome::Exploded);
        }

        self.reveal_safe(coords);

        if self.revealed_safe >= self.safe_cell_count() {
            self.end_game(true);
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Revealed)
        }
    }

    /// Toggle the flag on a hidden cell. No-op on revealed cells and after
    /// the game ends. Flagging alone never starts the game.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let coords = self.validate(coords)?;
        if self.phase.is_over() {
            return Ok(FlagOutcome::NoChange);
        }

        let cell = &mut self.grid[grid_index(coords)];
        Ok(match cell.state {
            CellState::Hidden => {
                cell.state = CellState::Flagged;
                self.flagged += 1;
                FlagOutcome::Flagged
            }
            CellState::Flagged => {
                cell.state = CellState::Hidden;
                self.flagged -= 1;
                FlagOutcome::Unflagged
            }
            CellState::Revealed => FlagOutcome::NoChange,
        })
    }

    /// Presentation-facing view of one cell. While playing this hides
    /// everything unrevealed; after the game ends it also uncovers the mines:
    /// the triggered one, the missed ones, and wrong flags on a loss, or
    /// auto-flagged mines on a win.
    pub fn display_cell(&self, coords: Coord2) -> DisplayCell {
        let cell = self.cell_at(coords);
        match self.phase {
            GamePhase::NotStarted | GamePhase::InProgress => Self::display_playing(cell),
            GamePhase::Won => {
                if cell.is_mine {
                    DisplayCell::Flagged
                } else {
                    Self::display_playing(cell)
                }
            }
            GamePhase::Lost => {
                if self.triggered_mine == Some(coords) {
                    DisplayCell::TriggeredMine
                } else if cell.is_mine {
                    match cell.state {
                        CellState::Flagged => DisplayCell::Flagged,
                        _ => DisplayCell::Mine,
                    }
                } else if cell.is_flagged() {
                    DisplayCell::Misflagged
                } else {
                    Self::display_playing(cell)
                }
            }
        }
    }

    fn display_playing(cell: Cell) -> DisplayCell {
        match cell.state {
            CellState::Hidden => DisplayCell::Hidden,
            CellState::Flagged => DisplayCell::Flagged,
            CellState::Revealed => DisplayCell::Revealed(cell.adjacent_mines),
        }
    }

    /// Worklist flood-fill starting at a hidden safe cell: reveal it, and if
    /// its count is zero keep expanding through hidden neighbors. Flagged
    /// cells are barriers; every cell is visited at most once.
    fn reveal_safe(&mut self, origin: Coord2) {
        let bounds = (self.config.rows, self.config.cols);
        let mut visited: HashSet<Coord2> = HashSet::new();
        let mut worklist = VecDeque::from([origin]);

        while let Some(coords) = worklist.pop_front() {
            if !visited.insert(coords) {
                continue;
            }

            let cell = &mut self.grid[grid_index(coords)];
            if !cell.state.is_hidden() {
                log::trace!("skipping {:?}", coords);
                continue;
            }
            debug_assert!(!cell.is_mine);

            cell.state = CellState::Revealed;
            let adjacent_mines = cell.adjacent_mines;
            self.revealed_safe += 1;
            log::trace!("revealed {:?}, adjacent mines: {}", coords, adjacent_mines);

            if adjacent_mines == 0 {
                worklist.extend(
                    moore_neighbors(coords, bounds)
                        .into_iter()
                        .filter(|&pos| self.grid[grid_index(pos)].state.is_hidden())
                        .filter(|pos| !visited.contains(pos)),
                );
            }
        }
    }

    fn mark_started(&mut self) {
        if self.phase.is_initial() {
            self.phase = GamePhase::InProgress;
            self.clock.start();
            log::debug!("game started");
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.phase.is_over() {
            return;
        }

        self.phase = if won { GamePhase::Won } else { GamePhase::Lost };
        self.clock.stop();
        if won {
            self.triggered_mine = None;
        }
        log::debug!("game over after {}s, won: {}", self.clock.elapsed_secs(), won);
    }

    fn validate(&self, coords: Coord2) -> Result<Coord2> {
        let (row, col) = coords;
        if row < self.config.rows && col < self.config.cols {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }
}
