use crate::cell::Cell;
use crate::error::{ConfigError, InvalidCoordinate};
use crate::placement::{FixedPlacement, MinePlacement, RandomPlacement};
use crate::snapshot::{CellView, Snapshot};
use crate::util::{Coord, DIRS_8, DIRS_9, rc_i, valid_neighbors};
use log::{debug, info, trace, warn};
use std::fmt;
use std::fmt::{Display, Formatter};

/// Where a game stands. Mines are placed on the way out of `NotStarted`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum FieldState {
    #[default]
    NotStarted,
    InProgress,
    Lost {
        row: usize,
        col: usize,
    },
    Won,
}

/// Which cells are kept free of mines when the first cell is opened.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum FirstClick {
    /// Every cell is eligible, including the one being opened.
    Unprotected,
    /// The opened cell is never a mine.
    #[default]
    SafeCell,
    /// The opened cell and its neighbors are never mines, if the rest of the field has room.
    SafeZone,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    /// Cells that became visible, in reveal order. Empty if the cell was already open.
    Revealed { cells: Vec<Coord> },
    Loss,
    /// The game had already ended; nothing changed.
    GameOver,
}

#[derive(Debug)]
pub struct GameField<P = RandomPlacement> {
    rows: usize,
    cols: usize,
    mine_count: usize,
    grid: Vec<Cell>,
    state: FieldState,
    first_click: FirstClick,
    placement: P,
    hidden_safe_cells: usize,
    // reused by every flood fill so it's only allocated once
    stack: Vec<Coord>,
}

/// Largest number of rows or columns a field may have.
pub const MAX_SIDE: usize = 256;

fn validate(rows: usize, cols: usize, mine_count: usize) -> Result<usize, ConfigError> {
    if rows == 0 || cols == 0 {
        return Err(ConfigError::EmptyField { rows, cols });
    }
    if rows > MAX_SIDE || cols > MAX_SIDE {
        return Err(ConfigError::Oversized { rows, cols });
    }
    let cells = rows * cols;
    if mine_count >= cells {
        return Err(ConfigError::TooManyMines {
            mines: mine_count,
            cells,
        });
    }
    Ok(cells)
}

impl GameField<RandomPlacement> {
    /// A field with randomly placed mines and the default [`FirstClick`] policy.
    pub fn new(rows: usize, cols: usize, mine_count: usize) -> Result<Self, ConfigError> {
        Self::with_placement(rows, cols, mine_count, RandomPlacement::from_os_rng())
    }

    /// Like [`GameField::new`], but the layout only depends on `seed`.
    pub fn seeded(
        rows: usize,
        cols: usize,
        mine_count: usize,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        Self::with_placement(rows, cols, mine_count, RandomPlacement::seeded(seed))
    }
}

impl GameField<FixedPlacement> {
    /// A field whose mines will be exactly `mines` once the first cell is opened.
    pub fn with_mines(rows: usize, cols: usize, mines: &[Coord]) -> Result<Self, ConfigError> {
        let placement = FixedPlacement::new(mines.iter().copied());
        Self::with_placement(rows, cols, placement.len(), placement)
    }
}

impl<P: MinePlacement> GameField<P> {
    /// A field that asks `placement` for its mines. A preset layout must fit the field and hold
    /// exactly `mine_count` mines.
    pub fn with_placement(
        rows: usize,
        cols: usize,
        mine_count: usize,
        placement: P,
    ) -> Result<Self, ConfigError> {
        let cells = validate(rows, cols, mine_count)?;
        if let Some(layout) = placement.preset() {
            if let Some(&(row, col)) = layout.iter().find(|(r, c)| *r >= rows || *c >= cols) {
                return Err(ConfigError::MineOutsideField {
                    row,
                    col,
                    rows,
                    cols,
                });
            }
            if layout.len() != mine_count {
                return Err(ConfigError::LayoutMismatch {
                    expected: mine_count,
                    actual: layout.len(),
                });
            }
        }
        debug!("new {rows}x{cols} field with {mine_count} mines");

        Ok(Self {
            rows,
            cols,
            mine_count,
            grid: vec![Cell::default(); cells],
            state: FieldState::NotStarted,
            first_click: FirstClick::default(),
            placement,
            hidden_safe_cells: cells - mine_count,
            stack: Vec::new(),
        })
    }

    pub fn first_click(mut self, policy: FirstClick) -> Self {
        self.first_click = policy;
        self
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.state, FieldState::Lost { .. } | FieldState::Won)
    }

    pub fn is_lost(&self) -> bool {
        matches!(self.state, FieldState::Lost { .. })
    }

    pub fn is_won(&self) -> bool {
        self.state == FieldState::Won
    }

    /// Safe cells the player still has to open.
    pub fn hidden_safe_cells(&self) -> usize {
        self.hidden_safe_cells
    }

    /// Opens one cell. The first open in a game also lays the mines.
    pub fn open_cell(&mut self, row: usize, col: usize) -> Result<OpenOutcome, InvalidCoordinate> {
        let Some(index) = rc_i((row, col), self.rows, self.cols) else {
            return Err(InvalidCoordinate {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        };

        match self.state {
            FieldState::Lost { .. } | FieldState::Won => {
                debug!("ignoring open at ({row}, {col}), game is over");
                return Ok(OpenOutcome::GameOver);
            }
            FieldState::NotStarted => self.place_mines((row, col)),
            FieldState::InProgress => {}
        }

        if self.grid[index].is_mine {
            info!("mine hit at ({row}, {col})");
            self.state = FieldState::Lost { row, col };
            return Ok(OpenOutcome::Loss);
        }

        let cells = self.reveal_cell(row, col);
        debug!(
            "opened ({row}, {col}): {} cells revealed, {} safe cells left",
            cells.len(),
            self.hidden_safe_cells
        );
        if self.hidden_safe_cells == 0 {
            info!("all safe cells revealed");
            self.state = FieldState::Won;
        }
        trace!("\n{self}");

        Ok(OpenOutcome::Revealed { cells })
    }

    /// Number of mines among the up to 8 cells around `(row, col)`.
    pub fn count_adjacent_mines(&self, row: usize, col: usize) -> u8 {
        if rc_i((row, col), self.rows, self.cols).is_none() {
            return 0;
        }
        valid_neighbors(&DIRS_8, (row, col), self.rows, self.cols)
            .filter(|&pos| self.cell(pos).is_some_and(|cell| cell.is_mine))
            .count() as u8
    }

    pub fn snapshot(&self) -> Snapshot {
        let exploded = match self.state {
            FieldState::Lost { row, col } => rc_i((row, col), self.rows, self.cols),
            _ => None,
        };
        let cells = self
            .grid
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                if exploded == Some(i) {
                    CellView::Exploded
                } else if cell.is_visible {
                    CellView::Revealed(cell.adjacent_mines)
                } else {
                    CellView::Hidden
                }
            })
            .collect();
        Snapshot::new(self.rows, self.cols, cells)
    }

    fn cell(&self, pos: Coord) -> Option<&Cell> {
        rc_i(pos, self.rows, self.cols).map(|i| &self.grid[i])
    }

    fn protected_cells(&self, origin: Coord) -> Vec<Coord> {
        match self.first_click {
            FirstClick::Unprotected => Vec::new(),
            FirstClick::SafeCell => vec![origin],
            FirstClick::SafeZone => {
                let zone: Vec<Coord> =
                    valid_neighbors(&DIRS_9, origin, self.rows, self.cols).collect();
                if self.grid.len() - zone.len() >= self.mine_count {
                    zone
                } else {
                    vec![origin]
                }
            }
        }
    }

    fn place_mines(&mut self, origin: Coord) {
        let protected = self.protected_cells(origin);
        let mines = self
            .placement
            .place_mines(self.rows, self.cols, self.mine_count, &protected);

        let mut placed = 0;
        for pos in mines {
            if placed == self.mine_count {
                warn!("placement returned more than {} mines", self.mine_count);
                break;
            }
            let Some(i) = rc_i(pos, self.rows, self.cols) else {
                warn!("placement returned {pos:?}, outside the field");
                continue;
            };
            let cell = &mut self.grid[i];
            if !cell.is_mine {
                cell.is_mine = true;
                placed += 1;
            }
        }

        // the mine count is fixed once the field is built, so make up any shortfall
        if placed < self.mine_count {
            warn!(
                "placement laid {placed} of {} mines, filling the rest in row order",
                self.mine_count
            );
            for (i, cell) in self.grid.iter_mut().enumerate() {
                if placed == self.mine_count {
                    break;
                }
                let pos = (i / self.cols, i % self.cols);
                if !cell.is_mine && !protected.contains(&pos) {
                    cell.is_mine = true;
                    placed += 1;
                }
            }
        }

        self.hidden_safe_cells = self.grid.len() - self.mine_count;
        self.state = FieldState::InProgress;
        info!(
            "placed {} mines on the {}x{} field, first open at {origin:?} ({:?})",
            self.mine_count, self.rows, self.cols, self.first_click
        );
    }

    /// Flood fill from `(row, col)`, driven by an explicit stack. Every cell is revealed at most
    /// once, so this ends after at most `rows * cols` reveals.
    fn reveal_cell(&mut self, row: usize, col: usize) -> Vec<Coord> {
        let (rows, cols) = (self.rows, self.cols);
        let mut revealed = Vec::new();

        self.stack.clear();
        self.stack.push((row, col));

        while let Some(pos) = self.stack.pop() {
            let Some(i) = rc_i(pos, rows, cols) else {
                continue;
            };
            if self.grid[i].is_visible {
                continue;
            }

            let adjacent = self.count_adjacent_mines(pos.0, pos.1);
            let cell = &mut self.grid[i];
            cell.is_visible = true;
            cell.adjacent_mines = adjacent;
            if !cell.is_mine {
                self.hidden_safe_cells -= 1;
            }
            revealed.push(pos);

            if adjacent == 0 {
                for neighbor in valid_neighbors(&DIRS_8, pos, rows, cols) {
                    if self.cell(neighbor).is_some_and(|c| !c.is_visible) {
                        self.stack.push(neighbor);
                    }
                }
            }
        }

        revealed
    }
}

impl<P> Display for GameField<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for line in self.grid.chunks_exact(self.cols) {
            for cell in line {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<P> GameField<P> {
    /// Positions of every mine. Only for assertions in tests.
    #[cfg(test)]
    fn mine_positions(&self) -> Vec<Coord> {
        use crate::util::i_rc;
        self.grid
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_mine)
            .filter_map(|(i, _)| i_rc(i, self.rows, self.cols))
            .collect()
    }
}
