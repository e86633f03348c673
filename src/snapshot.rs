use std::fmt;
use std::fmt::{Display, Formatter, Write};

/// What the player may know about one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellView {
    Hidden,
    Revealed(u8),
    /// The mine that ended the game.
    Exploded,
}

impl Display for CellView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let c = match *self {
            CellView::Hidden => '#',
            CellView::Revealed(0) => '.',
            CellView::Revealed(n) => char::from(b'0' + n.min(8)),
            CellView::Exploded => '*',
        };
        f.write_char(c)
    }
}

/// An owned copy of the board as the player sees it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    rows: usize,
    cols: usize,
    cells: Vec<CellView>,
}

impl Snapshot {
    pub(crate) fn new(rows: usize, cols: usize, cells: Vec<CellView>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<CellView> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col).copied()
    }

    pub fn rows_iter(&self) -> impl Iterator<Item = &[CellView]> {
        self.cells.chunks_exact(self.cols)
    }

    pub fn revealed_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| matches!(c, CellView::Revealed(_)))
            .count()
    }
}

impl Display for Snapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for line in self.rows_iter() {
            for cell in line {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CellView::*;

    fn sample() -> Snapshot {
        Snapshot::new(
            2,
            3,
            vec![Hidden, Revealed(0), Revealed(2), Exploded, Revealed(8), Hidden],
        )
    }

    #[test]
    fn display_draws_one_line_per_row() {
        assert_eq!(sample().to_string(), "#.2\n*8#\n");
    }

    #[test]
    fn get_is_bounds_checked() {
        let s = sample();
        assert_eq!(s.get(0, 2), Some(Revealed(2)));
        assert_eq!(s.get(1, 0), Some(Exploded));
        assert_eq!(s.get(2, 0), None);
        assert_eq!(s.get(0, 3), None);
    }

    #[test]
    fn revealed_count_skips_hidden_and_exploded() {
        assert_eq!(sample().revealed_count(), 3);
    }
}
