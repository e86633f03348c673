use std::fmt;
use std::fmt::{Display, Formatter, Write};

/// One grid position. `adjacent_mines` is only meaningful once the cell is visible.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub is_mine: bool,
    pub adjacent_mines: u8,
    pub is_visible: bool,
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let c = match (self.is_visible, self.is_mine) {
            (false, _) => '#',
            (true, true) => '*',
            (true, false) => match self.adjacent_mines {
                0 => '.',
                n => char::from(b'0' + n.min(8)),
            },
        };

        f.write_char(c)
    }
}
