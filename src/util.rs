/// A `(row, col)` position on the field.
pub type Coord = (usize, usize);

pub const DIRS_8: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];
pub const DIRS_9: [(i8, i8); 9] = [
    (0, 0),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

pub fn rc_i((r, c): Coord, rows: usize, cols: usize) -> Option<usize> {
    if rows <= r || cols <= c {
        None
    } else {
        Some(r * cols + c)
    }
}

pub fn i_rc(index: usize, rows: usize, cols: usize) -> Option<Coord> {
    if index >= rows * cols {
        None
    } else {
        Some((index / cols, index % cols))
    }
}

/// Positions reached from `(r, c)` by each offset in `dirs` that stay inside the grid.
pub fn valid_neighbors(
    dirs: &[(i8, i8)],
    (r, c): Coord,
    rows: usize,
    cols: usize,
) -> impl Iterator<Item = Coord> {
    dirs.iter()
        .map(|(dr, dc)| (*dr as isize, *dc as isize))
        .filter_map(move |(dr, dc)| Some((r.checked_add_signed(dr)?, c.checked_add_signed(dc)?)))
        .filter(move |(i, j)| rows > *i && cols > *j)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_conversion_is_row_major() {
        assert_eq!(rc_i((0, 0), 3, 4), Some(0));
        assert_eq!(rc_i((1, 2), 3, 4), Some(6));
        assert_eq!(rc_i((3, 0), 3, 4), None);
        assert_eq!(rc_i((0, 4), 3, 4), None);
        assert_eq!(i_rc(6, 3, 4), Some((1, 2)));
        assert_eq!(i_rc(12, 3, 4), None);
    }

    #[test]
    fn corner_has_three_neighbors() {
        let mut n: Vec<_> = valid_neighbors(&DIRS_8, (0, 0), 3, 3).collect();
        n.sort();
        assert_eq!(n, vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn center_has_eight_neighbors_and_nine_with_itself() {
        assert_eq!(valid_neighbors(&DIRS_8, (1, 1), 3, 3).count(), 8);
        assert_eq!(valid_neighbors(&DIRS_9, (1, 1), 3, 3).count(), 9);
        assert!(!valid_neighbors(&DIRS_8, (1, 1), 3, 3).any(|p| p == (1, 1)));
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        assert_eq!(valid_neighbors(&DIRS_8, (0, 0), 1, 1).count(), 0);
    }
}
