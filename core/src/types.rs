use smallvec::SmallVec;

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub(crate) const fn grid_index((row, col): Coord2) -> [usize; 2] {
    [row as usize, col as usize]
}

pub const fn cell_count(rows: Coord, cols: Coord) -> CellCount {
    let rows = rows as CellCount;
    let cols = cols as CellCount;
    rows.saturating_mul(cols)
}

/// Enumerates the up-to-8 Moore neighbors of `center`, clipped at the board
/// boundary. No wraparound.
pub fn moore_neighbors(center: Coord2, bounds: Coord2) -> SmallVec<[Coord2; 8]> {
    let (row, col) = center;
    let (rows, cols) = bounds;
    debug_assert!(row < rows && col < cols);

    let row_end = row.saturating_add(1).min(rows - 1);
    let col_end = col.saturating_add(1).min(cols - 1);

    let mut neighbors = SmallVec::new();
    for r in row.saturating_sub(1)..=row_end {
        for c in col.saturating_sub(1)..=col_end {
            if (r, c) != center {
                neighbors.push((r, c));
            }
        }
    }
    neighbors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_edge_and_interior_neighbor_counts() {
        assert_eq!(moore_neighbors((0, 0), (3, 3)).len(), 3);
        assert_eq!(moore_neighbors((0, 1), (3, 3)).len(), 5);
        assert_eq!(moore_neighbors((1, 1), (3, 3)).len(), 8);
        assert_eq!(moore_neighbors((2, 2), (3, 3)).len(), 3);
    }

    #[test]
    fn degenerate_grids() {
        assert!(moore_neighbors((0, 0), (1, 1)).is_empty());
        assert_eq!(moore_neighbors((0, 0), (1, 2)).as_slice(), &[(0, 1)]);
        assert_eq!(moore_neighbors((1, 0), (3, 1)).as_slice(), &[(0, 0), (2, 0)]);
    }

    #[test]
    fn neighbors_never_wrap_around() {
        let neighbors = moore_neighbors((254, 254), (255, 255));
        assert_eq!(neighbors.len(), 3);
        assert!(neighbors.iter().all(|&(r, c)| r >= 253 && c >= 253));
    }

    #[test]
    fn cell_count_saturates() {
        assert_eq!(cell_count(16, 30), 480);
        assert_eq!(cell_count(255, 255), 65025);
    }
}
