//! Tests for read-only move detection

#[cfg(test)]
mod tests {
    use grid2048::algorithm::probe::{available_directions, has_move, is_move_possible};
    use grid2048::board::direction::Direction;
    use grid2048::board::tile::Tile;
    use ndarray::Array2;

    fn cells(rows: &[&[u32]]) -> Array2<Tile> {
        let size = rows.len();
        let mut cells = Array2::default((size, size));
        for (y, row) in rows.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                if value > 0 {
                    cells[[x, y]] = Tile::with_value(value);
                }
            }
        }
        cells
    }

    // Tests an empty grid offers no move
    // Verified by treating ghosts as movable
    #[test]
    fn test_empty_grid_has_no_move() {
        let empty: Array2<Tile> = Array2::default((3, 3));

        assert!(!is_move_possible(&empty));
        assert!(available_directions(&empty).is_empty());
    }

    // Tests a tile against an edge only moves away from it
    // Verified by allowing steps off the grid
    #[test]
    fn test_corner_tile_directions() {
        let grid = cells(&[&[2, 0], &[0, 0]]);

        assert!(!has_move(&grid, Direction::Left));
        assert!(!has_move(&grid, Direction::Up));
        assert!(has_move(&grid, Direction::Right));
        assert!(has_move(&grid, Direction::Down));
        assert_eq!(
            available_directions(&grid),
            vec![Direction::Right, Direction::Down]
        );
    }

    // Tests an equal neighbour counts as a move on a full grid
    // Verified by ignoring merges
    #[test]
    fn test_full_grid_with_pair() {
        let grid = cells(&[&[2, 2, 4], &[8, 16, 32], &[64, 128, 256]]);

        assert!(is_move_possible(&grid));
        assert_eq!(
            available_directions(&grid),
            vec![Direction::Left, Direction::Right]
        );
    }

    // Tests a full grid without equal neighbours is stuck
    // Verified by comparing diagonal neighbours
    #[test]
    fn test_full_grid_without_pair() {
        let grid = cells(&[&[2, 4, 2], &[4, 2, 4], &[2, 4, 2]]);

        assert!(!is_move_possible(&grid));
    }

    // Tests tiles locked by a merge do not count as merge targets
    // Verified by ignoring the merged flag
    #[test]
    fn test_merged_neighbour_blocks() {
        let mut grid = cells(&[&[2, 2], &[4, 8]]);
        grid[[0, 0]].apply_merge_doubling();
        grid[[1, 0]].apply_merge_doubling();

        assert!(!has_move(&grid, Direction::Left));
    }

    // Tests probing does not change the cells
    // Verified by resolving while probing
    #[test]
    fn test_probe_is_read_only() {
        let grid = cells(&[&[0, 2, 2], &[4, 0, 4], &[0, 8, 0]]);
        let before = grid.clone();

        for direction in Direction::ALL {
            has_move(&grid, direction);
        }
        assert_eq!(grid, before);
    }
}
