use mazegen::maze::{Maze, NEIGHBOR_OFFSETS, OPEN, TREASURE_A, TREASURE_B};
use std::path::PathBuf;

/// A cell the renderer treats as walkable: open corridor or treasure
pub fn is_passable(value: i32) -> bool {
    value == OPEN || value == TREASURE_A || value == TREASURE_B
}

/// Count orthogonal neighbors of (row, col) that are passable
pub fn passable_neighbors(maze: &Maze, row: i32, col: i32) -> i32 {
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|(dr, dc)| is_passable(maze.get_cell(row + dr, col + dc)))
        .count() as i32
}

/// Assert that the outermost ring of cells is entirely wall
pub fn assert_wall_ring(maze: &Maze) {
    use mazegen::maze::WALL;
    for col in 0..maze.cols {
        assert_eq!(maze.get_cell(0, col), WALL, "top border open at col {}", col);
        assert_eq!(
            maze.get_cell(maze.rows - 1, col),
            WALL,
            "bottom border open at col {}",
            col
        );
    }
    for row in 0..maze.rows {
        assert_eq!(maze.get_cell(row, 0), WALL, "left border open at row {}", row);
        assert_eq!(
            maze.get_cell(row, maze.cols - 1),
            WALL,
            "right border open at row {}",
            row
        );
    }
}

/// Unique temp file path for round-trip tests
pub fn temp_maze_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("mazegen_test_{}_{}.txt", std::process::id(), name))
}
