use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::MazeError;
use crate::maze::{Maze, OPEN, TREASURE_A, TREASURE_B, WALL};

/// Two-cell carving moves as (row, col) deltas, one per cardinal direction
const CARVE_MOVES: [(i32, i32); 4] = [(0, 2), (2, 0), (0, -2), (-2, 0)];

/// Chance threshold for marking a dead end as treasure: a uniform draw
/// in [0,1) must exceed this value (~40% of dead ends qualify)
const TREASURE_THRESHOLD: f64 = 0.6;

/// Maze generator owning the random source for one or more generation runs
pub struct MazeGenerator {
    rng: StdRng,
}

/// A pending carve position with its shuffled direction order
struct CarveFrame {
    row: i32,
    col: i32,
    moves: [(i32, i32); 4],
    cursor: usize,
}

impl MazeGenerator {
    /// Create a generator seeded from OS entropy
    pub fn new() -> Self {
        MazeGenerator {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a generator with a fixed seed, producing identical mazes per seed
    pub fn with_seed(seed: u64) -> Self {
        MazeGenerator {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate a maze for the requested dimensions.
    ///
    /// Dimensions are normalized first: even values are decremented to the
    /// next odd value, then both grow by one to hold the trailing border
    /// row/column. The resulting grid is carved with a randomized
    /// depth-first backtracker, then post-processed: border enforcement,
    /// a fixed alternating bottom-edge pattern, removal of isolated open
    /// cells, and treasure markers at some dead ends.
    pub fn generate(&mut self, width: i32, height: i32) -> Result<Maze, MazeError> {
        if width <= 0 || height <= 0 {
            return Err(MazeError::InvalidDimension { width, height });
        }

        let (width, height) = normalize_dimensions(width, height);
        let mut maze = Maze::new(height, width);

        self.carve(&mut maze);
        enforce_border(&mut maze);
        shape_bottom_rows(&mut maze);
        repair_isolated_cells(&mut maze);
        self.place_treasures(&mut maze);

        Ok(maze)
    }

    /// Depth-first carving with randomized direction order per cell.
    /// Uses an explicit frame stack so carving depth is bounded by the
    /// heap, not the call stack.
    fn carve(&mut self, maze: &mut Maze) {
        // Odd row/col counts strictly inside the border; tiny grids may
        // have no carvable interior at all
        let row_choices = (maze.rows - 1) / 2;
        let col_choices = (maze.cols - 1) / 2;
        if row_choices == 0 || col_choices == 0 {
            return;
        }

        let start_row = 2 * self.rng.gen_range(0..row_choices) + 1;
        let start_col = 2 * self.rng.gen_range(0..col_choices) + 1;
        maze.set_cell(start_row, start_col, OPEN);

        let mut stack = vec![self.new_frame(start_row, start_col)];
        while let Some(frame) = stack.last_mut() {
            if frame.cursor == frame.moves.len() {
                stack.pop();
                continue;
            }
            let (dr, dc) = frame.moves[frame.cursor];
            frame.cursor += 1;
            let (row, col) = (frame.row, frame.col);

            let (nr, nc) = (row + dr, col + dc);
            if nr >= 1
                && nr < maze.rows - 1
                && nc >= 1
                && nc < maze.cols - 1
                && maze.get_cell(nr, nc) == WALL
            {
                // Open the wall between the two cells, then the target
                maze.set_cell(row + dr / 2, col + dc / 2, OPEN);
                maze.set_cell(nr, nc, OPEN);
                stack.push(self.new_frame(nr, nc));
            }
        }
    }

    /// Build a carve frame with a fresh shuffle of the four directions
    fn new_frame(&mut self, row: i32, col: i32) -> CarveFrame {
        let mut moves = CARVE_MOVES;
        moves.shuffle(&mut self.rng);
        CarveFrame {
            row,
            col,
            moves,
            cursor: 0,
        }
    }

    /// Mark some open dead ends as treasure, skipping the bottom three rows
    fn place_treasures(&mut self, maze: &mut Maze) {
        for row in (1..maze.rows - 3).step_by(2) {
            for col in (1..maze.cols - 1).step_by(2) {
                if maze.get_cell(row, col) != OPEN {
                    continue;
                }
                if maze.open_neighbors(row, col) == 1
                    && self.rng.gen::<f64>() > TREASURE_THRESHOLD
                {
                    let kind = if self.rng.gen_bool(0.5) {
                        TREASURE_A
                    } else {
                        TREASURE_B
                    };
                    maze.set_cell(row, col, kind);
                }
            }
        }
    }
}

impl Default for MazeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Force dimensions odd, then add one trailing border row/column
fn normalize_dimensions(mut width: i32, mut height: i32) -> (i32, i32) {
    if width % 2 == 0 {
        width -= 1;
    }
    if height % 2 == 0 {
        height -= 1;
    }
    (width + 1, height + 1)
}

/// Force the outermost ring of cells to wall
fn enforce_border(maze: &mut Maze) {
    for col in 0..maze.cols {
        maze.set_cell(0, col, WALL);
        maze.set_cell(maze.rows - 1, col, WALL);
    }
    for row in 0..maze.rows {
        maze.set_cell(row, 0, WALL);
        maze.set_cell(row, maze.cols - 1, WALL);
    }
}

/// Rewrite the last two rows: an alternating open/wall pattern above a
/// solid wall row, independent of what carving produced there
fn shape_bottom_rows(maze: &mut Maze) {
    let last = maze.rows - 1;
    maze.set_cell(last - 1, 0, WALL);
    maze.set_cell(last - 1, maze.cols - 1, WALL);
    for i in 0..maze.cols - 2 {
        let value = if i % 2 == 0 { OPEN } else { WALL };
        maze.set_cell(last - 1, i + 1, value);
    }
    for col in 0..maze.cols {
        maze.set_cell(last, col, WALL);
    }
}

/// Convert open cells with no open neighbor back to wall.
/// The pass reads the grid as it mutates it, in row-major order: a cell
/// repaired here can change the neighbor count seen by a later cell in
/// the same pass. Bottom-edge shaping is what leaves these fragments.
fn repair_isolated_cells(maze: &mut Maze) {
    for row in 1..maze.rows - 1 {
        for col in 1..maze.cols - 1 {
            if maze.get_cell(row, col) == OPEN && maze.open_neighbors(row, col) == 0 {
                maze.set_cell(row, col, WALL);
            }
        }
    }
}
