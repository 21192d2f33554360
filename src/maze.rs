/// Open (walkable) corridor cell.
pub const OPEN: i32 = 0;
/// Wall cell.
pub const WALL: i32 = 1;
/// First treasure marker, placed at some dead ends.
pub const TREASURE_A: i32 = 3;
/// Second treasure marker, placed at some dead ends.
pub const TREASURE_B: i32 = 4;

/// Orthogonal neighbor offsets as (row, col) deltas
pub const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Maze grid storing one integer cell code per cell
/// Cell values: 0=open corridor, 1=wall, 3/4=treasure markers
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    pub rows: i32,
    pub cols: i32,
    pub cells: Vec<i32>,
}

impl Maze {
    /// Create a new maze with all cells set to wall (1)
    pub fn new(rows: i32, cols: i32) -> Self {
        Maze {
            rows,
            cols,
            cells: vec![WALL; (rows * cols) as usize],
        }
    }

    /// Convert (row, col) coordinates to cell index
    pub fn get_id(&self, row: i32, col: i32) -> i32 {
        col + row * self.cols
    }

    /// Get cell value at (row, col)
    pub fn get_cell(&self, row: i32, col: i32) -> i32 {
        if row < 0 || row >= self.rows || col < 0 || col >= self.cols {
            return WALL; // Out of bounds is treated as wall
        }
        self.cells[self.get_id(row, col) as usize]
    }

    /// Set cell value at (row, col)
    pub fn set_cell(&mut self, row: i32, col: i32, value: i32) {
        if row >= 0 && row < self.rows && col >= 0 && col < self.cols {
            let id = self.get_id(row, col);
            self.cells[id as usize] = value;
        }
    }

    /// Get one row of cells as a slice
    pub fn row(&self, row: i32) -> &[i32] {
        let start = (row * self.cols) as usize;
        &self.cells[start..start + self.cols as usize]
    }

    /// Count orthogonal neighbors of (row, col) that are open corridor cells
    pub fn open_neighbors(&self, row: i32, col: i32) -> i32 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|(dr, dc)| self.get_cell(row + dr, col + dc) == OPEN)
            .count() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_maze_is_all_wall() {
        let maze = Maze::new(4, 6);
        assert_eq!(maze.cells.len(), 24);
        assert!(maze.cells.iter().all(|&c| c == WALL));
    }

    #[test]
    fn test_get_set_cell() {
        let mut maze = Maze::new(4, 6);
        maze.set_cell(2, 3, OPEN);
        assert_eq!(maze.get_cell(2, 3), OPEN);
        assert_eq!(maze.get_cell(2, 2), WALL);
    }

    #[test]
    fn test_out_of_bounds_reads_as_wall() {
        let maze = Maze::new(4, 6);
        assert_eq!(maze.get_cell(-1, 0), WALL);
        assert_eq!(maze.get_cell(0, 6), WALL);
        assert_eq!(maze.get_cell(4, 0), WALL);
    }

    #[test]
    fn test_open_neighbors() {
        let mut maze = Maze::new(5, 5);
        maze.set_cell(2, 2, OPEN);
        assert_eq!(maze.open_neighbors(2, 2), 0);
        maze.set_cell(1, 2, OPEN);
        maze.set_cell(2, 3, OPEN);
        assert_eq!(maze.open_neighbors(2, 2), 2);
        // Treasure cells do not count as open
        maze.set_cell(3, 2, TREASURE_A);
        assert_eq!(maze.open_neighbors(2, 2), 2);
    }

    #[test]
    fn test_row_slice() {
        let mut maze = Maze::new(3, 4);
        maze.set_cell(1, 0, OPEN);
        maze.set_cell(1, 2, TREASURE_B);
        assert_eq!(maze.row(1), &[OPEN, WALL, TREASURE_B, WALL]);
    }
}
