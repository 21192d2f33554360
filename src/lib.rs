pub mod config;
pub mod error;
pub mod generator;
pub mod maze;
pub mod maze_file;

pub use error::MazeError;
pub use generator::MazeGenerator;
pub use maze::Maze;
pub use maze_file::{load_maze_from_file, parse_maze, save_maze_to_file};
