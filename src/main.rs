use mazegen::config::Config;
use mazegen::{save_maze_to_file, MazeGenerator};

fn main() {
    let config = Config::load();

    let mut generator = match config.maze.seed {
        Some(seed) => MazeGenerator::with_seed(seed),
        None => MazeGenerator::new(),
    };

    let maze = match generator.generate(config.maze.width, config.maze.height) {
        Ok(maze) => maze,
        Err(e) => {
            eprintln!("Maze generation failed: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = save_maze_to_file(&config.output.path, &maze) {
        eprintln!("Failed to save maze: {}", e);
        std::process::exit(1);
    }

    println!(
        "Labyrinth has been successfully saved to {}.",
        config.output.path
    );
}
