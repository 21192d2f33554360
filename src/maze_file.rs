use crate::error::MazeError;
use crate::maze::Maze;
use std::fs;
use std::path::Path;

/// Save the maze in the renderer format: one `{v0,v1,...},` line per row
pub fn save_maze_to_file<P: AsRef<Path>>(path: P, maze: &Maze) -> Result<(), MazeError> {
    let mut contents = String::new();
    for row in 0..maze.rows {
        let values: Vec<String> = maze.row(row).iter().map(|v| v.to_string()).collect();
        contents.push('{');
        contents.push_str(&values.join(","));
        contents.push_str("},\n");
    }
    fs::write(path, contents)?;
    Ok(())
}

/// Load a maze previously written by [`save_maze_to_file`]
pub fn load_maze_from_file<P: AsRef<Path>>(path: P) -> Result<Maze, MazeError> {
    let contents = fs::read_to_string(path)?;
    parse_maze(&contents)
}

/// Parse the row-per-line `{...},` format back into a maze
pub fn parse_maze(contents: &str) -> Result<Maze, MazeError> {
    let mut rows: Vec<Vec<i32>> = Vec::new();

    for (line_no, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let inner = line
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix("},"))
            .ok_or_else(|| {
                MazeError::Parse(format!("line {}: expected `{{...}},`", line_no + 1))
            })?;

        let mut values = Vec::new();
        for token in inner.split(',') {
            let value = token.parse::<i32>().map_err(|_| {
                MazeError::Parse(format!("line {}: invalid cell value `{}`", line_no + 1, token))
            })?;
            values.push(value);
        }

        if let Some(first) = rows.first() {
            if first.len() != values.len() {
                return Err(MazeError::Parse(format!(
                    "line {}: expected {} values, got {}",
                    line_no + 1,
                    first.len(),
                    values.len()
                )));
            }
        }
        rows.push(values);
    }

    if rows.is_empty() {
        return Err(MazeError::Parse("no maze rows found".to_string()));
    }

    Ok(Maze {
        rows: rows.len() as i32,
        cols: rows[0].len() as i32,
        cells: rows.into_iter().flatten().collect(),
    })
}
