use thiserror::Error;

/// Errors produced while generating a maze or reading/writing maze files
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("invalid maze dimensions {width}x{height}: width and height must be positive")]
    InvalidDimension { width: i32, height: i32 },

    #[error("maze file I/O failed: {0}")]
    Output(#[from] std::io::Error),

    #[error("malformed maze file: {0}")]
    Parse(String),
}
