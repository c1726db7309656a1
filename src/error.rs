use std::io;

use thiserror::Error;

use crate::config::MIN_GRID_EDGE;

/// Errors the terminal harness can hit before or during a session.
///
/// The engine itself is total and never returns errors; everything here is
/// setup and terminal I/O.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),

    #[error("board {width}x{height} is too small; both edges must be at least {MIN_GRID_EDGE}")]
    GridTooSmall { width: u16, height: u16 },
}

/// Validates CLI-provided board dimensions against the minimum playable size.
pub fn validate_grid(width: u16, height: u16) -> Result<(), AppError> {
    if width < MIN_GRID_EDGE || height < MIN_GRID_EDGE {
        return Err(AppError::GridTooSmall { width, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{AppError, validate_grid};

    #[test]
    fn grid_validation_enforces_the_minimum_edge() {
        assert!(validate_grid(20, 16).is_ok());
        assert!(validate_grid(10, 10).is_ok());

        assert!(matches!(
            validate_grid(9, 16),
            Err(AppError::GridTooSmall { width: 9, .. })
        ));
        assert!(matches!(
            validate_grid(20, 4),
            Err(AppError::GridTooSmall { height: 4, .. })
        ));
    }
}
