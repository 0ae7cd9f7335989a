//! # Waypoints
//!
//! Waypoint files hold one `x y` cell per line, in the order they should be visited. Blank lines
//! are ignored.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::nav::{GridCoord, GridDims};

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum WaypointError {
    #[error("Could not load the waypoint file: {0}")]
    LoadError(std::io::Error),

    #[error("Line {0} of the waypoint file should contain 2 values, found {1}")]
    TokenCount(usize, usize),

    #[error("Line {0} of the waypoint file contains {1:?}, which is not a valid cell index")]
    InvalidCoordinate(usize, String),

    #[error("Waypoint {1} on line {0} is outside the {2} grid")]
    OutsideGrid(usize, GridCoord, GridDims),

    #[error("The waypoint file contains no waypoints")]
    Empty,
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Load the waypoints from the given path, checking they all lie within `dims`.
pub fn load<P: AsRef<Path>>(path: P, dims: GridDims) -> Result<Vec<GridCoord>, WaypointError> {
    let text = fs::read_to_string(path).map_err(WaypointError::LoadError)?;

    parse(&text, dims)
}

/// Parse the text of a waypoint file, checking all waypoints lie within `dims`.
pub fn parse(text: &str, dims: GridDims) -> Result<Vec<GridCoord>, WaypointError> {
    let mut waypoints = Vec::new();

    for (line_idx, line) in text.lines().enumerate() {
        let line_num = line_idx + 1;

        let tokens: Vec<&str> = line.split_whitespace().collect();

        match tokens.len() {
            0 => continue,
            2 => (),
            n => return Err(WaypointError::TokenCount(line_num, n)),
        }

        let x = parse_index(line_num, tokens[0])?;
        let y = parse_index(line_num, tokens[1])?;
        let coord = GridCoord::new(x, y);

        if !dims.contains(coord) {
            return Err(WaypointError::OutsideGrid(line_num, coord, dims));
        }

        waypoints.push(coord);
    }

    if waypoints.is_empty() {
        return Err(WaypointError::Empty);
    }

    Ok(waypoints)
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

fn parse_index(line_num: usize, token: &str) -> Result<usize, WaypointError> {
    token
        .parse()
        .map_err(|_| WaypointError::InvalidCoordinate(line_num, token.to_string()))
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse() {
        let text = "230 327\n\n276 279\n  303 240  \n";

        let waypoints = parse(text, GridDims::default()).unwrap();

        assert_eq!(
            waypoints,
            vec![
                GridCoord::new(230, 327),
                GridCoord::new(276, 279),
                GridCoord::new(303, 240),
            ]
        );
    }

    #[test]
    fn test_parse_errors() {
        let dims = GridDims::new(10, 10);

        assert!(matches!(
            parse("1 2\n3 4 5\n", dims),
            Err(WaypointError::TokenCount(2, 3))
        ));
        assert!(matches!(
            parse("1\n", dims),
            Err(WaypointError::TokenCount(1, 1))
        ));
        assert!(matches!(
            parse("1 2\n-3 4\n", dims),
            Err(WaypointError::InvalidCoordinate(2, ref t)) if t == "-3"
        ));
        assert!(matches!(
            parse("1.5 2\n", dims),
            Err(WaypointError::InvalidCoordinate(1, _))
        ));
        assert!(matches!(
            parse("1 2\n\n4 10\n", dims),
            Err(WaypointError::OutsideGrid(3, c, _)) if c == GridCoord::new(4, 10)
        ));
        assert!(matches!(parse("\n  \n", dims), Err(WaypointError::Empty)));
    }

    #[test]
    fn test_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("path.txt");
        std::fs::write(&path, "0 0\n4 4\n").unwrap();

        let waypoints = load(&path, GridDims::new(5, 5)).unwrap();
        assert_eq!(waypoints, vec![GridCoord::new(0, 0), GridCoord::new(4, 4)]);

        assert!(matches!(
            load(dir.path().join("missing.txt"), GridDims::new(5, 5)),
            Err(WaypointError::LoadError(_))
        ));
    }
}
