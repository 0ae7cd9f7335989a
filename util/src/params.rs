//! Generic parameters functions

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::de::DeserializeOwned;
use std::fs::read_to_string;
use std::io;
use std::path::Path;
use thiserror::Error;
use toml;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// An error that occurs during loading of a parameter file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Cannot find the software root directory: {0}")]
    SwRootNotFound(io::Error),

    #[error("Cannot load the parmeter file: {0}")]
    FileLoadError(io::Error),

    #[error("Cannot read the parameter file: {0}")]
    DeserialiseError(toml::de::Error)
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl LoadError {
    /// True if the parameter file simply doesn't exist, as opposed to being unreadable or
    /// malformed.
    pub fn is_not_found(&self) -> bool {
        match self {
            LoadError::FileLoadError(e) => e.kind() == io::ErrorKind::NotFound,
            _ => false
        }
    }
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Load a parameter file
///
/// The file path is relative to the "params" directory under the software root (see
/// [`crate::host::get_sw_root`]).
pub fn load<P>(param_file_path: &str) -> Result<P, LoadError> 
where
    P: DeserializeOwned
{
    // Get the params dir
    let mut path = crate::host::get_sw_root()
        .map_err(LoadError::SwRootNotFound)?;
    path.push("params");
    path.push(param_file_path);

    load_from(path)
}

/// Load a parameter file from an explicit path.
pub fn load_from<P, Q>(path: Q) -> Result<P, LoadError>
where
    P: DeserializeOwned,
    Q: AsRef<Path>
{
    // Load the file into a string
    let params_str = read_to_string(path)
        .map_err(LoadError::FileLoadError)?;

    // Parse the string into the parameter struct
    toml::from_str(params_str.as_str())
        .map_err(LoadError::DeserialiseError)
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestParams {
        name: String,
        scale: f64
    }

    #[test]
    fn test_load_from() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.toml");
        std::fs::write(&path, "name = \"grid\"\nscale = 10.29\n").unwrap();

        let params: TestParams = load_from(&path).unwrap();
        assert_eq!(params, TestParams { name: "grid".into(), scale: 10.29 });
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();

        // Missing file
        let missing = load_from::<TestParams, _>(dir.path().join("missing.toml")).unwrap_err();
        assert!(missing.is_not_found());

        // Malformed file
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "name = \n").unwrap();
        let bad = load_from::<TestParams, _>(&path).unwrap_err();
        assert!(matches!(bad, LoadError::DeserialiseError(_)));
        assert!(!bad.is_not_found());
    }
}
