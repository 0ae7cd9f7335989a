//! Host platform utility functions

use std::env;
use std::path::PathBuf;

/// Name of the environment variable pointing at the software root.
pub const SW_ROOT_ENV: &str = "TERRA_SW_ROOT";

/// Get the software root directory.
///
/// This is the value of `TERRA_SW_ROOT` if it is set, otherwise the current working directory.
/// `params/` and `sessions/` live under this root.
pub fn get_sw_root() -> std::io::Result<PathBuf> {
    match env::var_os(SW_ROOT_ENV) {
        Some(root) => Ok(PathBuf::from(root)),
        None => env::current_dir()
    }
}
