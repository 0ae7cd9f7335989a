//! # Terrain route planner parameters

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::Deserialize;

use crate::{
    map::DEFAULT_TRAILING_COLUMNS,
    nav::{GridDims, PathPlannerParams},
    render::DEFAULT_ROUTE_COLOUR,
};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Parameters of the `terra_exec` executable, normally loaded from `params/terra_exec.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TerraExecParams {
    /// Expected size of the terrain and elevation inputs.
    pub grid: GridDims,

    /// Number of columns to drop from the end of each row of the elevation file.
    pub elevation_trailing_columns: usize,

    /// Colour the route is drawn in.
    pub route_colour: [u8; 3],

    pub path_planner: PathPlannerParams,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl Default for TerraExecParams {
    fn default() -> Self {
        Self {
            grid: GridDims::default(),
            elevation_trailing_columns: DEFAULT_TRAILING_COLUMNS,
            route_colour: DEFAULT_ROUTE_COLOUR,
            path_planner: PathPlannerParams::default(),
        }
    }
}

// ------------------------------------------------------------------------------------------------
// TESTS
// ------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::nav::CellScale;

    #[test]
    fn test_load_params() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("terra_exec.toml");
        std::fs::write(
            &path,
            r#"
elevation_trailing_columns = 0
route_colour = [255, 0, 0]

[grid]
width = 5
height = 5

[path_planner]
heuristic_weight = 0.25
impassable_friction = 1000.0

[path_planner.cell_scale]
x_m = 1.0
y_m = 2.0
"#,
        )
        .unwrap();

        let params: TerraExecParams = util::params::load_from(&path).unwrap();

        assert_eq!(params.grid, GridDims::new(5, 5));
        assert_eq!(params.elevation_trailing_columns, 0);
        assert_eq!(params.route_colour, [255, 0, 0]);
        assert_eq!(params.path_planner.heuristic_weight, 0.25);
        assert_eq!(params.path_planner.impassable_friction, Some(1000.0));
        assert_eq!(params.path_planner.cell_scale, CellScale::new(1.0, 2.0));
    }

    #[test]
    fn test_default_params() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.toml");
        std::fs::write(&path, "").unwrap();

        let params: TerraExecParams = util::params::load_from(&path).unwrap();

        assert_eq!(params, TerraExecParams::default());
        assert_eq!(params.grid, GridDims::new(395, 500));
        assert_eq!(params.elevation_trailing_columns, 5);
        assert_eq!(params.path_planner.heuristic_weight, 1.0);
        assert_eq!(params.path_planner.impassable_friction, None);
    }

    #[test]
    fn test_repo_params_file() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("params")
            .join("terra_exec.toml");

        let params: TerraExecParams = util::params::load_from(&path).unwrap();

        assert_eq!(params, TerraExecParams::default());
    }
}
