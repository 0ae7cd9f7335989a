//! Terrain route planner executable entry point.
//!
//! # Usage
//!
//! ```text
//! terra_exec <terrain-image> <elevation-file> <waypoint-file> <output-image>
//! ```
//!
//! Plans a route through the waypoints over the terrain, draws it onto a copy of the terrain image
//! saved at `<output-image>`, and prints the route's length in meters on stdout. Logs and a JSON
//! report of the route are written to the session directory.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use color_eyre::{
    eyre::{eyre, WrapErr},
    Report,
};
use log::{debug, info, warn};
use std::env;

// Internal
use terra_lib::{
    map::{CostMap, ElevationMap, TerrainMap},
    nav::{PathPlanner, RoutePlanner},
    params::TerraExecParams,
    render, waypoints,
};
use util::{
    logger::{logger_init, LevelFilter},
    session::Session,
};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

const USAGE: &str =
    "Usage: terra_exec <terrain-image> <elevation-file> <waypoint-file> <output-image>";

/// Name of the route report saved in the session directory.
const ROUTE_REPORT_FILE: &str = "route_report.json";

// ---------------------------------------------------------------------------
// STRUCTS
// ---------------------------------------------------------------------------

/// Input and output paths given on the command line.
#[derive(Debug, PartialEq)]
struct CliArgs<'a> {
    terrain_path: &'a str,
    elevation_path: &'a str,
    waypoint_path: &'a str,
    output_path: &'a str,
}

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Executable main function, entry point.
fn main() -> Result<(), Report> {
    color_eyre::install()?;

    // ---- EARLY INITIALISATION ----

    // Check the invocation before anything is written to the session directory
    let args: Vec<String> = env::args().collect();
    let CliArgs {
        terrain_path,
        elevation_path,
        waypoint_path,
        output_path,
    } = parse_args(&args)?;

    let session =
        Session::new("terra_exec", "sessions").wrap_err("Failed to create the session")?;

    logger_init(LevelFilter::Trace, &session).wrap_err("Failed to initialise logging")?;

    info!("Terrain Route Planner\n");
    info!("Session directory: {:?}\n", session.session_root);
    debug!("CLI arguments: {:?}", args);

    // ---- LOAD PARAMETERS ----

    let params = load_params()?;
    debug!("Parameters: {:#?}", params);

    // ---- LOAD INPUTS ----

    let terrain_image = image::open(terrain_path)
        .wrap_err_with(|| format!("Could not open the terrain image {:?}", terrain_path))?;
    let terrain = TerrainMap::from_image(&terrain_image);

    if terrain.dims() != params.grid {
        return Err(eyre!(
            "The terrain image is {}, expected {}",
            terrain.dims(),
            params.grid
        ));
    }

    terrain
        .validate_palette()
        .wrap_err("The terrain image contains colours with no terrain class")?;

    info!("Terrain map loaded from {:?}", terrain_path);

    let elevation =
        ElevationMap::load(elevation_path, params.grid, params.elevation_trailing_columns)
            .wrap_err_with(|| format!("Could not load the elevation file {:?}", elevation_path))?;

    info!("Elevation map loaded from {:?}", elevation_path);

    let waypoints = waypoints::load(waypoint_path, params.grid)
        .wrap_err_with(|| format!("Could not load the waypoint file {:?}", waypoint_path))?;

    info!(
        "{} waypoints loaded from {:?}",
        waypoints.len(),
        waypoint_path
    );

    // ---- PLAN ----

    let cost_map =
        CostMap::new(&terrain, &elevation).wrap_err("Could not build the cost map")?;

    let route_planner = RoutePlanner::new(PathPlanner::new(params.path_planner.clone()));

    let route = route_planner
        .plan(&cost_map, &waypoints)
        .wrap_err("Route planning failed")?;

    if let Err(e) = session.save(ROUTE_REPORT_FILE, &route) {
        warn!("Could not save the route report: {}", e);
    }

    // ---- OUTPUT ----

    render::render_route(
        &terrain_image,
        &route.segments,
        params.route_colour,
        output_path,
    )
    .wrap_err_with(|| format!("Could not save the route image {:?}", output_path))?;

    info!("Route image saved to {:?}", output_path);

    println!("{}", route.distance_m);

    Ok(())
}

/// Load the executable's parameters, using the defaults if there's no parameter file.
fn load_params() -> Result<TerraExecParams, Report> {
    match util::params::load("terra_exec.toml") {
        Ok(p) => {
            info!("Exec parameters loaded");
            Ok(p)
        }
        Err(e) if e.is_not_found() => {
            warn!("{}, using default parameters", e);
            Ok(TerraExecParams::default())
        }
        Err(e) => Err(e).wrap_err("Could not load the exec parameters"),
    }
}

/// Split the command line, including the executable name, into the four paths.
fn parse_args(args: &[String]) -> Result<CliArgs<'_>, Report> {
    match args {
        [_, terrain, elevation, waypoints, output] => Ok(CliArgs {
            terrain_path: terrain,
            elevation_path: elevation,
            waypoint_path: waypoints,
            output_path: output,
        }),
        _ => Err(eyre!(
            "Expected 4 arguments, found {}\n{}",
            args.len().saturating_sub(1),
            USAGE
        )),
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    fn to_args(args: &[&str]) -> Vec<String> {
        args.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        let args = to_args(&["terra_exec", "terrain.png", "mpp.txt", "path.txt", "out.png"]);

        assert_eq!(
            parse_args(&args).unwrap(),
            CliArgs {
                terrain_path: "terrain.png",
                elevation_path: "mpp.txt",
                waypoint_path: "path.txt",
                output_path: "out.png",
            }
        );
    }

    #[test]
    fn test_parse_args_wrong_count() {
        for args in [
            to_args(&["terra_exec"]),
            to_args(&["terra_exec", "terrain.png", "mpp.txt", "path.txt"]),
            to_args(&["terra_exec", "a", "b", "c", "d", "e"]),
        ]
        .iter()
        {
            let err = parse_args(args).unwrap_err();
            assert!(err.to_string().contains(USAGE));
        }

        // An invocation without even the executable name is still rejected
        assert!(parse_args(&[]).is_err());
    }
}
