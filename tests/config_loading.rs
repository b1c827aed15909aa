use std::path::Path;

use glam::{IVec2, Vec2};

use cspace::{Plan, PlanError, PlannerConfig};

fn fixture(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn loads_planner_yaml() {
    let config = PlannerConfig::load(fixture("planner.yaml")).expect("config should load");

    assert_eq!(config.abs_min_radius, 0.25);
    assert_eq!(config.max_radius, 0.5);
    assert_eq!(config.distance_penalty, 2.0);
    assert_eq!(config.hysteresis_factor, 0.4);

    let grid = config.grid.expect("grid section");
    assert_eq!((grid.width, grid.height), (40, 20));
    assert_eq!(grid.origin, [-1.0, -0.5]);
    assert_eq!(grid.scale, 0.05);
}

#[test]
fn plan_from_loaded_config() {
    let config = PlannerConfig::load(fixture("planner.yaml")).expect("config should load");
    let plan = Plan::from_config(&config).expect("plan should build");

    assert_eq!(plan.width(), 40);
    assert_eq!(plan.height(), 20);
    assert_eq!(plan.kernel().width(), 21);
    assert_eq!(plan.distance_penalty(), 2.0);
    assert_eq!(plan.world_to_cell(Vec2::new(-1.0, -0.5)).unwrap(), IVec2::ZERO);
    assert!(plan.check_world_point_in_bounds(0.9, 0.45));
}

#[test]
fn defaults_apply_to_missing_fields() {
    let config = PlannerConfig::load(fixture("defaults.yaml")).expect("config should load");
    assert_eq!(config.max_radius, 2.0);
    assert_eq!(config.abs_min_radius, 0.5);
    assert!(config.grid.is_none());
}

#[test]
fn missing_file_is_io_error() {
    let result = PlannerConfig::load(fixture("does_not_exist.yaml"));
    assert!(matches!(result, Err(PlanError::Io(_))));
}
