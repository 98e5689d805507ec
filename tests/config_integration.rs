//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use starship::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("SHIP_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("SHIP_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_override_motion() {
    std::env::set_var("SHIP_MOTION__DASH_SPEED", "1.25");
    std::env::set_var("SHIP_STARFIELD__SEED", "99");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.motion.dash_speed, 1.25);
    assert_eq!(config.starfield.seed, Some(99));
    std::env::remove_var("SHIP_MOTION__DASH_SPEED");
    std::env::remove_var("SHIP_STARFIELD__SEED");
}

#[test]
#[serial]
fn test_default_file_matches_builtin_defaults() {
    let cwd = std::env::current_dir().unwrap();
    assert!(cwd.join("config/default.toml").exists());

    let config = AppConfig::load_from(cwd.join("config")).unwrap();
    let defaults = AppConfig::default();

    assert_eq!(config.window.width, defaults.window.width);
    assert_eq!(config.window.height, defaults.window.height);
    assert_eq!(config.window.vsync, defaults.window.vsync);
    assert!(!config.window.vsync);
    assert_eq!(config.camera.fov, defaults.camera.fov);
    assert_eq!(config.camera.near, defaults.camera.near);
    assert_eq!(config.camera.far, defaults.camera.far);
    assert_eq!(config.motion.to_motion_params(), defaults.motion.to_motion_params());
    assert_eq!(config.ship.to_hull_params(), defaults.ship.to_hull_params());
    assert_eq!(config.starfield.count, 150);
    assert_eq!(config.timing.frame_delay_ms, 10);
}
