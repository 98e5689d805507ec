//! Integration tests for the per-frame pipeline
//!
//! Runs the same steps as the event loop minus the GPU: compose the scene,
//! tessellate it, advance the simulation.

use starship::config::AppConfig;
use starship::systems::SimulationSystem;
use starship_core::{Scene, Starfield};
use starship_render::{RenderableGeometry, Topology};

fn build(config: &AppConfig) -> (Scene, SimulationSystem) {
    let starfield = Starfield::seeded(config.starfield.count, 2024);
    let scene = Scene::new(starfield, &config.ship.to_hull_params())
        .with_pitch(config.ship.pitch_degrees);
    let simulation = SimulationSystem::new(config.motion.to_motion_params());
    (scene, simulation)
}

#[test]
fn test_frames_until_dash() {
    let config = AppConfig::default();
    let (scene, mut simulation) = build(&config);

    let mut dash_frame = None;
    for _ in 0..300 {
        let geometry = RenderableGeometry::from_batches(&scene.compose(simulation.motion()));
        assert_eq!(geometry.commands[0].topology, Topology::PointList);
        assert_eq!(geometry.commands[0].vertex_count, 150);

        if simulation.update().dash_started {
            dash_frame = Some(simulation.frame());
        }
    }

    // Cruise covers -5 -> -2 in steps of 0.02
    let dash_frame = dash_frame.expect("ship should have started dashing");
    assert!((150..=151).contains(&dash_frame));
    assert!(simulation.motion().position > 0.0);
}

#[test]
fn test_geometry_size_is_stable() {
    let config = AppConfig::default();
    let (scene, mut simulation) = build(&config);

    let first = RenderableGeometry::from_batches(&scene.compose(simulation.motion()));
    for _ in 0..50 {
        simulation.update();
        let frame = RenderableGeometry::from_batches(&scene.compose(simulation.motion()));
        assert_eq!(frame.vertex_count(), first.vertex_count());
        assert_eq!(frame.commands, first.commands);
    }
}
