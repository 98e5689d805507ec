//! Starship - procedural spaceship and starfield demo
//!
//! Draws a starfield and a ship that cruises towards the camera, then dashes
//! past it, at a fixed frame cadence.

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::WindowId,
};

use starship::config::AppConfig;
use starship::systems::{RenderError, RenderSystem, SimulationSystem, WindowSystem};
use starship_core::{Scene, Starfield};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    /// Stars and ship model, built once
    scene: Scene,
    simulation: SimulationSystem,
    window: Option<WindowSystem>,
    renderer: Option<RenderSystem>,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let starfield = match config.starfield.seed {
            Some(seed) => Starfield::seeded(config.starfield.count, seed),
            None => Starfield::from_entropy(config.starfield.count),
        };
        log::info!("Generated {} stars", starfield.len());

        let scene = Scene::new(starfield, &config.ship.to_hull_params())
            .with_pitch(config.ship.pitch_degrees);
        let simulation = SimulationSystem::new(config.motion.to_motion_params());

        Self {
            config,
            scene,
            simulation,
            window: None,
            renderer: None,
        }
    }

    /// Draw the current state, advance the ship, then wait out the frame delay
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(renderer)) = (&self.window, &mut self.renderer) else {
            return;
        };

        let batches = self.scene.compose(self.simulation.motion());
        match renderer.render_frame(&batches) {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => renderer.reconfigure(),
            Err(RenderError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                event_loop.exit();
                return;
            }
            Err(e) => log::warn!("{}", e),
        }

        self.simulation.update();

        if self.config.debug.show_title_stats {
            let motion = self.simulation.motion();
            window.update_title(motion.position, motion.phase());
        }

        std::thread::sleep(self.config.timing.frame_delay());
        window.request_redraw();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = WindowSystem::create(event_loop, &self.config.window)
            .unwrap_or_else(|e| panic!("{}", e));

        let renderer = RenderSystem::new(
            window.window().clone(),
            self.config.rendering.clone(),
            self.config.camera.clone(),
            self.config.window.vsync,
        )
        .unwrap_or_else(|e| panic!("{}", e));

        let (width, height) = renderer.size();
        log::info!("Renderer ready at {}x{}", width, height);

        window.request_redraw();
        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested after {} frames", self.simulation.frame());
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::RedrawRequested => self.frame(event_loop),

            _ => {}
        }
    }
}

fn main() {
    let config = AppConfig::load();

    let log_level = config
        .as_ref()
        .map(|c| c.debug.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::info!("Starting Starship");

    let config = config.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        AppConfig::default()
    });

    let event_loop = EventLoop::new().expect("Failed to create event loop");
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app).expect("Event loop error");
}
