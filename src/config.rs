//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`SHIP_SECTION__KEY`)
//!
//! Every default matches the stock demo, so running without any config
//! file reproduces it exactly.

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use starship_core::{HullParams, MotionParams};
use std::path::Path;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Ship motion configuration
    #[serde(default)]
    pub motion: MotionConfig,
    /// Starfield configuration
    #[serde(default)]
    pub starfield: StarfieldConfig,
    /// Ship geometry configuration
    #[serde(default)]
    pub ship: ShipConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Frame timing configuration
    #[serde(default)]
    pub timing: TimingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`SHIP_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // SHIP_MOTION__DASH_SPEED=1.0 -> motion.dash_speed = 1.0
        figment = figment.merge(Env::prefixed("SHIP_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in physical pixels
    pub width: u32,
    /// Window height in physical pixels
    pub height: u32,
    /// Allow the user to resize the window
    pub resizable: bool,
    /// Wait for the display refresh on present (frame pacing otherwise comes
    /// from `timing.frame_delay_ms` alone)
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Starship".to_string(),
            width: 800,
            height: 600,
            resizable: false,
            vsync: false,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 45.0,
            near: 0.1,
            far: 50.0,
        }
    }
}

/// Ship motion configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Depth offset on the first frame
    pub start_position: f64,
    /// Step per frame before the dash
    pub cruise_speed: f64,
    /// Position at or beyond which the dash begins
    pub dash_threshold: f64,
    /// Step per frame once dashing
    pub dash_speed: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        let params = MotionParams::default();
        Self {
            start_position: params.start_position,
            cruise_speed: params.cruise_speed,
            dash_threshold: params.dash_threshold,
            dash_speed: params.dash_speed,
        }
    }
}

impl MotionConfig {
    /// Convert to the motion rule parameters
    pub fn to_motion_params(&self) -> MotionParams {
        MotionParams {
            start_position: self.start_position,
            cruise_speed: self.cruise_speed,
            dash_threshold: self.dash_threshold,
            dash_speed: self.dash_speed,
        }
    }
}

/// Starfield configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    /// Number of stars
    pub count: usize,
    /// Fixed RNG seed; a fresh field is rolled on each run when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            count: 150,
            seed: None,
        }
    }
}

/// Ship geometry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
    /// Hull radius along X
    pub radius_x: f32,
    /// Hull radius along Y
    pub radius_y: f32,
    /// Hull thickness
    pub depth: f32,
    /// Hull ring subdivisions
    pub sides: usize,
    /// Rotation about X applied before moving the ship, in degrees
    pub pitch_degrees: f32,
}

impl Default for ShipConfig {
    fn default() -> Self {
        let hull = HullParams::default();
        Self {
            radius_x: hull.radius_x,
            radius_y: hull.radius_y,
            depth: hull.depth,
            sides: hull.sides,
            pitch_degrees: -90.0,
        }
    }
}

impl ShipConfig {
    /// Convert to hull geometry parameters
    pub fn to_hull_params(&self) -> HullParams {
        HullParams {
            radius_x: self.radius_x,
            radius_y: self.radius_y,
            depth: self.depth,
            sides: self.sides,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

/// Frame timing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Fixed sleep after presenting each frame, in milliseconds
    pub frame_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self { frame_delay_ms: 10 }
    }
}

impl TimingConfig {
    /// Frame delay as a duration
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Default log filter when `RUST_LOG` is unset (error, warn, info, debug, trace)
    pub log_level: String,
    /// Show position and phase in the window title
    pub show_title_stats: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            show_title_stats: true,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
