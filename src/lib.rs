//! Starship - procedural spaceship and starfield demo
//!
//! Library half of the application: configuration and the systems the
//! binary's event loop drives.

pub mod config;
pub mod systems;
