//! Specular falloff demo: eight cubes in a 4x2 grid, each with a doubling
//! shininess exponent, lit by one Phong-style light per cube.
//!
//! No CLI arguments, no configuration; escape (or closing the window) quits.

mod app;
mod camera;
mod geometry;
mod scene;

use anyhow::Result;
use winit::dpi::LogicalSize;

use glint_engine::device::GpuInit;
use glint_engine::logging::{init_logging, LoggingConfig};
use glint_engine::window::{Runtime, RuntimeConfig};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: "Specular Lighting Demo".to_string(),
        initial_size: LogicalSize::new(800.0, 600.0),
    };

    // Window/GPU init failure is the one fatal path: the error propagates
    // out of main and the process exits non-zero with a diagnostic.
    Runtime::run(config, GpuInit::default(), app::DemoApp::new())
}
