//! Glint engine crate.
//!
//! Owns the platform + GPU runtime pieces used by demo binaries: window/event
//! loop, wgpu device and surface management, input, frame timing, logging, and
//! the lit-mesh renderer.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod render;
