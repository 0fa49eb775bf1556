//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types. The
//! runtime translates platform events into `Key` transitions; applications
//! query held keys per frame.

mod state;

pub use state::{InputState, Key};
