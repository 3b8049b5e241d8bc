//! Runtime module - winit/platform integration
//!
//! This module contains platform-specific code for running the editor:
//! - `app` - ApplicationHandler and window management
//! - `input` - Keyboard/pointer event to message mapping
//! - `render` - Page compositing into the window surface

pub mod app;
pub mod input;
pub mod render;

pub use app::App;
