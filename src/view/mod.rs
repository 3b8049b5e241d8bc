//! View: drawing surfaces, fonts and the page renderer

pub mod fonts;
pub mod frame;
pub mod recording;
pub mod render;
pub mod surface;

pub use fonts::FontBook;
pub use frame::{blend_colors, PixelFactory, PixelSurface};
pub use recording::{DrawOp, RecordingFactory, RecordingSurface};
pub use render::{render_padding_indicators, render_pages, render_row};
pub use surface::{DrawSurface, Page, SurfaceFactory};
