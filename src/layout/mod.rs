//! Layout: measuring runs, breaking rows, paginating and resolving positions
//!
//! Everything here is a pure function of the document, the measurer and the
//! page geometry, except [`PositionIndex`], which the renderer fills.

pub mod cursor;
pub mod hit_test;
pub mod measure;
pub mod paginate;
pub mod position;
pub mod rows;

pub use cursor::{cursor_geometry, home_geometry};
pub use hit_test::{Hit, HitTier};
pub use measure::{FixedMeasurer, TextMeasurer, TextMetrics};
pub use paginate::{page_count, paginate, RowPlacement};
pub use position::{PositionIndex, PositionRecord, RunRect};
pub use rows::{compute_rows, MeasuredRun, Row};
