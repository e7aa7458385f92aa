pub mod export;
pub mod scene;

pub use export::{ExportRenderer, EXPORT_FILENAME, PIXEL_DENSITY};
pub use scene::{compose, Scene, CELL_SIZE, GAP_SIZE};
