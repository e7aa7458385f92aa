pub mod export;
pub mod preview;

pub use export::handle_export;
pub use preview::{handle_preview, CellPreview, FitPreview, PreviewResponse, ScalePreview};
