pub mod config;
pub mod editor_state;

pub use config::AppConfig;
pub use editor_state::{BackgroundImage, EditorState, TextStyle};
