//! Matrix Forge - confusion-matrix heatmap editor
//!
//! Renders configurable N×N confusion-matrix heatmaps and exports them as
//! PNG images. This library exposes modules for integration testing.

pub mod api;
pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod server;
