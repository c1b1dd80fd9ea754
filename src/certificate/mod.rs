//! Presentation artifacts produced alongside a run

/// Sampling circuit diagram
pub mod circuit;
/// Bitmap text face
pub mod font;
/// Run certificate layout
pub mod renderer;
