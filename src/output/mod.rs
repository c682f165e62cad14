//! Output rendering and local file writing

pub mod renderer;
pub mod writer;

pub use writer::ClipWriter;
