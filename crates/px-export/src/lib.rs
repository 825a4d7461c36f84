//! Output side of pixscii: glyph rasterization, path resolution, persistence.

pub mod font;
pub mod path;
pub mod rasterizer;
pub mod writer;

pub use path::{resolve, OutputDestination, OutputFormat};
pub use rasterizer::GlyphAtlas;
