pub mod d2;
pub mod render;

pub use d2::buffer::{spread, HeatmapBuffer, Neighbors};
pub use d2::{Heatmap, HeatmapArray, Size};
pub use render::{render, Raster};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("({x}, {y}) is outside of a {size} heatmap")]
    OutOfBounds { x: usize, y: usize, size: Size },
    #[error("heatmaps differ in size: {0} vs {1}")]
    DimensionMismatch(Size, Size),
    #[error("heatmap must be at least 1x1, got {0}")]
    EmptyGrid(Size),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Spread `boundary` into an empty `width` x `height` heatmap for one step and render it.
pub fn poster(width: usize, height: usize, boundary: u32) -> Result<Raster> {
    let mut buffer = HeatmapBuffer::new(width, height)?;
    buffer.apply(spread, boundary);
    render(buffer.heatmap())
}
