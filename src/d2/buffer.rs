use tracing::{debug, debug_span, trace};

use super::{Heatmap, HeatmapArray, Size};
use crate::{Error, Result};

/// Cardinal neighbours of a cell: left, right, up, down.
pub type Neighbors = [u32; 4];

/// Ink spreads into a cell from its first nonzero neighbour, scanning left, right, up, down.
/// A cell with no inked neighbour keeps `value`.
pub fn spread(value: u32, neighbors: Neighbors) -> u32 {
    match neighbors.iter().find(|&&v| v != 0) {
        Some(&v) => {
            trace!(from = value, to = v, "spread");
            v
        }
        None => value,
    }
}

/// Two equally sized heatmaps. One holds the current state, the other is
/// scratch space for the next step.
#[derive(Debug, Clone)]
pub struct HeatmapBuffer {
    slots: [HeatmapArray; 2],
    current: usize,
}

impl HeatmapBuffer {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Ok(Self::from_heatmap(HeatmapArray::new(width, height)?))
    }

    /// Start from `heatmap` with zeroed scratch space.
    pub fn from_heatmap(heatmap: HeatmapArray) -> Self {
        let Size { width, height } = heatmap.size();
        let scratch = HeatmapArray {
            cells: ndarray::Array::zeros((width, height)),
        };
        Self {
            slots: [heatmap, scratch],
            current: 0,
        }
    }

    pub fn from_grids(current: HeatmapArray, scratch: HeatmapArray) -> Result<Self> {
        if current.size() != scratch.size() {
            return Err(Error::DimensionMismatch(current.size(), scratch.size()));
        }
        Ok(Self {
            slots: [current, scratch],
            current: 0,
        })
    }

    pub fn size(&self) -> Size {
        self.heatmap().size()
    }

    /// The most recently completed state.
    pub fn heatmap(&self) -> &HeatmapArray {
        &self.slots[self.current]
    }

    /// Scratch space. After `apply` it holds the state from before the step.
    pub fn buffer(&self) -> &HeatmapArray {
        &self.slots[1 - self.current]
    }

    fn swap(&mut self) {
        self.current ^= 1;
    }

    /// One synchronous step: every cell is recomputed by `rule` from the current
    /// state only, written to scratch, then the two swap roles.
    ///
    /// Neighbours outside the heatmap read as `boundary`.
    pub fn apply<F>(&mut self, rule: F, boundary: u32)
    where
        F: Fn(u32, Neighbors) -> u32,
    {
        let span = debug_span!("apply", size = %self.size(), boundary);
        let _enter = span.enter();

        let [a, b] = &mut self.slots;
        let (src, dst) = if self.current == 0 {
            (&*a, b)
        } else {
            (&*b, a)
        };

        let v = src.cells();
        let (w, h) = v.dim();

        dst.cells_mut()
            .indexed_iter_mut()
            .for_each(|((i, j), e)| {
                let left = if i > 0 { v[[i - 1, j]] } else { boundary };
                let right = if i + 1 < w { v[[i + 1, j]] } else { boundary };
                let up = if j > 0 { v[[i, j - 1]] } else { boundary };
                let down = if j + 1 < h { v[[i, j + 1]] } else { boundary };

                *e = rule(v[[i, j]], [left, right, up, down]);
            });

        let changed = v
            .iter()
            .zip(dst.cells().iter())
            .filter(|(old, new)| old != new)
            .count();
        debug!(changed, "step done");

        self.swap();
    }
}
