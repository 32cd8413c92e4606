use std::fmt;

use ndarray::{Array, Array2, ArrayView2};

use crate::{Error, Result};

pub mod buffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<(usize, usize)> for Size {
    fn from((width, height): (usize, usize)) -> Self {
        Size { width, height }
    }
}

/// Fixed-size 2-D field of unsigned intensities.
pub trait Heatmap {
    fn size(&self) -> Size;

    /// Intensity at `(x, y)`, or `Error::OutOfBounds`.
    fn get(&self, x: usize, y: usize) -> Result<u32>;

    /// Overwrite the intensity at `(x, y)`, or `Error::OutOfBounds`.
    fn set(&mut self, x: usize, y: usize, value: u32) -> Result<()>;
}

/// Contiguous `Heatmap`, indexed `[[x, y]]`.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapArray {
    cells: Array2<u32>,
}

impl HeatmapArray {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::from_array(Array::zeros((width, height)))
    }

    /// Wrap `cells`, whose first axis is `x`.
    pub fn from_array(cells: Array2<u32>) -> Result<Self> {
        let size = Size::from(cells.dim());
        if size.is_empty() {
            return Err(Error::EmptyGrid(size));
        }
        Ok(Self { cells })
    }

    pub fn view(&self) -> ArrayView2<'_, u32> {
        self.cells.view()
    }

    pub(crate) fn cells(&self) -> &Array2<u32> {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut Array2<u32> {
        &mut self.cells
    }

    fn check(&self, x: usize, y: usize) -> Result<()> {
        let size = self.size();
        if size.contains(x, y) {
            Ok(())
        } else {
            Err(Error::OutOfBounds { x, y, size })
        }
    }
}

impl Heatmap for HeatmapArray {
    fn size(&self) -> Size {
        Size::from(self.cells.dim())
    }

    fn get(&self, x: usize, y: usize) -> Result<u32> {
        self.check(x, y)?;
        Ok(self.cells[[x, y]])
    }

    fn set(&mut self, x: usize, y: usize, value: u32) -> Result<()> {
        self.check(x, y)?;
        self.cells[[x, y]] = value;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_new_is_zeroed() {
        let h = HeatmapArray::new(7, 3).unwrap();

        assert_eq!(h.size(), Size { width: 7, height: 3 });
        for x in 0..7 {
            for y in 0..3 {
                assert_eq!(h.get(x, y).unwrap(), 0);
            }
        }
    }

    #[test]
    fn test_set_touches_one_cell() {
        let mut h = HeatmapArray::new(4, 5).unwrap();
        h.set(2, 3, 42).unwrap();

        for x in 0..4 {
            for y in 0..5 {
                let expected = if (x, y) == (2, 3) { 42 } else { 0 };
                assert_eq!(h.get(x, y).unwrap(), expected);
            }
        }
    }

    #[test]
    fn test_out_of_bounds() {
        let mut h = HeatmapArray::new(2, 3).unwrap();

        assert!(matches!(
            h.get(2, 0),
            Err(Error::OutOfBounds { x: 2, y: 0, .. })
        ));
        assert!(matches!(h.get(0, 3), Err(Error::OutOfBounds { .. })));
        assert!(matches!(h.set(5, 5, 1), Err(Error::OutOfBounds { .. })));
        // a failed write leaves the field alone
        assert!(h.view().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(
            HeatmapArray::new(0, 4),
            Err(Error::EmptyGrid(Size { width: 0, height: 4 }))
        ));
        assert!(HeatmapArray::new(3, 0).is_err());
    }

    #[test]
    fn test_from_array_axes() {
        // first axis is x
        let h = HeatmapArray::from_array(array![[1, 2], [3, 4], [5, 6]]).unwrap();

        assert_eq!(h.size(), Size { width: 3, height: 2 });
        assert_eq!(h.get(0, 1).unwrap(), 2);
        assert_eq!(h.get(2, 0).unwrap(), 5);
    }
}
