use image::{Rgba, RgbaImage};
use tracing::{debug, info};

use crate::d2::{Heatmap, Size};
use crate::Result;

/// Grayscale image of a heatmap, one pixel per cell.
#[derive(Debug, Clone)]
pub struct Raster {
    pub image: RgbaImage,
    /// Mean channel value over all pixels.
    pub average_brightness: f64,
}

/// Render `heatmap` as opaque grayscale.
///
/// Channels are 8 bit and take the low 8 bits of each intensity, so anything
/// above 255 aliases (300 renders as 44).
pub fn render<H: Heatmap + ?Sized>(heatmap: &H) -> Result<Raster> {
    let size = heatmap.size();
    let Size { width, height } = size;
    debug!("making image {}", size);

    let mut image = RgbaImage::new(width as u32, height as u32);
    let mut sum = 0u64;

    for i in 0..width {
        for j in 0..height {
            let l = heatmap.get(i, j)? as u8;
            sum += u64::from(l);
            image.put_pixel(i as u32, j as u32, Rgba([l, l, l, u8::MAX]));
        }
    }

    let average_brightness = sum as f64 / size.len() as f64;
    info!("average brightness {}", average_brightness);

    Ok(Raster {
        image,
        average_brightness,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::d2::HeatmapArray;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array};

    #[test]
    fn test_uniform() {
        let h = HeatmapArray::from_array(Array::from_elem((4, 3), 128)).unwrap();
        let raster = render(&h).unwrap();

        assert_eq!(raster.image.dimensions(), (4, 3));
        assert!(raster.image.pixels().all(|p| p.0 == [128, 128, 128, 255]));
        assert_abs_diff_eq!(raster.average_brightness, 128.0);
    }

    #[test]
    fn test_intensity_aliases() {
        // only the low 8 bits survive
        let h = HeatmapArray::from_array(array![[300, 256], [511, 255]]).unwrap();
        let raster = render(&h).unwrap();

        assert_eq!(raster.image.get_pixel(0, 0).0, [44, 44, 44, 255]);
        assert_eq!(raster.image.get_pixel(0, 1).0, [0, 0, 0, 255]);
        assert_eq!(raster.image.get_pixel(1, 0).0, [255, 255, 255, 255]);
        assert_eq!(raster.image.get_pixel(1, 1).0, [255, 255, 255, 255]);
        assert_abs_diff_eq!(raster.average_brightness, (44.0 + 0.0 + 255.0 + 255.0) / 4.0);
    }

    #[test]
    fn test_pixel_layout() {
        // x is the first axis, like image columns
        let h = HeatmapArray::from_array(array![[0, 0], [0, 0], [9, 0]]).unwrap();
        let raster = render(&h).unwrap();

        assert_eq!(raster.image.dimensions(), (3, 2));
        assert_eq!(raster.image.get_pixel(2, 0).0, [9, 9, 9, 255]);
    }

    #[test]
    fn test_leaves_input_alone() {
        let h = HeatmapArray::from_array(array![[1, 1000], [70000, 3]]).unwrap();
        let before = h.clone();
        render(&h).unwrap();

        assert_eq!(h, before);
    }
}
