use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage, RgbaImage};
use ndarray::ArrayView2;

/// Write `img` as a PNG, creating missing parent directories.
pub fn save_rgba(path: impl AsRef<Path>, img: &RgbaImage) -> anyhow::Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    img.save(path)?;

    Ok(())
}

pub fn save_monochrome(prefix: &str, index: usize, x: ArrayView2<u32>) -> anyhow::Result<()> {
    let shape = x.dim();

    let mut img = RgbImage::new(shape.0 as u32, shape.1 as u32);

    for i in 0..shape.0 {
        for j in 0..shape.1 {
            let l = x[[i, j]].min(255) as u8;
            img.put_pixel(i as u32, j as u32, Rgb([l, l, l]));
        }
    }

    fs::create_dir_all("out")?;
    img.save(format!("out/{}_{:06}.png", prefix, index))?;

    Ok(())
}
