use heatmap::{spread, HeatmapArray, HeatmapBuffer};
use ndarray::Array;
use noise::{NoiseFn, Perlin};

fn main() {
    const N: usize = 200;
    const N_FRAME: usize = 64;

    let perlin = Perlin::new();
    let freq = 8.0;
    let ink = Array::from_shape_fn((N, N), |(i, j)| {
        let p = perlin.get([i as f64 / N as f64 * freq, j as f64 / N as f64 * freq, 0.0]);
        if p > 0.45 {
            (p * 255.0) as u32
        } else {
            0
        }
    });

    let mut buffer = HeatmapBuffer::from_heatmap(HeatmapArray::from_array(ink).unwrap());

    for f in 1..=N_FRAME {
        image_util::save_monochrome("spread", f, buffer.heatmap().view()).unwrap();
        buffer.apply(spread, 0);

        eprint!("\r {} / {}", f, N_FRAME);
    }
}
