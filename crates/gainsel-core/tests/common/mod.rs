use ndarray::{s, Array3};

/// Two-gain waveforms where the high-gain trace of pixel `p` is constant `p`
/// and the low-gain trace is twice that.
pub fn pixel_index_waveforms(n_pixels: usize, n_samples: usize) -> Array3<i64> {
    Array3::from_shape_fn((2, n_pixels, n_samples), |(c, p, _)| {
        if c == 0 {
            p as i64
        } else {
            2 * p as i64
        }
    })
}

/// Two-gain waveforms with low gain constant 1 and high gain zero except for
/// a single sample of pixel 0, which peaks at `peak`.
pub fn single_peak_waveforms(n_pixels: usize, n_samples: usize, peak: f64) -> Array3<f64> {
    let mut waveforms = Array3::<f64>::zeros((2, n_pixels, n_samples));
    waveforms.slice_mut(s![1, .., ..]).fill(1.0);
    waveforms[[0, 0, 0]] = peak;
    waveforms
}
