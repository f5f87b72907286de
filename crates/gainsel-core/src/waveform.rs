use std::fmt;

use ndarray::{s, Array1, Array2, ArrayView1, ArrayView2, ArrayView3, ArrayViewMut1, Axis, Zip};
use num_traits::ToPrimitive;

use crate::consts::{N_GAIN_CHANNELS, PARALLEL_ELEMENT_THRESHOLD};
use crate::error::{GainSelectionError, Result};

/// Numeric type a waveform sample can be stored as (integer or float ADC counts).
pub trait Sample: Copy + PartialOrd + ToPrimitive + Send + Sync + fmt::Debug + 'static {}

impl<T> Sample for T where T: Copy + PartialOrd + ToPrimitive + Send + Sync + fmt::Debug + 'static {}

/// How a waveform tensor is laid out, decided from its shape alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaveformLayout {
    /// `(pixels, samples)`: already a single channel.
    Reduced,
    /// `(1, pixels, samples)`: single channel wrapped in a channel axis.
    SingleChannel,
    /// `(N_GAIN_CHANNELS, pixels, samples)`: a gain decision is needed.
    MultiGain,
}

impl WaveformLayout {
    pub fn of(shape: &[usize]) -> Result<Self> {
        match shape {
            [_, _] => Ok(Self::Reduced),
            [1, _, _] => Ok(Self::SingleChannel),
            [N_GAIN_CHANNELS, _, _] => Ok(Self::MultiGain),
            [channels, _, _] => Err(GainSelectionError::UnsupportedChannelCount {
                channels: *channels,
                expected: N_GAIN_CHANNELS,
            }),
            _ => Err(GainSelectionError::UnsupportedRank { rank: shape.len() }),
        }
    }
}

/// Largest sample of one trace as `f64`.
///
/// NaN samples are skipped; an empty trace peaks at negative infinity.
pub fn trace_peak<T: Sample>(trace: ArrayView1<'_, T>) -> f64 {
    trace
        .iter()
        .filter_map(|v| v.to_f64())
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Per-pixel peak amplitude of a `(pixels, samples)` channel slice.
pub fn peak_amplitudes<T: Sample>(channel: ArrayView2<'_, T>) -> Array1<f64> {
    let zip = Zip::from(channel.rows());
    if channel.len() >= PARALLEL_ELEMENT_THRESHOLD {
        zip.par_map_collect(trace_peak)
    } else {
        zip.map_collect(trace_peak)
    }
}

/// Check that `selection` holds one valid channel index per pixel.
pub fn validate_selection(
    selection: ArrayView1<'_, usize>,
    n_channels: usize,
    n_pixels: usize,
) -> Result<()> {
    if selection.len() != n_pixels {
        return Err(GainSelectionError::InvalidSelection(format!(
            "expected {} entries, got {}",
            n_pixels,
            selection.len()
        )));
    }
    if let Some((pixel, &channel)) = selection
        .iter()
        .enumerate()
        .find(|(_, channel)| **channel >= n_channels)
    {
        return Err(GainSelectionError::InvalidSelection(format!(
            "pixel {} selects channel {} but only {} are available",
            pixel, channel, n_channels
        )));
    }
    Ok(())
}

/// Build a `(pixels, samples)` array taking each pixel's trace from the
/// channel named in `selection`.
pub fn gather_channels<T: Sample>(
    waveforms: ArrayView3<'_, T>,
    selection: ArrayView1<'_, usize>,
) -> Result<Array2<T>> {
    let (n_channels, n_pixels, n_samples) = waveforms.dim();
    if n_channels == 0 {
        return Err(GainSelectionError::UnsupportedChannelCount {
            channels: 0,
            expected: N_GAIN_CHANNELS,
        });
    }
    validate_selection(selection, n_channels, n_pixels)?;

    // Rows start out holding channel 0.
    let mut reduced = waveforms.index_axis(Axis(0), 0).to_owned();
    let zip = Zip::indexed(reduced.rows_mut()).and(selection);
    if n_pixels * n_samples >= PARALLEL_ELEMENT_THRESHOLD {
        zip.par_for_each(|pixel, trace, &channel| {
            copy_trace(&waveforms, pixel, trace, channel)
        });
    } else {
        zip.for_each(|pixel, trace, &channel| copy_trace(&waveforms, pixel, trace, channel));
    }
    Ok(reduced)
}

fn copy_trace<T: Sample>(
    waveforms: &ArrayView3<'_, T>,
    pixel: usize,
    mut trace: ArrayViewMut1<'_, T>,
    channel: usize,
) {
    if channel != 0 {
        trace.assign(&waveforms.slice(s![channel, pixel, ..]));
    }
}
