//! Per-pixel gain channel selection.
//!
//! A [`GainSelector`] decides, for every pixel of a `(channel, pixel, sample)`
//! waveform tensor, which gain channel's trace is kept. The provided
//! [`GainSelector::apply`] handles the shape contract shared by all
//! strategies: rank-2 input and a size-1 channel axis pass through untouched,
//! a full gain axis goes through `select_channel` and a per-pixel gather.

pub mod config;
pub mod manual;
pub mod threshold;

pub use config::SelectorConfig;
pub use manual::ManualGainSelector;
pub use threshold::ThresholdGainSelector;

use ndarray::{Array1, Array2, ArrayView3, ArrayViewD, Axis, Ix2, Ix3};
use tracing::debug;

use crate::channel::GainChannel;
use crate::error::Result;
use crate::waveform::{gather_channels, Sample, WaveformLayout};

/// Strategy choosing one gain channel per pixel.
pub trait GainSelector<T: Sample>: Send + Sync {
    /// Short strategy name used in logs and summaries.
    fn name(&self) -> &'static str;

    /// Choose a channel index for each pixel of a `(channels, pixels, samples)`
    /// tensor. Must return `pixels` entries, each in `0..channels`.
    fn select_channel(&self, waveforms: ArrayView3<'_, T>) -> Array1<usize>;

    /// Reduce a rank-2 or rank-3 waveform tensor to `(pixels, samples)`.
    fn apply(&self, waveforms: ArrayViewD<'_, T>) -> Result<Array2<T>> {
        Ok(self.apply_with_selection(waveforms)?.waveforms)
    }

    /// Like [`apply`](GainSelector::apply), also returning the per-pixel
    /// channel choice when one was made.
    fn apply_with_selection(&self, waveforms: ArrayViewD<'_, T>) -> Result<GainSelection<T>> {
        match WaveformLayout::of(waveforms.shape())? {
            WaveformLayout::Reduced => {
                let reduced = waveforms.into_dimensionality::<Ix2>()?;
                Ok(GainSelection::passthrough(reduced.to_owned()))
            }
            WaveformLayout::SingleChannel => {
                let reduced = waveforms
                    .index_axis_move(Axis(0), 0)
                    .into_dimensionality::<Ix2>()?;
                Ok(GainSelection::passthrough(reduced.to_owned()))
            }
            WaveformLayout::MultiGain => {
                let waveforms = waveforms.into_dimensionality::<Ix3>()?;
                let channels = self.select_channel(waveforms.view());
                let reduced = gather_channels(waveforms.view(), channels.view())?;
                let selection = GainSelection {
                    waveforms: reduced,
                    channels: Some(channels),
                };
                debug!(
                    selector = self.name(),
                    pixels = selection.n_pixels(),
                    high_gain = selection.count(GainChannel::High),
                    low_gain = selection.count(GainChannel::Low),
                    "Gain channels selected"
                );
                Ok(selection)
            }
        }
    }
}

/// Reduced waveforms together with the channel each pixel was taken from.
#[derive(Clone, Debug, PartialEq)]
pub struct GainSelection<T> {
    /// `(pixels, samples)` waveforms.
    pub waveforms: Array2<T>,
    /// Per-pixel channel index, `None` when the input had a single channel.
    pub channels: Option<Array1<usize>>,
}

impl<T> GainSelection<T> {
    fn passthrough(waveforms: Array2<T>) -> Self {
        Self {
            waveforms,
            channels: None,
        }
    }

    pub fn is_passthrough(&self) -> bool {
        self.channels.is_none()
    }

    pub fn n_pixels(&self) -> usize {
        self.waveforms.nrows()
    }

    /// Number of pixels read out from `channel` (0 for pass-through input).
    pub fn count(&self, channel: GainChannel) -> usize {
        self.channels
            .as_ref()
            .map_or(0, |c| {
                c.iter()
                    .filter(|&&idx| GainChannel::from_index(idx) == Some(channel))
                    .count()
            })
    }
}
