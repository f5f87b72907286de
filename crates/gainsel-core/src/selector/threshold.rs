use ndarray::{Array1, ArrayView3, Axis};

use crate::channel::GainChannel;
use crate::consts::DEFAULT_GAIN_THRESHOLD;
use crate::error::{GainSelectionError, Result};
use crate::waveform::{peak_amplitudes, Sample};

use super::GainSelector;

/// Switches a pixel to low gain when its high-gain peak exceeds `threshold`.
///
/// The threshold is in the same amplitude units as the waveform samples.
/// A peak equal to the threshold stays on high gain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThresholdGainSelector {
    threshold: f64,
}

impl ThresholdGainSelector {
    pub fn new(threshold: f64) -> Result<Self> {
        if !threshold.is_finite() {
            return Err(GainSelectionError::InvalidThreshold(threshold));
        }
        Ok(Self { threshold })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Channel chosen for a pixel whose high-gain trace peaks at `peak`.
    pub fn channel_for_peak(&self, peak: f64) -> GainChannel {
        if peak > self.threshold {
            GainChannel::Low
        } else {
            GainChannel::High
        }
    }
}

impl Default for ThresholdGainSelector {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_GAIN_THRESHOLD,
        }
    }
}

impl<T: Sample> GainSelector<T> for ThresholdGainSelector {
    fn name(&self) -> &'static str {
        "threshold"
    }

    fn select_channel(&self, waveforms: ArrayView3<'_, T>) -> Array1<usize> {
        let high = waveforms.index_axis(Axis(0), GainChannel::High.index());
        peak_amplitudes(high).mapv(|peak| self.channel_for_peak(peak).index())
    }
}
