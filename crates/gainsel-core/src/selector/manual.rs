use ndarray::{Array1, ArrayView3, Axis};

use crate::channel::GainChannel;
use crate::error::Result;
use crate::waveform::Sample;

use super::GainSelector;

/// Always reads every pixel from one configured channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ManualGainSelector {
    channel: GainChannel,
}

impl ManualGainSelector {
    pub fn new(channel: GainChannel) -> Self {
        Self { channel }
    }

    /// Build from a channel name such as `"HIGH"` or `"low"`.
    pub fn from_name(name: &str) -> Result<Self> {
        Ok(Self::new(name.parse()?))
    }

    pub fn channel(&self) -> GainChannel {
        self.channel
    }
}

impl<T: Sample> GainSelector<T> for ManualGainSelector {
    fn name(&self) -> &'static str {
        "manual"
    }

    fn select_channel(&self, waveforms: ArrayView3<'_, T>) -> Array1<usize> {
        Array1::from_elem(waveforms.len_of(Axis(1)), self.channel.index())
    }
}
