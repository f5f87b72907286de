use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GainSelectionError;

/// Readout gain channel of a multi-gain digitizer.
///
/// The discriminant is the channel's index into the leading axis of a
/// `(channel, pixel, sample)` waveform tensor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GainChannel {
    /// Sensitive channel, precise at low signal, saturates early.
    #[default]
    High = 0,
    /// Attenuated channel that stays linear for bright signals.
    Low = 1,
}

impl GainChannel {
    pub const ALL: [GainChannel; 2] = [GainChannel::High, GainChannel::Low];

    /// Index of this channel along the channel axis.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            GainChannel::High => "HIGH",
            GainChannel::Low => "LOW",
        }
    }
}

impl fmt::Display for GainChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GainChannel {
    type Err = GainSelectionError;

    /// Parse a channel name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ch| ch.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GainSelectionError::UnknownChannel(s.to_string()))
    }
}

impl TryFrom<String> for GainChannel {
    type Error = GainSelectionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GainChannel> for String {
    fn from(channel: GainChannel) -> Self {
        channel.name().to_string()
    }
}
