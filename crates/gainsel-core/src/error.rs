use thiserror::Error;

#[derive(Error, Debug)]
pub enum GainSelectionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Array shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("Unsupported waveform rank {rank} (expected 2 or 3)")]
    UnsupportedRank { rank: usize },

    #[error("Unsupported channel dimension {channels} (expected 1 or {expected})")]
    UnsupportedChannelCount { channels: usize, expected: usize },

    #[error("Invalid channel selection: {0}")]
    InvalidSelection(String),

    #[error("Unknown gain channel: {0:?}")]
    UnknownChannel(String),

    #[error("Threshold must be a finite number, got {0}")]
    InvalidThreshold(f64),

    #[error("Invalid waveform file: {0}")]
    InvalidWaveformFile(String),
}

impl GainSelectionError {
    /// True for errors raised while validating selector options.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::UnknownChannel(_) | Self::InvalidThreshold(_)
        )
    }

    /// True for errors raised while validating the waveform tensor layout.
    pub fn is_shape(&self) -> bool {
        matches!(
            self,
            Self::Shape(_)
                | Self::UnsupportedRank { .. }
                | Self::UnsupportedChannelCount { .. }
                | Self::InvalidSelection(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GainSelectionError>;
