/// Number of gain channels a multi-gain digitizer provides (HIGH, LOW).
pub const N_GAIN_CHANNELS: usize = 2;

/// Minimum element count (pixels * samples) to process pixels in parallel.
pub const PARALLEL_ELEMENT_THRESHOLD: usize = 65_536;

/// Default peak amplitude above which the threshold selector switches to low gain.
pub const DEFAULT_GAIN_THRESHOLD: f64 = 1000.0;

/// Magic bytes at the start of a waveform file.
pub const WVF_MAGIC: &[u8; 14] = b"GAINSEL-WAVEFM";

/// Fixed header size before the dimension list: magic (14) + rank (4).
pub const WVF_PREAMBLE_SIZE: usize = 18;

/// Highest tensor rank a waveform file may declare.
pub const WVF_MAX_RANK: usize = 3;
