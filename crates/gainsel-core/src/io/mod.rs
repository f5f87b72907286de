pub mod wvf;

pub use wvf::{read_waveforms, write_waveforms, WaveformHeader, WaveformReader};
