pub mod channel;
pub mod consts;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod selector;
pub mod waveform;
