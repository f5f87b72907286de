use ndarray::ArrayViewD;
use tracing::info;

use crate::channel::GainChannel;
use crate::error::Result;
use crate::io::{write_waveforms, WaveformReader};
use crate::selector::{GainSelection, SelectorConfig};
use crate::waveform::Sample;

use super::config::PipelineConfig;

/// Summary of a finished pipeline run.
#[derive(Clone, Debug, PartialEq)]
pub struct PipelineOutput {
    pub input_shape: Vec<usize>,
    pub output_shape: (usize, usize),
    pub high_gain_pixels: usize,
    pub low_gain_pixels: usize,
    /// Input had no gain axis to choose from.
    pub passthrough: bool,
}

/// Build the configured selector and apply it to an in-memory tensor.
pub fn select_gain<T: Sample>(
    waveforms: ArrayViewD<'_, T>,
    selector: &SelectorConfig,
) -> Result<GainSelection<T>> {
    let gs = selector.build::<T>()?;
    gs.apply_with_selection(waveforms)
}

/// Read the input file, reduce it to one gain channel and write the result.
pub fn run_pipeline(config: &PipelineConfig) -> Result<PipelineOutput> {
    let reader = WaveformReader::open(&config.input)?;
    let input_shape = reader.header.shape.clone();
    info!(shape = ?input_shape, input = %config.input.display(), "Reading waveforms");

    let waveforms = reader.read()?;
    let selection = select_gain(waveforms.view(), &config.selector)?;
    let output = PipelineOutput {
        input_shape,
        output_shape: selection.waveforms.dim(),
        high_gain_pixels: selection.count(GainChannel::High),
        low_gain_pixels: selection.count(GainChannel::Low),
        passthrough: selection.is_passthrough(),
    };
    info!(
        selector = %config.selector,
        high_gain = output.high_gain_pixels,
        low_gain = output.low_gain_pixels,
        passthrough = output.passthrough,
        "Gain selection complete"
    );

    write_waveforms(&config.output, selection.waveforms.view().into_dyn())?;
    info!(output = %config.output.display(), "Selected waveforms saved");
    Ok(output)
}
