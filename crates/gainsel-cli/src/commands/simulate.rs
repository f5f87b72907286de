use std::path::PathBuf;

use anyhow::{ensure, Result};
use clap::Args;
use gainsel_core::channel::GainChannel;
use gainsel_core::io::write_waveforms;
use ndarray::Array3;

#[derive(Args)]
pub struct SimulateArgs {
    /// Output waveform file
    #[arg(short, long, default_value = "simulated.wvf")]
    pub output: PathBuf,

    /// Number of camera pixels
    #[arg(long, default_value = "1855")]
    pub pixels: usize,

    /// Samples per waveform
    #[arg(long, default_value = "40")]
    pub samples: usize,

    /// Every Nth pixel receives a bright pulse that saturates high gain
    #[arg(long, default_value = "10")]
    pub bright_every: usize,

    /// High-gain to low-gain amplification ratio
    #[arg(long, default_value = "16.0")]
    pub gain_ratio: f32,

    /// High-gain ADC ceiling
    #[arg(long, default_value = "4095.0")]
    pub saturation: f32,
}

/// Pulse amplitude (in high-gain counts) injected into `pixel`.
fn pulse_amplitude(pixel: usize, bright_every: usize) -> f32 {
    if pixel % bright_every == 0 {
        20_000.0
    } else {
        50.0 + (pixel % 50) as f32 * 20.0
    }
}

/// Unit-height Gaussian pulse centred in the readout window.
fn pulse_shape(sample: usize, n_samples: usize) -> f32 {
    let centre = n_samples as f32 / 2.0;
    let width = 2.0f32;
    let x = (sample as f32 - centre) / width;
    (-0.5 * x * x).exp()
}

pub fn run(args: &SimulateArgs) -> Result<()> {
    ensure!(args.bright_every > 0, "--bright-every must be at least 1");
    ensure!(args.gain_ratio > 0.0, "--gain-ratio must be positive");

    let shape = (2, args.pixels, args.samples);
    let waveforms = Array3::from_shape_fn(shape, |(channel, pixel, sample)| {
        let signal = pulse_amplitude(pixel, args.bright_every) * pulse_shape(sample, args.samples);
        if channel == GainChannel::High.index() {
            signal.min(args.saturation)
        } else {
            signal / args.gain_ratio
        }
    });

    write_waveforms(&args.output, waveforms.view().into_dyn())?;
    let bright = args.pixels.div_ceil(args.bright_every);
    println!(
        "Wrote {} pixels x {} samples ({} bright) to {}",
        args.pixels,
        args.samples,
        bright,
        args.output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bright_pixels_exceed_dim_ones() {
        assert!(pulse_amplitude(0, 10) > pulse_amplitude(1, 10));
        assert!(pulse_amplitude(49, 10) < 4095.0);
    }

    #[test]
    fn pulse_peaks_at_centre() {
        assert_eq!(pulse_shape(20, 40), 1.0);
        assert!(pulse_shape(10, 40) < 0.01);
    }
}
