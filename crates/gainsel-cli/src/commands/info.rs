use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use gainsel_core::io::WaveformReader;
use gainsel_core::waveform::WaveformLayout;

#[derive(Args)]
pub struct InfoArgs {
    /// Input waveform file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let reader = WaveformReader::open(&args.file)?;
    let shape = &reader.header.shape;

    println!("File:        {}", args.file.display());
    println!("Shape:       {:?}", shape);

    match WaveformLayout::of(shape) {
        Ok(WaveformLayout::MultiGain) => {
            println!("Layout:      {} gain channels", shape[0]);
            println!("Pixels:      {}", shape[1]);
            println!("Samples:     {}", shape[2]);
        }
        Ok(WaveformLayout::SingleChannel) => {
            println!("Layout:      single channel (wrapped)");
            println!("Pixels:      {}", shape[1]);
            println!("Samples:     {}", shape[2]);
        }
        Ok(WaveformLayout::Reduced) => {
            println!("Layout:      single channel");
            println!("Pixels:      {}", shape[0]);
            println!("Samples:     {}", shape[1]);
        }
        Err(e) => println!("Layout:      unsupported ({})", e),
    }

    let total_mb = reader.header.data_byte_size()? as f64 / (1024.0 * 1024.0);
    println!("Data size:   {:.2} MB", total_mb);

    Ok(())
}
