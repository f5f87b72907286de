use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use gainsel_core::channel::GainChannel;
use gainsel_core::consts::DEFAULT_GAIN_THRESHOLD;
use gainsel_core::pipeline::config::PipelineConfig;
use gainsel_core::pipeline::run_pipeline;
use gainsel_core::selector::SelectorConfig;

use crate::summary::print_selection_summary;

#[derive(Clone, Copy, ValueEnum)]
pub enum MethodArg {
    Manual,
    Threshold,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ChannelArg {
    High,
    Low,
}

impl From<ChannelArg> for GainChannel {
    fn from(arg: ChannelArg) -> Self {
        match arg {
            ChannelArg::High => GainChannel::High,
            ChannelArg::Low => GainChannel::Low,
        }
    }
}

#[derive(Args)]
pub struct SelectArgs {
    /// Input waveform file
    pub file: PathBuf,

    /// Pipeline config file (TOML); its selector replaces the flags below
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Selection method
    #[arg(long, value_enum, default_value = "threshold")]
    pub method: MethodArg,

    /// Channel used by the manual method
    #[arg(long, value_enum, default_value = "high")]
    pub channel: ChannelArg,

    /// High-gain peak above which the threshold method switches to low gain
    #[arg(long, default_value_t = DEFAULT_GAIN_THRESHOLD)]
    pub threshold: f64,

    /// Output waveform file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &SelectArgs) -> Result<()> {
    let mut config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid pipeline config")?
    } else {
        build_config_from_args(args)
    };
    config.input = args.file.clone();
    if let Some(ref output) = args.output {
        config.output = output.clone();
    }
    tracing::debug!(config = ?config, "Resolved pipeline config");

    let output = run_pipeline(&config)
        .with_context(|| format!("Gain selection failed for {}", config.input.display()))?;
    print_selection_summary(&config, &output);
    Ok(())
}

fn build_config_from_args(args: &SelectArgs) -> PipelineConfig {
    let selector = match args.method {
        MethodArg::Manual => SelectorConfig::Manual {
            channel: args.channel.into(),
        },
        MethodArg::Threshold => SelectorConfig::Threshold {
            threshold: args.threshold,
        },
    };
    PipelineConfig {
        selector,
        ..PipelineConfig::default()
    }
}
