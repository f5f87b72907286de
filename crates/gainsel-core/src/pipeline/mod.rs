pub mod config;
mod orchestrator;

pub use orchestrator::{run_pipeline, select_gain, PipelineOutput};
