use log::info;
use serde::Serialize;
use std::path::PathBuf;

use crate::compress::{self, CompressionStage, Compressor};
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::render;
use crate::source::{self, SizeMismatch};

/// What a finished conversion produced.
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    pub input: PathBuf,
    pub output: PathBuf,
    pub name: String,
    pub compressed: bool,
    pub source_bytes: u64,
    pub array_bytes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_mismatch: Option<SizeMismatch>,
}

pub fn run(config: &PipelineConfig) -> Result<Conversion> {
    run_with(config, &compress::stage(config.compress()))
}

/// Byte source, compression stage, renderer, in that order. Nothing is
/// written unless every earlier step succeeded.
pub fn run_with<C: Compressor>(
    config: &PipelineConfig,
    stage: &CompressionStage<C>,
) -> Result<Conversion> {
    let source = source::read_file(config.input())?;
    let size_mismatch = source.mismatch();
    let source_bytes = source.bytes.len() as u64;

    let bytes = stage.apply(source.into_bytes())?;
    let text = render::render(&bytes, config.name());
    render::write_artifact(config.output(), &text)?;
    info!(
        "Wrote {} ({} bytes as '{}')",
        config.output().display(),
        bytes.len(),
        config.name()
    );

    Ok(Conversion {
        input: config.input().to_path_buf(),
        output: config.output().to_path_buf(),
        name: config.name().to_string(),
        compressed: stage.is_enabled(),
        source_bytes,
        array_bytes: bytes.len(),
        size_mismatch,
    })
}
