use brotli::enc::BrotliEncoderParams;
use log::{debug, info};
use std::io::Cursor;

use crate::error::{Error, Result};

pub trait Compressor {
    fn name(&self) -> &str;
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>>;
}

/// Brotli with library defaults: quality 11, 4 MiB window, generic mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct Brotli;

impl Brotli {
    pub fn max_compressed_size(input_len: usize) -> usize {
        brotli::enc::encode::BrotliEncoderMaxCompressedSize(input_len)
    }

    fn params() -> BrotliEncoderParams {
        BrotliEncoderParams {
            quality: 11,
            lgwin: 22,
            ..Default::default()
        }
    }
}

impl Compressor for Brotli {
    fn name(&self) -> &str {
        "brotli"
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>> {
        let bound = Self::max_compressed_size(input.len());
        let mut out = Vec::with_capacity(bound);
        brotli::enc::BrotliCompress(&mut Cursor::new(input), &mut out, &Self::params())
            .map_err(|err| Error::compression(self.name(), err))?;
        if out.len() > bound {
            debug!(
                "brotli output of {} bytes exceeds the {} byte bound",
                out.len(),
                bound
            );
        }
        Ok(out)
    }
}

/// Inverse of [`Brotli::compress`].
pub fn decompress(input: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    brotli::BrotliDecompress(&mut Cursor::new(input), &mut out)
        .map_err(|err| Error::compression("brotli", err))?;
    Ok(out)
}

/// A configured compression step. Identity when disabled.
#[derive(Debug, Clone)]
pub struct CompressionStage<C = Brotli> {
    enabled: bool,
    compressor: C,
}

/// Configures the default Brotli stage.
pub fn stage(enabled: bool) -> CompressionStage<Brotli> {
    CompressionStage::with_compressor(enabled, Brotli)
}

impl<C: Compressor> CompressionStage<C> {
    pub fn with_compressor(enabled: bool, compressor: C) -> Self {
        Self {
            enabled,
            compressor,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn apply(&self, bytes: Vec<u8>) -> Result<Vec<u8>> {
        if !self.enabled {
            return Ok(bytes);
        }
        let out = self.compressor.compress(&bytes)?;
        info!(
            "Compressed {} bytes to {} bytes with {}",
            bytes.len(),
            out.len(),
            self.compressor.name()
        );
        Ok(out)
    }
}
