use log::{debug, info, warn};
use serde::Serialize;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::{Error, Result};

/// Bytes read from a source together with the length it announced up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBytes {
    pub bytes: Vec<u8>,
    pub expected: u64,
}

/// Non-fatal: the source delivered a different number of bytes than announced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeMismatch {
    pub expected: u64,
    pub actual: u64,
}

impl SourceBytes {
    pub fn mismatch(&self) -> Option<SizeMismatch> {
        let actual = self.bytes.len() as u64;
        (actual != self.expected).then_some(SizeMismatch {
            expected: self.expected,
            actual,
        })
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Reads `path` bounded by its size at open time.
pub fn read_file(path: &Path) -> Result<SourceBytes> {
    if !path.exists() {
        return Err(Error::NotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|err| Error::io(path, err))?;
    let expected = file.metadata().map_err(|err| Error::io(path, err))?.len();
    info!("File size: {} bytes", expected);

    let source = read_from(file, expected).map_err(|err| Error::io(path, err))?;
    if let Some(mismatch) = source.mismatch() {
        warn!(
            "Read {} bytes from {}, expected {}",
            mismatch.actual,
            path.display(),
            mismatch.expected
        );
    }
    Ok(source)
}

/// Reads at most `expected` bytes from `reader`.
pub fn read_from<R: Read>(reader: R, expected: u64) -> io::Result<SourceBytes> {
    let mut bytes = Vec::with_capacity(usize::try_from(expected).unwrap_or(0));
    reader.take(expected).read_to_end(&mut bytes)?;
    debug!("read {} of {} expected bytes", bytes.len(), expected);
    Ok(SourceBytes { bytes, expected })
}
