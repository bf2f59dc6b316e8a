use memmap2::{Advice, Mmap, MmapOptions};
use std::fmt;
use std::fs::File;
use std::io;
use std::ops::Deref;
use std::path::Path;

/// Expected access pattern for the mapped file, forwarded to the kernel.
///
/// `Sequential` fits a single-worker scan; `Random` fits many workers
/// touching disjoint regions concurrently. Either way this is a hint and
/// never affects correctness.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AccessPattern {
    Sequential,
    Random,
}

/// Failure to establish the mapped buffer. Both variants are fatal to a run.
#[derive(Debug)]
pub enum OpenError {
    /// The file could not be opened or stat'd.
    Io(io::Error),
    /// The mapping syscall failed.
    Map(io::Error),
}

impl fmt::Display for OpenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenError::Io(e) => write!(f, "opening input file: {e}"),
            OpenError::Map(e) => write!(f, "mapping input file: {e}"),
        }
    }
}

impl std::error::Error for OpenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OpenError::Io(e) | OpenError::Map(e) => Some(e),
        }
    }
}

/// A read-only, byte-addressable view over the whole input file.
///
/// Owns both the mapping and the underlying `File`, so every slice handed
/// out stays valid until the `Buffer` itself is dropped.
#[derive(Debug)]
pub struct Buffer {
    map: Mmap,
    _file: File,
}

impl Buffer {
    pub fn open<P: AsRef<Path>>(path: P, pattern: AccessPattern) -> Result<Self, OpenError> {
        let file = File::open(path).map_err(OpenError::Io)?;
        let map = unsafe { MmapOptions::new().map(&file) }.map_err(OpenError::Map)?;

        let advice = match pattern {
            AccessPattern::Sequential => Advice::Sequential,
            AccessPattern::Random => Advice::Random,
        };
        // Hint only; ignore failures.
        let _ = map.advise(advice);

        Ok(Buffer { map, _file: file })
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.map
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Deref for Buffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.map
    }
}
