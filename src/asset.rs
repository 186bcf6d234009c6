//! Opaque asset handles.
//!
//! Photo-library style sources (media store entries, content-addressed
//! blobs) reduce to "something that can hand over its encoded bytes". The
//! generator only ever reads an asset once, synchronously, and never
//! retains it.

use std::io;
use std::path::PathBuf;

/// A read-only handle to an encoded image stored somewhere else.
pub trait Asset {
    /// The asset's full encoded byte content.
    fn encoded_bytes(&self) -> io::Result<Vec<u8>>;
}

/// The obvious filesystem-backed asset.
pub struct FileAsset {
    path: PathBuf,
}

impl FileAsset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Asset for FileAsset {
    fn encoded_bytes(&self) -> io::Result<Vec<u8>> {
        std::fs::read(&self.path)
    }
}
