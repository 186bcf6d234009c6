//! Error type shared by every entry point.
//!
//! Two failure kinds cover the whole contract: the source could not be read
//! or decoded, or the requested side bound is out of range for the source.
//! Every failure is terminal for that call — no retries, no fallback images.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThumbnailError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("invalid max side {side}: must be positive and at most the source's longer side ({longer})")]
    InvalidSide { side: u32, longer: u32 },
}
