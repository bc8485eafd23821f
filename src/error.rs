//! Error taxonomy
//!
//! Two fatal error classes need to stay distinguishable to the caller:
//! configuration errors (bad descriptors, unreadable inputs) and packing
//! failure (the glyph set does not fit the declared texture). Everything
//! else flows through `anyhow` context chains.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Malformed group descriptor or unusable input resource
    #[error("configuration error: {0}")]
    Config(String),

    /// Glyph rectangles do not fit in the declared texture bin
    #[error("packing failure: {0}")]
    Packing(#[from] crate::pack::PackError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }
}
