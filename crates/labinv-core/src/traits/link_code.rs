//! Link-code encoding and memoization traits.

use bytes::Bytes;

use crate::result::AppResult;

/// Encodes a string into a scannable raster image.
///
/// Implementations apply a fixed encoding profile: the same content always
/// yields byte-identical output.
pub trait LinkEncoder: Send + Sync + std::fmt::Debug + 'static {
    /// Encode `content` into image bytes (PNG).
    fn encode(&self, content: &str) -> AppResult<Bytes>;
}

/// Memoizing store of encoded link codes keyed by the exact content string.
///
/// Failures never propagate: an encoding error yields `None` and nothing is
/// cached, so the caller can render a degraded view and retry later.
pub trait LinkCodeCache: Send + Sync + std::fmt::Debug + 'static {
    /// Return the cached image for `content`, encoding and storing it on a miss.
    fn get_or_create(&self, content: &str) -> Option<Bytes>;

    /// Whether an image for `content` is already cached.
    fn contains(&self, content: &str) -> bool;

    /// Number of cached entries.
    fn len(&self) -> usize;

    /// Whether the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
