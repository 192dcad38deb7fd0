/// Convenience type for results returned by the collections in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors signaled by the collections in this crate. A rejected operation leaves the collection
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("index {index} is out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("appended elements must all be greater than the existing elements")]
    OutOfOrder,
    #[error("heap capacity must be at least one")]
    ZeroCapacity,
}
