//! Errors returned by the operations on a [`RadixTree`](crate::RadixTree).

/// Error kinds of the radix tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    /// The address or the prefix length is malformed, or the prefix length exceeds the width of
    /// the address family. This is decided from the input alone, never from the tree state.
    #[error("bad IP address or mask")]
    BadIp,
    /// A non-overwriting insert targeted a prefix that already carries a value.
    #[error("node busy")]
    NodeBusy,
    /// The prefix does not exist in the tree, or it exists but carries no value.
    #[error("no such node")]
    NotFound,
}

/// Result type of the radix tree operations.
pub type Result<T> = std::result::Result<T, Error>;
