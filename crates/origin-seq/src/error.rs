use core::num::ParseIntError;

/// A result type defaulting to the allocator [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants the allocator can emit.
///
/// Every variant is fatal to the allocation that produced it. Nothing is
/// retried and a failed allocation never modifies the store.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The store holds something other than a positive base-10 integer.
    /// `content` is cut to [`MAX_REPORTED_CONTENT`](crate::MAX_REPORTED_CONTENT)
    /// characters.
    #[error("counter store is corrupted: {content:?} is not a sequence number")]
    Parse {
        content: String,
        #[source]
        source: Option<ParseIntError>,
    },

    /// Reading or writing the backing store failed.
    #[error("counter store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The counter reached the end of the integer range.
    #[error("sequence space exhausted")]
    Exhausted,

    /// The operation failed because the lock was **poisoned**.
    ///
    /// This occurs when a thread panics while holding the lock. When the
    /// `parking-lot` feature is enabled, mutexes do **not** poison, so this
    /// variant is not available.
    #[cfg_attr(docsrs, doc(cfg(not(feature = "parking-lot"))))]
    #[cfg(not(feature = "parking-lot"))]
    #[error("counter lock poisoned")]
    LockPoisoned,
}

#[cfg(not(feature = "parking-lot"))]
use crate::mutex::{MutexGuard, PoisonError};
#[cfg(not(feature = "parking-lot"))]
impl<T> From<PoisonError<MutexGuard<'_, T>>> for Error {
    fn from(_: PoisonError<MutexGuard<'_, T>>) -> Self {
        Self::LockPoisoned
    }
}
