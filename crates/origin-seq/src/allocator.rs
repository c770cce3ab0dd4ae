use crate::{CounterStore, Error, Mutex, MutexGuard, Result, SequenceNumber};
use std::sync::Arc;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// The value handed out when the store does not exist yet.
pub const FIRST_SEQUENCE: SequenceNumber = 1;

/// A lock-based sequence allocator suitable for multi-threaded environments.
///
/// The store is wrapped in an [`Arc<Mutex<_>>`] and the lock is held across
/// the entire load, increment and store, so two concurrent callers can never
/// observe the same value. Cloning the allocator shares the lock and the
/// store.
///
/// ## Recommended When
/// - Several request handlers label documents from one process
/// - Numbering must survive restarts (use [`FileStore`])
///
/// ## See Also
/// - [`FileStore`]
/// - [`MemoryStore`]
///
/// [`FileStore`]: crate::FileStore
/// [`MemoryStore`]: crate::MemoryStore
pub struct LockSequenceAllocator<S>
where
    S: CounterStore,
{
    pub(crate) state: Arc<Mutex<S>>,
}

impl<S> LockSequenceAllocator<S>
where
    S: CounterStore,
{
    /// Creates an allocator that owns `store`.
    ///
    /// Nothing is read until the first allocation, so a missing or corrupted
    /// store is only reported by [`Self::allocate_next`].
    ///
    /// # Example
    ///
    /// ```
    /// use origin_seq::{FileStore, LockSequenceAllocator};
    ///
    /// let dir = std::env::temp_dir().join("origin-seq-doc");
    /// std::fs::create_dir_all(&dir).unwrap();
    /// let path = dir.join("counter.txt");
    /// let _ = std::fs::remove_file(&path);
    ///
    /// let allocator = LockSequenceAllocator::new(FileStore::new(&path));
    /// assert_eq!(allocator.allocate_next().unwrap(), 1);
    /// assert_eq!(std::fs::read_to_string(&path).unwrap(), "2");
    /// ```
    pub fn new(store: S) -> Self {
        Self {
            state: Arc::new(Mutex::new(store)),
        }
    }

    /// Hands out the next sequence number.
    ///
    /// If the store is absent it is created: `1` is returned and `2` is
    /// written. Otherwise the stored value `N` is returned and `N + 1` is
    /// written back.
    ///
    /// # Errors
    ///
    /// - [`Error::Parse`] if the store content is corrupted
    /// - [`Error::Io`] if the store cannot be read or written
    /// - [`Error::Exhausted`] if the counter cannot be incremented
    /// - [`Error::LockPoisoned`] if another caller panicked inside the lock
    ///   (std mutex only)
    ///
    /// A failed allocation leaves the store untouched.
    #[cfg_attr(feature = "tracing", instrument(level = "debug", skip(self), err))]
    pub fn allocate_next(&self) -> Result<SequenceNumber> {
        let mut store = self.lock()?;
        let current = store.load()?.unwrap_or(FIRST_SEQUENCE);
        let next = current.checked_add(1).ok_or(Error::Exhausted)?;
        store.store(next)?;
        Ok(current)
    }

    /// Returns the number the next allocation will hand out without consuming
    /// it.
    pub fn peek(&self) -> Result<SequenceNumber> {
        let mut store = self.lock()?;
        Ok(store.load()?.unwrap_or(FIRST_SEQUENCE))
    }

    fn lock(&self) -> Result<MutexGuard<'_, S>> {
        #[cfg(feature = "parking-lot")]
        {
            Ok(self.state.lock())
        }
        #[cfg(not(feature = "parking-lot"))]
        {
            Ok(self.state.lock()?)
        }
    }
}

impl<S> Clone for LockSequenceAllocator<S>
where
    S: CounterStore,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<S> core::fmt::Debug for LockSequenceAllocator<S>
where
    S: CounterStore,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LockSequenceAllocator").finish_non_exhaustive()
    }
}
