use crate::{CounterStore, Result, SequenceNumber};

/// An in-memory counter store. Starts absent unless seeded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    next: Option<SequenceNumber>,
}

impl MemoryStore {
    /// A store that already exists and will hand out `next` first.
    pub const fn with_next(next: SequenceNumber) -> Self {
        Self { next: Some(next) }
    }

    pub const fn value(&self) -> Option<SequenceNumber> {
        self.next
    }
}

impl CounterStore for MemoryStore {
    fn load(&mut self) -> Result<Option<SequenceNumber>> {
        Ok(self.next)
    }

    fn store(&mut self, next: SequenceNumber) -> Result<()> {
        self.next = Some(next);
        Ok(())
    }
}
