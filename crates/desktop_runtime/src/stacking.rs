//! Monotonic z-index allocation.

/// Hands out strictly increasing z-indices.
///
/// Values are never decremented or reused, so every open window holds a distinct z-index and the
/// most recently allocated one is always on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZIndexCounter {
    next: u32,
}

impl ZIndexCounter {
    pub const fn new(seed: u32) -> Self {
        Self { next: seed }
    }

    /// Value the next allocation will return.
    pub const fn peek(&self) -> u32 {
        self.next
    }

    pub fn allocate(&mut self) -> u32 {
        let value = self.next;
        self.next = self.next.saturating_add(1);
        value
    }
}
