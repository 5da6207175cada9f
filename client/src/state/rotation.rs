//! Auto-advancing index for the testimonials carousel.
//!
//! Every index change bumps `epoch`. A pending timer remembers the epoch it
//! was started for and only advances if nothing moved in the meantime, so a
//! manual pick always stays up for a full interval.

#[cfg(test)]
#[path = "rotation_test.rs"]
mod rotation_test;

/// Delay between automatic advances.
pub const ROTATION_INTERVAL_MS: u64 = 6_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rotation {
    index: usize,
    len: usize,
    epoch: u64,
}

impl Rotation {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { index: 0, len, epoch: 0 }
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.index
    }

    /// Bumped whenever `current()` changes.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn advance(&mut self) {
        if self.len > 0 {
            self.set((self.index + 1) % self.len);
        }
    }

    /// Timer tick for a timer started at `epoch`. Stale ticks are dropped;
    /// returns whether the index moved.
    pub fn advance_if(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch || self.len < 2 {
            return false;
        }
        self.advance();
        true
    }

    /// Dot navigation. Out-of-range indices are ignored.
    pub fn jump_to(&mut self, index: usize) {
        if index < self.len {
            self.set(index);
        }
    }

    fn set(&mut self, index: usize) {
        if index != self.index {
            self.index = index;
            self.epoch += 1;
        }
    }
}
