/// Sizes of the sequential batches for a run: `concurrency` each, with a
/// smaller final batch of `total % concurrency` when that is nonzero.
#[derive(Debug, Clone, Copy)]
pub struct BatchPlan {
    remaining: u64,
    batch_size: usize,
}

impl BatchPlan {
    #[must_use]
    pub const fn new(total: u64, batch_size: usize) -> Self {
        Self {
            remaining: total,
            batch_size,
        }
    }
}

impl Iterator for BatchPlan {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 || self.batch_size == 0 {
            return None;
        }
        let size = usize::try_from(self.remaining).map_or(self.batch_size, |remaining| {
            remaining.min(self.batch_size)
        });
        self.remaining = self
            .remaining
            .saturating_sub(u64::try_from(size).unwrap_or(u64::MAX));
        Some(size)
    }
}
