//! One-way scroll reveal for feature cards.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// One viewport-intersection report for card `index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Intersection {
    pub index: usize,
    pub is_intersecting: bool,
}

/// Which cards have been seen. A revealed card stays revealed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    revealed: Vec<bool>,
}

impl RevealState {
    #[must_use]
    pub fn new(cards: usize) -> Self {
        Self { revealed: vec![false; cards] }
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }

    /// Apply a batch of intersection reports.
    ///
    /// Returns the indices revealed by this batch, which the caller should
    /// stop observing. Non-intersecting reports never un-reveal a card, and
    /// unknown indices are ignored.
    pub fn apply(&mut self, entries: &[Intersection]) -> Vec<usize> {
        let mut newly = Vec::new();
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            if let Some(slot) = self.revealed.get_mut(entry.index)
                && !*slot
            {
                *slot = true;
                newly.push(entry.index);
            }
        }
        newly
    }
}
