use crate::env::Points;

/// Append-only record of points earned by confirmed hits.
///
/// The ledger is the single source of truth for the score. The total is
/// derived from `history` on every read, so a deserialized ledger cannot
/// carry a total that disagrees with its entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreLedger {
    history: Vec<Points>,
}

impl ScoreLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one hit worth `points`.
    pub fn record(&mut self, points: Points) {
        self.history.push(points);
    }

    /// Increments in the order they were earned.
    pub fn history(&self) -> &[Points] {
        &self.history
    }

    /// Sum of every recorded increment.
    pub fn total(&self) -> u64 {
        self.history.iter().copied().map(u64::from).sum()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
