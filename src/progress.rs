//! Progress accounting for one orchestration run.

use tracing::debug;

/// Monotonic count of texts translated so far in one run.
///
/// Reset per run by the orchestrator and mutated only by it; readers see the
/// final tally after `translate_all` returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressCounter {
    completed: usize,
    total: usize,
}

impl ProgressCounter {
    pub fn new(total: usize) -> Self {
        Self {
            completed: 0,
            total,
        }
    }

    /// Record `count` more translated texts.
    pub fn advance(&mut self, count: usize) {
        self.completed += count;
        debug!("translated {}/{} texts", self.completed, self.total);
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_complete(&self) -> bool {
        self.completed >= self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_counter_starts_at_zero() {
        let counter = ProgressCounter::new(10);
        assert_eq!(counter.completed(), 0);
        assert_eq!(counter.total(), 10);
        assert!(!counter.is_complete());
    }

    #[test]
    fn test_advance_accumulates() {
        let mut counter = ProgressCounter::new(10);
        counter.advance(4);
        counter.advance(6);
        assert_eq!(counter.completed(), 10);
        assert!(counter.is_complete());
    }

    #[test]
    fn test_zero_total_is_immediately_complete() {
        let counter = ProgressCounter::new(0);
        assert!(counter.is_complete());
    }
}
