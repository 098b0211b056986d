//! Session cost accumulator.

/// Tracks token usage and spend across one session.
///
/// A plain owned value: whoever runs generations owns the tracker and passes
/// it where needed. There is no global instance; callers that share one across
/// tasks must serialize access themselves.
#[derive(Debug, Clone, Default)]
pub struct CostTracker {
    total_tokens: u64,
    total_cost: f64,
    test_count: u32,
}

impl CostTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one completed test run.
    pub fn add_test(&mut self, tokens: u64, cost: f64) {
        self.total_tokens += tokens;
        self.total_cost += cost;
        self.test_count += 1;
    }

    pub fn total_tokens(&self) -> u64 {
        self.total_tokens
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn test_count(&self) -> u32 {
        self.test_count
    }

    /// Resets all counters to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_across_tests() {
        let mut tracker = CostTracker::new();
        tracker.add_test(100, 0.5);
        tracker.add_test(50, 0.25);

        assert_eq!(tracker.total_tokens(), 150);
        assert_eq!(tracker.total_cost(), 0.75);
        assert_eq!(tracker.test_count(), 2);
    }

    #[test]
    fn reset_clears_all_counters() {
        let mut tracker = CostTracker::new();
        tracker.add_test(100, 0.5);
        tracker.reset();

        assert_eq!(tracker.total_tokens(), 0);
        assert_eq!(tracker.total_cost(), 0.0);
        assert_eq!(tracker.test_count(), 0);
    }

    #[test]
    fn totals_never_decrease_while_accumulating() {
        let mut tracker = CostTracker::new();
        let mut last_cost = 0.0;
        let mut last_tokens = 0;
        for i in 0..10 {
            tracker.add_test(i * 10, i as f64 * 0.01);
            assert!(tracker.total_cost() >= last_cost);
            assert!(tracker.total_tokens() >= last_tokens);
            last_cost = tracker.total_cost();
            last_tokens = tracker.total_tokens();
        }
    }
}
