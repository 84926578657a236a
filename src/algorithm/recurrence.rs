//! Memoized recurrence for the Poisson Binomial distribution
//!
//! `E(k, j)` is the probability of exactly `k` successes among the first `j`
//! trials. Trial `j` either succeeds with probability `p[j-1]` or fails:
//!
//! ```text
//! E(k, j) = (1 - p[j-1]) * E(k, j-1) + p[j-1] * E(k-1, j-1)
//! ```
//!
//! Every state depends only on states with a smaller `j`, so the recursion
//! terminates, and the memo table reduces the work for one query to O(n²).

use crate::algorithm::memo::{MemoStats, MemoTable};

/// Recurrence engine bound to one probability vector and one memo table
///
/// Built fresh for each top-level query and dropped when the query returns.
/// The probability vector must hold exactly one entry per trial.
#[derive(Debug)]
pub struct PoissonBinomialRecurrence<'a> {
    probabilities: &'a [f64],
    table: MemoTable,
}

impl<'a> PoissonBinomialRecurrence<'a> {
    /// Create an engine with an empty table sized to the probability vector
    pub fn new(probabilities: &'a [f64]) -> Self {
        Self {
            probabilities,
            table: MemoTable::new(probabilities.len()),
        }
    }

    /// Total number of trials described by the probability vector
    pub const fn trials(&self) -> usize {
        self.probabilities.len()
    }

    /// Probability of exactly `k` successes among the first `j` trials
    ///
    /// `k == -1` and `k == j + 1` are sentinels evaluating to 0, as is any
    /// other `k` outside `0..=j`. `j` must not exceed the number of trials.
    pub fn probability(&mut self, k: isize, j: usize) -> f64 {
        if k == -1 {
            return 0.0;
        }
        // More successes than trials considered so far
        if k > j as isize {
            return 0.0;
        }
        if k == 0 && j == 0 {
            return 1.0;
        }

        let Ok(row) = usize::try_from(k) else {
            return 0.0;
        };
        if let Some(stored) = self.table.lookup(row, j) {
            return stored;
        }

        // Every state with j == 0 has been answered above
        let Some(&success) = self.probabilities.get(j - 1) else {
            return 0.0;
        };
        let value = (1.0 - success).mul_add(
            self.probability(k, j - 1),
            success * self.probability(k - 1, j - 1),
        );

        self.table.record(row, j, value)
    }

    /// Probability of exactly `k` successes across all trials
    pub fn outcome_probability(&mut self, k: usize) -> f64 {
        let n = self.trials();
        if k > n {
            return 0.0;
        }
        self.probability(k as isize, n)
    }

    /// Probability of at most `k` successes across all trials
    ///
    /// Terms are accumulated for increasing outcome counts so that cells
    /// filled for smaller counts are reused by larger ones.
    pub fn cumulative_probability(&mut self, k: usize) -> f64 {
        let upper = k.min(self.trials());
        (0..=upper).map(|i| self.outcome_probability(i)).sum()
    }

    /// Table lookup statistics accumulated so far
    pub const fn stats(&self) -> MemoStats {
        self.table.stats
    }

    /// Read-only view of the memo table
    pub const fn table(&self) -> &MemoTable {
        &self.table
    }
}
