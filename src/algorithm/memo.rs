use ndarray::Array2;

/// Query-scoped memoization table for the Poisson Binomial recurrence
///
/// Cells are addressed by `[k][j]` with `0 <= k, j <= n`. A cell is either
/// uncomputed (`None`) or holds the probability of exactly `k` successes in
/// the first `j` trials. Cells are write-once: a stored value is never replaced.
#[derive(Debug, Clone)]
pub struct MemoTable {
    cells: Array2<Option<f64>>,

    /// Lookup statistics
    pub stats: MemoStats,
}

/// Counts of lookups answered from the table versus computed fresh
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoStats {
    /// Lookups that found a stored value
    pub hits: usize,
    /// Lookups that found an uncomputed cell
    pub misses: usize,
}

impl MemoTable {
    /// Create an `(n+1) x (n+1)` table with every cell uncomputed
    pub fn new(n: usize) -> Self {
        Self {
            cells: Array2::from_elem((n + 1, n + 1), None),
            stats: MemoStats::default(),
        }
    }

    /// Number of trials the table was sized for
    pub fn trials(&self) -> usize {
        self.cells.nrows() - 1
    }

    /// Stored value for `[k][j]`, recording a hit or miss
    ///
    /// Cells outside the table read as uncomputed.
    pub fn lookup(&mut self, k: usize, j: usize) -> Option<f64> {
        let stored = self.peek(k, j);
        if stored.is_some() {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
        }
        stored
    }

    /// Stored value for `[k][j]` without touching the statistics
    pub fn peek(&self, k: usize, j: usize) -> Option<f64> {
        self.cells.get([k, j]).copied().flatten()
    }

    /// Store a value in an uncomputed cell and return the cell's value
    ///
    /// A cell that already holds a value keeps it; the returned value is
    /// always the one stored in the table.
    pub fn record(&mut self, k: usize, j: usize, value: f64) -> f64 {
        match self.cells.get_mut([k, j]) {
            Some(cell) => *cell.get_or_insert(value),
            None => value,
        }
    }

    /// Number of cells holding a computed value
    pub fn computed_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}
