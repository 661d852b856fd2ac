//! Result of a disable mutation.

/// How many rows a disable statement touched.
///
/// Zero rows is a successful execution against an unknown name; callers
/// decide whether that matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisableGameOutcome {
    rows_affected: u64,
}

impl DisableGameOutcome {
    /// Wraps an affected-row count.
    #[must_use]
    pub const fn new(rows_affected: u64) -> Self {
        Self { rows_affected }
    }

    /// Number of rows updated.
    #[must_use]
    pub const fn rows_affected(self) -> u64 {
        self.rows_affected
    }

    /// Whether any row matched the name.
    #[must_use]
    pub const fn matched(self) -> bool {
        self.rows_affected > 0
    }
}
