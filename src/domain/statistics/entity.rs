use serde::{Deserialize, Serialize};

/// Aggregate pet counts shown on the landing page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatSummary {
    /// Every pet in the store
    pub registered: u64,

    /// Pets whose status is `found`
    pub found: u64,

    /// Pets whose status is `for-adoption`
    pub for_adoption: u64,
}

impl StatSummary {
    pub fn new(registered: u64, found: u64, for_adoption: u64) -> Self {
        Self {
            registered,
            found,
            for_adoption,
        }
    }
}

/// Summary plus the loading flag a view renders from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsState {
    pub summary: StatSummary,
    pub loading: bool,
}

impl StatsState {
    /// Initial state: zero counts, still loading
    pub fn new() -> Self {
        Self {
            summary: StatSummary::default(),
            loading: true,
        }
    }

    /// Record the end of a load batch.
    ///
    /// A `Some` summary replaces the current one; `None` keeps it.
    /// Returns `true` if this call is the one that cleared the loading flag.
    pub fn settle(&mut self, summary: Option<StatSummary>) -> bool {
        if let Some(summary) = summary {
            self.summary = summary;
        }
        let was_loading = self.loading;
        self.loading = false;
        was_loading
    }
}

impl Default for StatsState {
    fn default() -> Self {
        Self::new()
    }
}
