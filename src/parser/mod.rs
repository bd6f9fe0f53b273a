pub mod locate;
pub mod row;
pub mod rules;

use crate::config::ExtractConfig;
use crate::records::{ProblemRecord, SuspiciousRow};

pub use row::RowExtractor;

/// What one document yielded.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Rows matched by the row probe, valid or not.
    pub rows: usize,
    pub records: Vec<ProblemRecord>,
    pub notes: Vec<SuspiciousRow>,
}

/// Rows → field rules → records / suspicious notes, with the default locator and rules.
pub fn extract(html: &str, config: &ExtractConfig) -> Extraction {
    RowExtractor::new(config).extract(html)
}

// ── Tests ──
