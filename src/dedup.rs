use std::collections::{HashMap, HashSet};

use crate::records::{NaturalKey, ProblemRecord};

/// Extra occurrences per natural key, in the order keys first collided.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateTally {
    order: Vec<NaturalKey>,
    counts: HashMap<NaturalKey, usize>,
}

impl DuplicateTally {
    fn bump(&mut self, key: NaturalKey) {
        match self.counts.get_mut(&key) {
            Some(n) => *n += 1,
            None => {
                self.order.push(key.clone());
                self.counts.insert(key, 1);
            }
        }
    }

    /// Occurrences beyond the first; 0 for keys never duplicated.
    pub fn get(&self, key: &NaturalKey) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NaturalKey, usize)> {
        self.order.iter().map(|k| (k, self.get(k)))
    }

    /// Number of keys that collided at least once.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Total records dropped.
    pub fn dropped(&self) -> usize {
        self.counts.values().sum()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Deduplicated {
    pub records: Vec<ProblemRecord>,
    pub tally: DuplicateTally,
}

/// First-seen-wins merge keyed by `(problem_id, problem_title)`.
/// Feed documents in processing order; output keeps first-occurrence order.
#[derive(Debug, Default)]
pub struct Deduplicator {
    seen: HashSet<NaturalKey>,
    records: Vec<ProblemRecord>,
    tally: DuplicateTally,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the record was a duplicate and got dropped.
    pub fn push(&mut self, record: ProblemRecord) -> bool {
        let key = record.key();
        if self.seen.contains(&key) {
            self.tally.bump(key);
            return false;
        }
        self.seen.insert(key);
        self.records.push(record);
        true
    }

    pub fn extend(&mut self, records: impl IntoIterator<Item = ProblemRecord>) {
        for record in records {
            self.push(record);
        }
    }

    pub fn finish(self) -> Deduplicated {
        Deduplicated {
            records: self.records,
            tally: self.tally,
        }
    }
}

pub fn deduplicate(records: impl IntoIterator<Item = ProblemRecord>) -> Deduplicated {
    let mut dedup = Deduplicator::new();
    dedup.extend(records);
    dedup.finish()
}

// ── Tests ──
