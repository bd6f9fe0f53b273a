use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::config::ExtractConfig;
use crate::dedup::{self, Deduplicated, DuplicateTally};
use crate::loader::Document;
use crate::parser;
use crate::records::{ProblemRecord, SuspiciousRow};

/// Documents extracted in parallel per batch; the merge stays sequential.
const CHUNK_SIZE: usize = 32;

/// A note together with the document it came from.
#[derive(Debug, Clone)]
pub struct FlaggedRow {
    pub document: String,
    pub note: SuspiciousRow,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub documents: usize,
    pub rows: usize,
    /// Valid records before deduplication.
    pub extracted: usize,
    pub records: Vec<ProblemRecord>,
    pub notes: Vec<FlaggedRow>,
    pub tally: DuplicateTally,
}

impl RunSummary {
    pub fn suspicious(&self) -> usize {
        self.notes.iter().filter(|n| n.note.is_blocking()).count()
    }

    /// Notes and duplicates as log lines.
    pub fn log(&self) {
        if self.notes.is_empty() {
            info!("No suspicious rows encountered.");
        } else {
            warn!("Found {} suspicious row note(s)", self.notes.len());
            for n in &self.notes {
                warn!("{}: {}", n.document, n.note);
            }
        }

        if self.tally.is_empty() {
            info!("No duplicates detected.");
        } else {
            info!("Found {} duplicate problem(s)", self.tally.len());
            for (key, extra) in self.tally.iter() {
                info!("Problem {} repeated {} times", key, extra + 1);
            }
        }
    }

    pub fn print(&self) {
        println!(
            "Processed {} documents ({} rows): {} records, {} unique, {} suspicious rows, {} duplicate problems ({} dropped).",
            self.documents,
            self.rows,
            self.extracted,
            self.records.len(),
            self.suspicious(),
            self.tally.len(),
            self.tally.dropped(),
        );
    }
}

/// Extract every document, then deduplicate in document order (first-seen-wins).
pub fn run(documents: &[Document], config: &ExtractConfig) -> Result<RunSummary> {
    let pb = ProgressBar::new(documents.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} documents")?
            .progress_chars("#>-"),
    );

    let mut extracted = Vec::new();
    let mut summary = RunSummary {
        documents: documents.len(),
        ..RunSummary::default()
    };

    for chunk in documents.chunks(CHUNK_SIZE) {
        let results: Vec<_> = chunk
            .par_iter()
            .map(|doc| parser::extract(&doc.html, config))
            .collect();

        for (doc, extraction) in chunk.iter().zip(results) {
            debug!(
                document = %doc.name,
                rows = extraction.rows,
                records = extraction.records.len(),
                notes = extraction.notes.len(),
                "Extracted document"
            );
            summary.rows += extraction.rows;
            summary
                .notes
                .extend(extraction.notes.into_iter().map(|note| FlaggedRow {
                    document: doc.name.clone(),
                    note,
                }));
            extracted.extend(extraction.records);
        }
        pb.inc(chunk.len() as u64);
    }

    pb.finish_and_clear();

    summary.extracted = extracted.len();
    let Deduplicated { records, tally } = dedup::deduplicate(extracted);
    summary.records = records;
    summary.tally = tally;
    Ok(summary)
}

// ── Tests ──
