use scraper::Html;

use super::locate::{excerpt, stripped_text, Locator, TreeLocator};
use super::rules::{RowView, RuleSet};
use super::Extraction;
use crate::config::ExtractConfig;
use crate::records::{Field, NoteKind, ProblemRecord, SuspiciousRow, EXCERPT_CHARS};

/// Turns one document into records and notes by running a [`RuleSet`] over every row.
pub struct RowExtractor<'c> {
    config: &'c ExtractConfig,
    locator: &'c dyn Locator,
    rules: RuleSet,
}

impl<'c> RowExtractor<'c> {
    pub fn new(config: &'c ExtractConfig) -> Self {
        let extractor = Self {
            config,
            locator: &TreeLocator,
            rules: RuleSet::default(),
        };
        if config.last_result {
            extractor
        } else {
            extractor.with_rules(RuleSet::default().without_last_result())
        }
    }

    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    pub fn extract(&self, html: &str) -> Extraction {
        let document = Html::parse_document(html);
        let rows = self
            .locator
            .find_all(document.root_element(), &self.config.markup.row);

        let mut out = Extraction {
            rows: rows.len(),
            ..Extraction::default()
        };

        for (i, element) in rows.into_iter().enumerate() {
            let view = RowView::new(element, self.locator, &self.config.markup);
            if let Some(record) = self.classify(i + 1, &view, &mut out.notes) {
                out.records.push(record);
            }
        }

        out
    }

    /// Run every rule on the row; a record only comes out when all required fields are present.
    fn classify(
        &self,
        index: usize,
        row: &RowView<'_>,
        notes: &mut Vec<SuspiciousRow>,
    ) -> Option<ProblemRecord> {
        let cfg = self.config;
        let date = (self.rules.date)(row, cfg);
        let title = (self.rules.title)(row, cfg);
        let url = (self.rules.url)(row, cfg);
        let difficulty = (self.rules.difficulty)(row, cfg);
        let last_result = (self.rules.last_result)(row, cfg);

        let raw = || excerpt(&stripped_text(row.element), EXCERPT_CHARS);

        if let Some(t) = title.as_ref().filter(|t| !t.well_formed) {
            notes.push(SuspiciousRow {
                row: index,
                kind: NoteKind::UnexpectedTitleFormat {
                    title: t.text.clone(),
                },
                excerpt: raw(),
            });
        }

        let has_link = title.is_some();
        let (problem_id, problem_title) = title
            .map(|t| (t.problem_id, t.problem_title))
            .unwrap_or_default();

        let mut missing = Vec::new();
        if problem_id.is_empty() {
            missing.push(Field::ProblemId);
        }
        if problem_title.is_empty() {
            missing.push(Field::ProblemTitle);
        }
        if difficulty.is_none() {
            missing.push(Field::Difficulty);
        }
        if url.is_none() {
            missing.push(Field::Url);
        }

        match (difficulty, url) {
            (Some(difficulty), Some(url)) if missing.is_empty() => Some(ProblemRecord {
                date,
                problem_id,
                problem_title,
                difficulty,
                last_result,
                url,
            }),
            _ => {
                let kind = if has_link {
                    NoteKind::MissingFields { missing }
                } else {
                    NoteKind::NoTitleLink { missing }
                };
                notes.push(SuspiciousRow {
                    row: index,
                    kind,
                    excerpt: raw(),
                });
                None
            }
        }
    }
}

#[cfg(test)]
impl<'c> RowExtractor<'c> {
    pub fn with_locator(mut self, locator: &'c dyn Locator) -> Self {
        self.locator = locator;
        self
    }
}
