//! Per-field recovery rules. Each rule looks at one row on its own and either
//! recovers a value or reports it absent; none of them fail.

pub mod date;
pub mod difficulty;
pub mod link;
pub mod result;
pub mod title;

use scraper::ElementRef;

use super::locate::{Locator, Probe};
use crate::config::{ExtractConfig, Markup};
use crate::records::Difficulty;

/// A row element together with the locator and markup used to search it.
#[derive(Clone, Copy)]
pub struct RowView<'a> {
    pub element: ElementRef<'a>,
    locator: &'a dyn Locator,
    markup: &'a Markup,
}

impl<'a> RowView<'a> {
    pub fn new(element: ElementRef<'a>, locator: &'a dyn Locator, markup: &'a Markup) -> Self {
        Self {
            element,
            locator,
            markup,
        }
    }

    pub fn markup(&self) -> &'a Markup {
        self.markup
    }

    pub fn find(&self, probe: &Probe) -> Option<ElementRef<'a>> {
        self.locator.find(self.element, probe)
    }

    /// Search below an element other than the row, e.g. a field container.
    pub fn find_within(&self, scope: ElementRef<'a>, probe: &Probe) -> Option<ElementRef<'a>> {
        self.locator.find(scope, probe)
    }
}

/// Split link text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleText {
    pub problem_id: String,
    pub problem_title: String,
    /// Normalized link text as found.
    pub text: String,
    /// False when the `". "` separator was missing.
    pub well_formed: bool,
}

/// The rule table the row extractor runs for every row.
#[derive(Clone, Copy)]
pub struct RuleSet {
    pub date: fn(&RowView<'_>, &ExtractConfig) -> String,
    pub title: fn(&RowView<'_>, &ExtractConfig) -> Option<TitleText>,
    pub url: fn(&RowView<'_>, &ExtractConfig) -> Option<String>,
    pub difficulty: fn(&RowView<'_>, &ExtractConfig) -> Option<Difficulty>,
    pub last_result: fn(&RowView<'_>, &ExtractConfig) -> Option<String>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            date: date::recover,
            title: title::recover,
            url: link::recover,
            difficulty: difficulty::recover,
            last_result: result::recover,
        }
    }
}

impl RuleSet {
    /// Same rules, with last-result capture switched off.
    pub fn without_last_result(self) -> Self {
        Self {
            last_result: skip_last_result,
            ..self
        }
    }
}

fn skip_last_result(_: &RowView<'_>, _: &ExtractConfig) -> Option<String> {
    None
}

// ── Test helpers ──
