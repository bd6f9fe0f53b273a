use chrono::NaiveDate;

use crate::parser::locate::Probe;

pub const DEFAULT_ORIGIN: &str = "https://leetcode.com";

/// Format of scraped dates and of the processing-date fallback.
pub const DATE_FORMAT: &str = "%Y.%m.%d";

/// Everything a run needs beyond the HTML itself. Built by the CLI and passed down explicitly.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Prefix for the page-relative problem links, without a trailing slash.
    pub origin: String,
    /// Processing date; stands in for rows without a usable date.
    pub today: NaiveDate,
    /// Capture the optional last-result cell.
    pub last_result: bool,
    pub markup: Markup,
}

impl ExtractConfig {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            today,
            last_result: true,
            markup: Markup::default(),
        }
    }

    pub fn with_origin(mut self, origin: &str) -> Self {
        self.origin = origin.trim_end_matches('/').to_string();
        self
    }

    pub fn with_last_result(mut self, enabled: bool) -> Self {
        self.last_result = enabled;
        self
    }

    pub fn today_label(&self) -> String {
        self.today.format(DATE_FORMAT).to_string()
    }
}

/// Where each field lives in the submission-history markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup {
    pub row: Probe,
    pub date: Probe,
    pub title_link: Probe,
    pub difficulty_container: Probe,
    pub difficulty_label: Probe,
    pub last_result: Probe,
}

impl Default for Markup {
    fn default() -> Self {
        Self {
            row: Probe::role("div", "row"),
            date: Probe::class_token("div", "text-sd-muted-foreground"),
            title_link: Probe::class_token("a", "font-semibold"),
            difficulty_container: Probe::class_list("div", "flex max-w-[300px] flex-col"),
            difficulty_label: Probe::partial_classes(&["span", "div"], &["text-[14px]", "text-sd-"]),
            last_result: Probe::class_list("div", "text-sd-muted-foreground flex h-full items-center"),
        }
    }
}

/// Parse a `--today` value. Accepts the site's `YYYY.MM.DD` and ISO `YYYY-MM-DD`.
pub fn parse_day(s: &str) -> Result<NaiveDate, String> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .map_err(|_| format!("invalid date '{}', expected YYYY.MM.DD or YYYY-MM-DD", s))
}

// ── Tests ──
