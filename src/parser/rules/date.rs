use std::sync::LazyLock;

use regex::Regex;

use super::RowView;
use crate::config::ExtractConfig;
use crate::parser::locate::stripped_text;

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}\.\d{2}\.\d{2}$").unwrap());

/// Submission date as `YYYY.MM.DD`. Relative labels ("Yesterday") and
/// missing cells fall back to the processing date.
pub fn recover(row: &RowView<'_>, config: &ExtractConfig) -> String {
    row.find(&row.markup().date)
        .map(stripped_text)
        .filter(|text| DATE_RE.is_match(text))
        .unwrap_or_else(|| config.today_label())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::rules::testing::with_row;

    fn date_of(cell: &str) -> String {
        let html = format!(r#"<div role="row">{}<a class="font-semibold">1. X</a></div>"#, cell);
        with_row(&html, recover)
    }

    #[test]
    fn dotted_date_is_kept() {
        assert_eq!(
            date_of(r#"<div class="text-sd-muted-foreground"> 2024.01.18 </div>"#),
            "2024.01.18"
        );
    }

    #[test]
    fn relative_label_falls_back_to_today() {
        assert_eq!(
            date_of(r#"<div class="text-sd-muted-foreground">Yesterday</div>"#),
            "2025.02.25"
        );
    }

    #[test]
    fn partial_match_is_rejected() {
        assert_eq!(
            date_of(r#"<div class="text-sd-muted-foreground">2024.01.18 09:12</div>"#),
            "2025.02.25"
        );
        assert_eq!(
            date_of(r#"<div class="text-sd-muted-foreground">2024-01-18</div>"#),
            "2025.02.25"
        );
    }

    #[test]
    fn missing_cell_falls_back_to_today() {
        assert_eq!(date_of(""), "2025.02.25");
        assert_eq!(date_of(r#"<span class="text-sd-muted-foreground">2024.01.18</span>"#), "2025.02.25");
    }
}
