use super::RowView;
use crate::config::ExtractConfig;

/// Absolute problem URL: origin + the link's `href`. Empty or missing `href` gives `None`.
pub fn recover(row: &RowView<'_>, config: &ExtractConfig) -> Option<String> {
    let link = row.find(&row.markup().title_link)?;
    link.value()
        .attr("href")
        .filter(|href| !href.is_empty())
        .map(|href| format!("{}{}", config.origin, href))
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::rules::testing::with_row;

    #[test]
    fn joins_origin_and_path() {
        let html = r#"<div role="row"><a class="font-semibold" href="/problems/two-sum/">1. Two Sum</a></div>"#;
        assert_eq!(
            with_row(html, recover).as_deref(),
            Some("https://leetcode.com/problems/two-sum/")
        );
    }

    #[test]
    fn missing_or_empty_href_is_none() {
        let html = r#"<div role="row"><a class="font-semibold">1. Two Sum</a></div>"#;
        assert_eq!(with_row(html, recover), None);
        let html = r#"<div role="row"><a class="font-semibold" href="">1. Two Sum</a></div>"#;
        assert_eq!(with_row(html, recover), None);
    }
}
