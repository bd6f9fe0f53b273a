use super::RowView;
use crate::config::ExtractConfig;
use crate::parser::locate::stripped_text;

/// Last submission outcome ("Accepted", "Runtime Error", ...). Optional.
pub fn recover(row: &RowView<'_>, _config: &ExtractConfig) -> Option<String> {
    row.find(&row.markup().last_result)
        .map(stripped_text)
        .filter(|text| !text.is_empty())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::rules::testing::with_row;

    #[test]
    fn reads_result_cell() {
        let html = r#"<div role="row">
            <div class="text-sd-muted-foreground">2024.01.18</div>
            <div class="text-sd-muted-foreground flex h-full items-center"> Runtime Error </div>
        </div>"#;
        assert_eq!(with_row(html, recover).as_deref(), Some("Runtime Error"));
    }

    #[test]
    fn date_cell_is_not_a_result() {
        let html = r#"<div role="row"><div class="text-sd-muted-foreground">2024.01.18</div></div>"#;
        assert_eq!(with_row(html, recover), None);
    }
}
