use super::RowView;
use crate::config::ExtractConfig;
use crate::parser::locate::stripped_text;
use crate::records::Difficulty;

/// Difficulty badge inside the title column. The badge carries a fixed
/// `text-[14px]` size class and a `text-sd-*` color class.
pub fn recover(row: &RowView<'_>, _config: &ExtractConfig) -> Option<Difficulty> {
    let markup = row.markup();
    let container = row.find(&markup.difficulty_container)?;
    let badge = row.find_within(container, &markup.difficulty_label)?;
    Difficulty::from_label(&stripped_text(badge))
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::rules::testing::with_row;

    fn difficulty_of(inner: &str) -> Option<Difficulty> {
        let html = format!(r#"<div role="row">{}</div>"#, inner);
        with_row(&html, recover)
    }

    #[test]
    fn med_badge_is_medium() {
        let d = difficulty_of(
            r#"<div class="flex max-w-[300px] flex-col"><div class="text-[14px] text-sd-medium">Med.</div></div>"#,
        );
        assert_eq!(d, Some(Difficulty::Medium));
    }

    #[test]
    fn other_badges_pass_through() {
        let d = difficulty_of(
            r#"<div class="flex max-w-[300px] flex-col"><span class="text-[14px] text-sd-hard">Hard</span></div>"#,
        );
        assert_eq!(d, Some(Difficulty::Hard));
    }

    #[test]
    fn badge_outside_container_is_ignored() {
        let d = difficulty_of(r#"<span class="text-[14px] text-sd-easy">Easy</span>"#);
        assert_eq!(d, None);
    }

    #[test]
    fn container_without_badge_is_none() {
        let d = difficulty_of(
            r#"<div class="flex max-w-[300px] flex-col"><span class="text-[12px] text-sd-easy">Easy</span></div>"#,
        );
        assert_eq!(d, None);
        let d = difficulty_of(
            r#"<div class="flex max-w-[300px] flex-col"><span class="text-[14px] text-sd-easy"> </span></div>"#,
        );
        assert_eq!(d, None);
    }
}
