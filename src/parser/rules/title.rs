use super::{RowView, TitleText};
use crate::config::ExtractConfig;
use crate::parser::locate::{collapse_ws, stripped_text};
use crate::records::UNKNOWN_ID;

const SEPARATOR: &str = ". ";

/// Problem id and title from the primary link, e.g. `"94. Binary Tree Inorder Traversal"`.
/// `None` only when the row has no link at all.
pub fn recover(row: &RowView<'_>, _config: &ExtractConfig) -> Option<TitleText> {
    let link = row.find(&row.markup().title_link)?;
    Some(split_title(&collapse_ws(&stripped_text(link))))
}

pub fn split_title(text: &str) -> TitleText {
    match text.split_once(SEPARATOR) {
        Some((id, title)) => TitleText {
            problem_id: id.to_string(),
            problem_title: title.to_string(),
            text: text.to_string(),
            well_formed: true,
        },
        None => TitleText {
            problem_id: UNKNOWN_ID.to_string(),
            problem_title: text.to_string(),
            text: text.to_string(),
            well_formed: false,
        },
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::rules::testing::with_row;

    #[test]
    fn splits_on_first_separator() {
        let t = split_title("1. Two Sum. Again");
        assert_eq!(t.problem_id, "1");
        assert_eq!(t.problem_title, "Two Sum. Again");
        assert!(t.well_formed);
    }

    #[test]
    fn missing_separator_is_unknown() {
        let t = split_title("Two Sum");
        assert_eq!(t.problem_id, "Unknown");
        assert_eq!(t.problem_title, "Two Sum");
        assert!(!t.well_formed);

        let t = split_title("1.Two Sum");
        assert_eq!(t.problem_id, "Unknown");
        assert_eq!(t.problem_title, "1.Two Sum");
    }

    #[test]
    fn link_text_whitespace_is_collapsed() {
        let html = r#"<div role="row"><a class="font-semibold text-sm" href="/problems/x/">
            94.
               Binary   Tree Inorder
            Traversal</a></div>"#;
        let t = with_row(html, recover).unwrap();
        assert_eq!(t.problem_id, "94");
        assert_eq!(t.problem_title, "Binary Tree Inorder Traversal");
        assert_eq!(t.text, "94. Binary Tree Inorder Traversal");
    }

    #[test]
    fn no_link_is_none() {
        let html = r#"<div role="row"><a class="font-medium" href="/problems/x/">1. X</a></div>"#;
        assert!(with_row(html, recover).is_none());
    }
}
