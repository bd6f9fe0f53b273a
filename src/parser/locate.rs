//! Structural lookup inside a parsed document.
//!
//! The site styles everything with utility classes, so no single cue finds an
//! element reliably. A [`Probe`] combines tag name with a role attribute or a
//! class-list test, and a [`Locator`] walks the tree looking for matches.

use std::sync::LazyLock;

use regex::Regex;
use scraper::node::Element;
use scraper::ElementRef;

static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Element test used by a [`Locator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    /// `<tag role="...">`
    Role { tag: String, role: String },
    /// `<tag>` whose class list contains `token`.
    ClassToken { tag: String, token: String },
    /// `<tag>` whose class list is exactly `classes`, in order.
    ClassList { tag: String, classes: Vec<String> },
    /// Any of `tags` where every fragment is a substring of at least one class.
    PartialClasses { tags: Vec<String>, fragments: Vec<String> },
}

impl Probe {
    pub fn role(tag: &str, role: &str) -> Self {
        Self::Role {
            tag: tag.to_string(),
            role: role.to_string(),
        }
    }

    pub fn class_token(tag: &str, token: &str) -> Self {
        Self::ClassToken {
            tag: tag.to_string(),
            token: token.to_string(),
        }
    }

    pub fn class_list(tag: &str, classes: &str) -> Self {
        Self::ClassList {
            tag: tag.to_string(),
            classes: classes.split_whitespace().map(str::to_string).collect(),
        }
    }

    pub fn partial_classes(tags: &[&str], fragments: &[&str]) -> Self {
        Self::PartialClasses {
            tags: tags.iter().map(|t| t.to_string()).collect(),
            fragments: fragments.iter().map(|f| f.to_string()).collect(),
        }
    }

    pub fn matches(&self, el: &Element) -> bool {
        match self {
            Self::Role { tag, role } => el.name() == tag && el.attr("role") == Some(role.as_str()),
            Self::ClassToken { tag, token } => {
                el.name() == tag && class_tokens(el).any(|c| c == token)
            }
            Self::ClassList { tag, classes } => {
                el.name() == tag && class_tokens(el).eq(classes.iter().map(String::as_str))
            }
            Self::PartialClasses { tags, fragments } => {
                tags.iter().any(|t| t == el.name())
                    && el.attr("class").is_some()
                    && fragments
                        .iter()
                        .all(|f| class_tokens(el).any(|c| c.contains(f.as_str())))
            }
        }
    }
}

/// Class attribute split on whitespace, in document order.
fn class_tokens<'a>(el: &'a Element) -> impl Iterator<Item = &'a str> + 'a {
    el.attr("class").unwrap_or("").split_whitespace()
}

/// Finds elements below a scope element. The scope itself never matches.
pub trait Locator: Sync {
    fn find_all<'a>(&self, scope: ElementRef<'a>, probe: &Probe) -> Vec<ElementRef<'a>>;

    fn find<'a>(&self, scope: ElementRef<'a>, probe: &Probe) -> Option<ElementRef<'a>> {
        self.find_all(scope, probe).into_iter().next()
    }
}

/// Depth-first, document-order walk testing every descendant element.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeLocator;

impl Locator for TreeLocator {
    fn find_all<'a>(&self, scope: ElementRef<'a>, probe: &Probe) -> Vec<ElementRef<'a>> {
        descendants(scope)
            .filter(|el| probe.matches(el.value()))
            .collect()
    }

    fn find<'a>(&self, scope: ElementRef<'a>, probe: &Probe) -> Option<ElementRef<'a>> {
        descendants(scope).find(|el| probe.matches(el.value()))
    }
}

fn descendants<'a>(scope: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    scope.descendants().skip(1).filter_map(ElementRef::wrap)
}

/// Every text node trimmed, empty ones dropped, the rest joined without separator.
pub fn stripped_text(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Collapse whitespace runs to single spaces and trim the ends.
pub fn collapse_ws(s: &str) -> String {
    WS_RE.replace_all(s, " ").trim().to_string()
}

/// First `max` characters of `s`.
pub fn excerpt(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

// ── Tests ──
