//! CSS-flavored element selection over a fadedom tree.
//!
//! Supported forms: `#id`, `.class`, a bare kind prefix (matches the
//! prefix of auto-generated IDs, e.g. `form`), and a space-separated
//! descendant chain (`.message link`).

use fadedom::element::{collect_matching, find_element, Content, Element};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectorError {
    #[error("empty selector")]
    Empty,
    #[error("unsupported selector syntax: {0:?}")]
    Unsupported(String),
}

/// One step of a selector.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Id(String),
    Class(String),
    Kind(String),
}

impl Step {
    fn matches(&self, element: &Element) -> bool {
        match self {
            Step::Id(id) => element.id == *id,
            Step::Class(class) => element.has_class(class),
            Step::Kind(kind) => element.kind == *kind,
        }
    }
}

/// A parsed selector: one or more steps joined by the descendant
/// combinator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher {
    steps: Vec<Step>,
}

impl Matcher {
    pub fn parse(selector: &str) -> Result<Self, SelectorError> {
        let trimmed = selector.trim();
        if trimmed.is_empty() {
            return Err(SelectorError::Empty);
        }

        let mut steps = Vec::new();
        for token in trimmed.split_whitespace() {
            steps.push(parse_step(token)?);
        }
        Ok(Self { steps })
    }

    /// IDs of every element matched by this selector, in document order.
    pub fn select(&self, root: &Element) -> Vec<String> {
        let mut candidates: Vec<String> = match self.steps.first() {
            Some(step) => collect_matching(root, &|el| step.matches(el)),
            None => Vec::new(),
        };

        // Each further step narrows to matching descendants
        for step in &self.steps[1..] {
            let mut next = Vec::new();
            for ancestor_id in &candidates {
                if let Some(ancestor) = find_element(root, ancestor_id) {
                    for id in collect_descendants(ancestor, step) {
                        if !next.contains(&id) {
                            next.push(id);
                        }
                    }
                }
            }
            candidates = next;
        }

        candidates
    }
}

fn parse_step(token: &str) -> Result<Step, SelectorError> {
    if let Some(id) = token.strip_prefix('#') {
        if id.is_empty() {
            return Err(SelectorError::Unsupported(token.to_string()));
        }
        return Ok(Step::Id(id.to_string()));
    }
    if let Some(class) = token.strip_prefix('.') {
        if class.is_empty() {
            return Err(SelectorError::Unsupported(token.to_string()));
        }
        return Ok(Step::Class(class.to_string()));
    }
    if token.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
        return Ok(Step::Kind(token.to_string()));
    }
    Err(SelectorError::Unsupported(token.to_string()))
}

fn collect_descendants(ancestor: &Element, step: &Step) -> Vec<String> {
    let mut ids = Vec::new();
    if let Content::Children(children) = &ancestor.content {
        for child in children {
            for id in collect_matching(child, &|el| step.matches(el)) {
                ids.push(id);
            }
        }
    }
    ids
}

/// A resolved, ordered element set, the "current element set" an
/// animate-style call applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    matcher: Matcher,
    ids: Vec<String>,
}

impl Selection {
    /// Resolve a matcher against the current tree. An empty result is
    /// valid; applying effects to it is a no-op.
    pub fn resolve(root: &Element, matcher: &Matcher) -> Self {
        Self {
            matcher: matcher.clone(),
            ids: matcher.select(root),
        }
    }

    /// Parse and resolve in one step.
    pub fn query(root: &Element, selector: &str) -> Result<Self, SelectorError> {
        let matcher = Matcher::parse(selector)?;
        Ok(Self::resolve(root, &matcher))
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }
}
