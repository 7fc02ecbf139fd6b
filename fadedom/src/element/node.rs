use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::{Display, SavedVisual, Size, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,
    /// Constructor tag ("box", "link", "form", ...), selectable as a
    /// bare token. Unaffected by explicit IDs.
    pub kind: String,
    pub classes: Vec<String>,

    // Content
    pub content: Content,

    // Box model
    pub width: Size,
    pub height: Size,

    // Visual
    pub style: Style,

    // Interaction
    pub clickable: bool,

    /// Restore record written when this element is concealed, consumed
    /// when it is next revealed.
    pub saved: Option<SavedVisual>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            kind: "el".to_string(),
            classes: Vec::new(),
            content: Content::None,
            width: Size::Auto,
            height: Size::Auto,
            style: Style::default(),
            clickable: false,
            saved: None,
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            kind: "box".to_string(),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            kind: "text".to_string(),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            kind: "col".to_string(),
            ..Default::default()
        }
    }

    /// A clickable text trigger, the anchor-element analog.
    pub fn link(label: impl Into<String>) -> Self {
        Self {
            id: generate_id("link"),
            kind: "link".to_string(),
            content: Content::Text(label.into()),
            clickable: true,
            ..Default::default()
        }
    }

    /// A container whose visibility gets toggled by the harness.
    pub fn form() -> Self {
        Self {
            id: generate_id("form"),
            kind: "form".to_string(),
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    // Layout
    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    // Interaction
    pub fn clickable(mut self) -> Self {
        self.clickable = true;
        self
    }

    // Content
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, children: Vec<Element>) -> Self {
        self.content = Content::Children(children);
        self
    }

    /// Whether this node itself occupies space in the flow. Ancestor
    /// visibility is checked by [`visible_in`](super::visible_in).
    pub fn is_shown(&self) -> bool {
        self.style.display != Display::None && !self.height.is_collapsed()
    }
}
