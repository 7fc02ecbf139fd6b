use std::collections::HashMap;

use crate::element::{Content, Element};
use crate::text::measure;
use crate::types::Size;

pub type LayoutResult = HashMap<String, Rect>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn from_size(width: u16, height: u16) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Block layout: children stack vertically inside their parent.
/// Elements that are not shown produce no rect and their subtree is
/// skipped, so they leave the flow entirely.
pub fn layout(root: &Element, viewport: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    if root.is_shown() {
        layout_element(root, viewport, &mut result);
    }
    result
}

fn layout_element(element: &Element, available: Rect, result: &mut LayoutResult) {
    let width = resolve_width(element, available.width);
    let height = natural_height(element);
    let rect = Rect::new(available.x, available.y, width, height.min(available.height));
    result.insert(element.id.clone(), rect);

    let Content::Children(children) = &element.content else {
        return;
    };

    let mut cursor = rect.y;
    for child in children {
        if !child.is_shown() {
            continue;
        }
        let child_height = natural_height(child);
        let slot = Rect::new(rect.x, cursor, rect.width, child_height);
        layout_element(child, slot, result);
        cursor = cursor.saturating_add(child_height);
    }
}

fn resolve_width(element: &Element, available: u16) -> u16 {
    match element.width {
        Size::Fixed(w) => w.min(available),
        Size::Auto => match &element.content {
            Content::Text(text) => measure(text).0.min(available),
            _ => available,
        },
    }
}

/// Intrinsic height: fixed rows, measured text, or the sum of shown
/// children for containers. Ignores the element's own display mode, so
/// it also answers "how tall would this be if revealed".
pub fn natural_height(element: &Element) -> u16 {
    match element.height {
        Size::Fixed(h) => h,
        Size::Auto => match &element.content {
            Content::None => 0,
            Content::Text(text) => measure(text).1,
            Content::Children(children) => children
                .iter()
                .filter(|c| c.is_shown())
                .map(|c| natural_height(c))
                .fold(0u16, |acc, h| acc.saturating_add(h)),
        },
    }
}
