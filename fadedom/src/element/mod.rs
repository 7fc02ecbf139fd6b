mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Collect the IDs of every element satisfying the predicate, in
/// document order.
pub fn collect_matching(root: &Element, predicate: &dyn Fn(&Element) -> bool) -> Vec<String> {
    let mut ids = Vec::new();
    collect_recursive(root, predicate, &mut ids);
    ids
}

fn collect_recursive(element: &Element, predicate: &dyn Fn(&Element) -> bool, ids: &mut Vec<String>) {
    if predicate(element) {
        ids.push(element.id.clone());
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_recursive(child, predicate, ids);
        }
    }
}

/// The `:visible` predicate: the element and every ancestor must be
/// shown for it to occupy space in the document.
pub fn visible_in(root: &Element, id: &str) -> bool {
    visible_recursive(root, id).unwrap_or(false)
}

fn visible_recursive(element: &Element, id: &str) -> Option<bool> {
    if !element.is_shown() {
        // Hidden subtrees leave the flow entirely
        return if subtree_contains(element, id) {
            Some(false)
        } else {
            None
        };
    }

    if element.id == id {
        return Some(true);
    }

    if let Content::Children(children) = &element.content {
        for child in children {
            if let Some(result) = visible_recursive(child, id) {
                return Some(result);
            }
        }
    }

    None
}

fn subtree_contains(element: &Element, id: &str) -> bool {
    find_element(element, id).is_some()
}
