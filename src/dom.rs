//! Thin helpers over the html5ever/rcdom tree: parsing, attribute and class
//! access, text content, and the two mutations the rewriter needs (replace an
//! element with a text node, detach an element).

use std::cell::RefCell;
use std::rc::Rc;

use html5ever::parse_document;
use html5ever::tendril::{StrTendril, TendrilSink};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom};

pub fn parse_to_dom(input: &str) -> RcDom {
    parse_document(RcDom::default(), Default::default()).one(input)
}

pub fn elem_tag_lower(h: &Handle) -> Option<String> {
    match &h.data {
        NodeData::Element { name, .. } => Some(name.local.to_string().to_ascii_lowercase()),
        _ => None,
    }
}

pub fn attr(h: &Handle, name: &str) -> Option<String> {
    match &h.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|a| a.name.local.to_string().eq_ignore_ascii_case(name))
            .map(|a| a.value.to_string()),
        _ => None,
    }
}

/// Class-token membership, `classList.contains` semantics (case-sensitive).
pub fn has_class(h: &Handle, token: &str) -> bool {
    attr(h, "class")
        .map(|v| v.split_whitespace().any(|t| t == token))
        .unwrap_or(false)
}

/// Concatenated text of all descendant text nodes, document order.
pub fn text_content(h: &Handle) -> String {
    let mut out = String::new();
    fn walk(node: &Handle, out: &mut String) {
        if let NodeData::Text { contents } = &node.data {
            out.push_str(&contents.borrow());
        }
        for c in node.children.borrow().iter() {
            walk(c, out);
        }
    }
    walk(h, &mut out);
    out
}

/// First descendant (pre-order, excluding `h` itself) satisfying `pred`.
pub fn find_descendant(h: &Handle, pred: &dyn Fn(&Handle) -> bool) -> Option<Handle> {
    for c in h.children.borrow().iter() {
        if pred(c) {
            return Some(c.clone());
        }
        if let Some(found) = find_descendant(c, pred) {
            return Some(found);
        }
    }
    None
}

/// All descendants (pre-order, excluding `h` itself) satisfying `pred`.
pub fn collect_descendants(h: &Handle, pred: &dyn Fn(&Handle) -> bool) -> Vec<Handle> {
    let mut out = Vec::new();
    fn walk(node: &Handle, pred: &dyn Fn(&Handle) -> bool, out: &mut Vec<Handle>) {
        for c in node.children.borrow().iter() {
            if pred(c) {
                out.push(c.clone());
            }
            walk(c, pred, out);
        }
    }
    walk(h, pred, &mut out);
    out
}

fn parent_of(node: &Handle) -> Option<Handle> {
    let weak = node.parent.take();
    let parent = weak.as_ref().and_then(|w| w.upgrade());
    node.parent.set(weak);
    parent
}

pub fn new_text_node(text: &str) -> Handle {
    Node::new(NodeData::Text {
        contents: RefCell::new(StrTendril::from(text)),
    })
}

/// Swap `node` for a text node carrying `text`. A node with no parent (already
/// detached by an earlier replacement) is left alone.
pub fn replace_with_text(node: &Handle, text: &str) {
    let Some(parent) = parent_of(node) else {
        return;
    };
    let mut children = parent.children.borrow_mut();
    let Some(idx) = children.iter().position(|c| Rc::ptr_eq(c, node)) else {
        return;
    };
    let tn = new_text_node(text);
    tn.parent.set(Some(Rc::downgrade(&parent)));
    children[idx] = tn;
    node.parent.set(None);
}

/// Remove `node` from its parent, leaving no placeholder.
pub fn detach(node: &Handle) {
    let Some(parent) = parent_of(node) else {
        return;
    };
    let mut children = parent.children.borrow_mut();
    if let Some(idx) = children.iter().position(|c| Rc::ptr_eq(c, node)) {
        children.remove(idx);
    }
    node.parent.set(None);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_elem(dom: &RcDom, tag: &str) -> Handle {
        find_descendant(&dom.document, &|n| {
            elem_tag_lower(n).as_deref() == Some(tag)
        })
        .expect("element present")
    }

    #[test]
    fn attr_and_class_lookup() {
        let dom = parse_to_dom(r#"<span class="a MathJax b" role="math">x</span>"#);
        let span = first_elem(&dom, "span");
        assert_eq!(attr(&span, "role").as_deref(), Some("math"));
        assert!(has_class(&span, "MathJax"));
        assert!(!has_class(&span, "Math"));
        assert_eq!(attr(&span, "missing"), None);
    }

    #[test]
    fn text_content_spans_nested_nodes() {
        let dom = parse_to_dom("<div>a<span>b</span>c</div>");
        let div = first_elem(&dom, "div");
        assert_eq!(text_content(&div), "abc");
    }

    #[test]
    fn replace_swaps_element_for_text() {
        let dom = parse_to_dom("<div><span>old</span></div>");
        let span = first_elem(&dom, "span");
        replace_with_text(&span, "new");
        let div = first_elem(&dom, "div");
        assert_eq!(text_content(&div), "new");
        assert!(find_descendant(&div, &|n| elem_tag_lower(n).is_some()).is_none());
    }

    #[test]
    fn detach_removes_without_placeholder() {
        let dom = parse_to_dom("<div>a<span>x</span>b</div>");
        let span = first_elem(&dom, "span");
        detach(&span);
        let div = first_elem(&dom, "div");
        assert_eq!(text_content(&div), "ab");
    }
}
