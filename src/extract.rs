//! LaTeX recovery from a rendered math element. An ordered list of independent
//! extractor strategies is tried until one yields a result; `None` from all of
//! them means the element has no recoverable source and the caller drops it.

use markup5ever_rcdom::Handle;

use crate::dom::{attr, elem_tag_lower, find_descendant, text_content};

/// Data attributes that math renderers stash the original source in, checked
/// in this order.
pub const TEX_DATA_ATTRS: &[&str] = &["data-tex", "data-latex", "data-original", "data-math"];

pub type Extractor = fn(&Handle) -> Option<String>;

/// Priority order: annotation element, legacy math/tex script, data
/// attributes, aria-label. The first strategy to return `Some` wins, even if
/// its string is empty: a present-but-empty annotation still short-circuits,
/// and the empty result makes the caller remove the element.
pub const EXTRACTORS: &[Extractor] = &[annotation_tex, script_tex, data_attr_tex, aria_label_tex];

pub fn extract_tex(el: &Handle) -> Option<String> {
    EXTRACTORS.iter().find_map(|extract| extract(el))
}

/// `<annotation encoding="application/x-tex">` (or `text/x-tex`) descendant.
fn annotation_tex(el: &Handle) -> Option<String> {
    let ann = find_descendant(el, &|n| {
        elem_tag_lower(n).as_deref() == Some("annotation")
            && matches!(
                attr(n, "encoding").as_deref(),
                Some("application/x-tex") | Some("text/x-tex")
            )
    })?;
    Some(text_content(&ann).trim().to_string())
}

/// Nested `<script type="math/tex...">` holding the source as raw text.
fn script_tex(el: &Handle) -> Option<String> {
    let script = find_descendant(el, &is_tex_script)?;
    Some(text_content(&script).trim().to_string())
}

pub fn is_tex_script(n: &Handle) -> bool {
    elem_tag_lower(n).as_deref() == Some("script")
        && attr(n, "type")
            .map(|t| t.starts_with("math/tex"))
            .unwrap_or(false)
}

/// First non-empty of the known data attributes. Empty values fall through to
/// the next attribute.
fn data_attr_tex(el: &Handle) -> Option<String> {
    TEX_DATA_ATTRS
        .iter()
        .find_map(|name| attr(el, name).filter(|v| !v.is_empty()))
        .map(|v| v.trim().to_string())
}

/// `aria-label`, accepted only when it looks like TeX (contains a backslash
/// or a dollar sign; `\(` and `\[` are covered by the backslash).
fn aria_label_tex(el: &Handle) -> Option<String> {
    let label = attr(el, "aria-label")?;
    if !label.is_empty() && (label.contains('\\') || label.contains('$')) {
        Some(label.trim().to_string())
    } else {
        None
    }
}
