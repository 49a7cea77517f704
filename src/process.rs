//! Container rewriting: find every rendered math node in a detached container
//! and either substitute its recovered LaTeX as a text node or remove it.

use markup5ever_rcdom::Handle;

use crate::dom::{attr, collect_descendants, detach, elem_tag_lower, has_class, replace_with_text, text_content};
use crate::extract::{extract_tex, is_tex_script};
use crate::tex::wrap_tex;

/// Math-rendering patterns: the MathJax v3 container tag, the v2 class names,
/// raw MathML, or an explicit math accessibility role.
pub fn is_math_element(h: &Handle) -> bool {
    let Some(tag) = elem_tag_lower(h) else {
        return false;
    };
    if tag == "mjx-container" || tag == "math" {
        return true;
    }
    if has_class(h, "MathJax") || has_class(h, "MathJax_Display") || has_class(h, "mjx-math") {
        return true;
    }
    attr(h, "role").as_deref() == Some("math")
}

fn is_display_math(h: &Handle, tag: &str) -> bool {
    has_class(h, "MathJax_Display")
        || (tag == "mjx-container" && attr(h, "display").as_deref() == Some("true"))
        || attr(h, "style").unwrap_or_default().contains("block")
}

/// Rewrite all math nodes under `container` in place.
///
/// Pass 1 handles rendered math elements: recovered LaTeX replaces the
/// element as a single text node, unrecoverable math is removed outright so
/// the formula never shows up as both glyphs and source. Pass 2 picks up bare
/// legacy `script[type^="math/tex"]` nodes that were not consumed inside a
/// pass-1 match; those always carry their source as text and are always
/// replaced. Nodes detached by an earlier (outer) replacement are left alone.
pub fn process_container(container: &Handle) {
    for el in collect_descendants(container, &is_math_element) {
        match extract_tex(&el) {
            Some(tex) if !tex.is_empty() => {
                let tag = elem_tag_lower(&el).unwrap_or_default();
                let display = is_display_math(&el, &tag);
                replace_with_text(&el, &wrap_tex(&tex, display));
            }
            _ => detach(&el),
        }
    }

    for script in collect_descendants(container, &is_tex_script) {
        let ty = attr(&script, "type").unwrap_or_default();
        let display = ty.contains("display");
        let tex = text_content(&script);
        replace_with_text(&script, &wrap_tex(&tex, display));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_to_dom;
    use markup5ever_rcdom::RcDom;

    fn processed(html: &str) -> RcDom {
        let dom = parse_to_dom(html);
        process_container(&dom.document);
        dom
    }

    fn doc_text(dom: &RcDom) -> String {
        text_content(&dom.document)
    }

    #[test]
    fn no_math_selector_match_survives() {
        let dom = processed(concat!(
            r#"<mjx-container aria-label="\alpha"></mjx-container>"#,
            r#"<span class="MathJax" data-tex="b"></span>"#,
            r#"<math><mi>x</mi></math>"#,
            r#"<p role="math">glyphs only</p>"#,
        ));
        assert!(collect_descendants(&dom.document, &is_math_element).is_empty());
    }

    #[test]
    fn display_class_selects_block_delimiters() {
        let dom = processed(r#"<span class="MathJax_Display" data-tex="x^2"></span>"#);
        assert_eq!(doc_text(&dom), "$$x^2$$");
    }

    #[test]
    fn mjx_container_display_attribute_selects_block_delimiters() {
        let dom = processed(r#"<mjx-container display="true" data-tex="x^2"></mjx-container>"#);
        assert_eq!(doc_text(&dom), "$$x^2$$");

        // display="true" is only honored on mjx-container itself
        let dom = processed(r#"<span class="MathJax" display="true" data-tex="x^2"></span>"#);
        assert_eq!(doc_text(&dom), "$x^2$");
    }

    #[test]
    fn block_style_selects_block_delimiters() {
        let dom = processed(r#"<span class="mjx-math" style="display: block" data-tex="x^2"></span>"#);
        assert_eq!(doc_text(&dom), "$$x^2$$");
    }

    #[test]
    fn inline_math_gets_single_dollars() {
        let dom = processed(r#"<span class="MathJax" data-tex="x^2"></span>"#);
        assert_eq!(doc_text(&dom), "$x^2$");
    }

    #[test]
    fn unrecoverable_math_is_removed_not_replaced() {
        let dom = processed(r#"<p>before <math><mi>x</mi></math> after</p>"#);
        assert_eq!(doc_text(&dom), "before  after");
    }

    #[test]
    fn aria_label_without_markers_is_removed() {
        let dom = processed(r#"<span role="math" aria-label="x squared">glyphs</span>"#);
        assert_eq!(doc_text(&dom), "");
    }

    #[test]
    fn bare_tex_script_is_always_replaced() {
        let dom = processed(r#"<p><script type="math/tex;mode=display">y=mx+b</script></p>"#);
        assert_eq!(doc_text(&dom), "$$y=mx+b$$");
    }

    #[test]
    fn tex_script_inside_math_element_is_consumed_once() {
        // The script feeds pass 1 and is detached with the replaced element,
        // so pass 2 must not duplicate the formula.
        let dom = processed(
            r#"<span class="MathJax"><script type="math/tex">a+b</script></span>"#,
        );
        assert_eq!(doc_text(&dom), "$a+b$");
    }

    #[test]
    fn nested_match_inside_outer_match_is_a_noop() {
        let dom = processed(
            r#"<mjx-container data-tex="outer"><math><mi>x</mi></math></mjx-container>"#,
        );
        assert_eq!(doc_text(&dom), "$outer$");
    }

    #[test]
    fn already_delimited_source_is_not_double_wrapped() {
        let dom = processed(r#"<span class="MathJax_Display" data-tex="$$x^2$$"></span>"#);
        assert_eq!(doc_text(&dom), "$$x^2$$");
    }
}
