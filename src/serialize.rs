//! Turns the processed container back into the two clipboard payloads: an
//! HTML string and a rendered plain-text approximation. The `html`/`head`/
//! `body` wrappers that `parse_document` adds around a fragment are treated
//! as transparent and never serialized.

use markup5ever_rcdom::{Handle, NodeData};

fn esc_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

fn esc_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn is_wrapper(tag: &str) -> bool {
    matches!(tag, "html" | "head" | "body")
}

fn is_void(tag: &str) -> bool {
    matches!(tag, "br" | "hr" | "img" | "meta" | "link" | "input")
}

fn is_block(tag: &str) -> bool {
    matches!(
        tag,
        "p" | "div"
            | "li"
            | "ul"
            | "ol"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "pre"
            | "blockquote"
            | "table"
            | "tr"
            | "section"
            | "article"
    )
}

/// Serialized HTML of everything under `container` (the `text/html` payload).
pub fn inner_html(container: &Handle) -> String {
    let mut out = String::new();
    write_node(container, &mut out, false);
    out
}

fn write_node(node: &Handle, out: &mut String, in_raw_text: bool) {
    match &node.data {
        NodeData::Document => {
            for c in node.children.borrow().iter() {
                write_node(c, out, in_raw_text);
            }
        }
        NodeData::Text { contents } => {
            let t = contents.borrow();
            if in_raw_text {
                out.push_str(&t);
            } else {
                out.push_str(&esc_text(&t));
            }
        }
        NodeData::Comment { contents } => {
            out.push_str("<!--");
            out.push_str(contents);
            out.push_str("-->");
        }
        NodeData::Element { name, attrs, .. } => {
            let tag = name.local.to_string().to_ascii_lowercase();
            if is_wrapper(&tag) {
                for c in node.children.borrow().iter() {
                    write_node(c, out, in_raw_text);
                }
                return;
            }

            out.push('<');
            out.push_str(&tag);
            for a in attrs.borrow().iter() {
                out.push(' ');
                out.push_str(&a.name.local);
                out.push_str("=\"");
                out.push_str(&esc_attr(&a.value));
                out.push('"');
            }

            if is_void(&tag) {
                out.push_str("/>");
                return;
            }
            out.push('>');

            // script/style content is raw text in HTML and must not be escaped.
            let raw = in_raw_text || tag == "script" || tag == "style";
            for c in node.children.borrow().iter() {
                write_node(c, out, raw);
            }

            out.push_str("</");
            out.push_str(&tag);
            out.push('>');
        }
        NodeData::Doctype { .. } | NodeData::ProcessingInstruction { .. } => {}
    }
}

/// Rendered plain text of everything under `container` (the `text/plain`
/// payload): whitespace collapsed outside `pre`, newline boundaries around
/// block elements, `<br>` as a newline, script/style content dropped.
pub fn inner_text(container: &Handle) -> String {
    let mut out = String::new();
    text_node(container, &mut out, false);
    let trimmed: &str = out.trim_matches(|c: char| c == '\n' || c == ' ');
    trimmed.to_string()
}

fn text_node(node: &Handle, out: &mut String, in_pre: bool) {
    match &node.data {
        NodeData::Document => {
            for c in node.children.borrow().iter() {
                text_node(c, out, in_pre);
            }
        }
        NodeData::Text { contents } => {
            let t = contents.borrow();
            if in_pre {
                out.push_str(&t);
            } else {
                out.push_str(&collapse_whitespace(&t));
            }
        }
        NodeData::Element { name, .. } => {
            let tag = name.local.to_string().to_ascii_lowercase();
            match tag.as_str() {
                "br" => {
                    out.push('\n');
                    return;
                }
                "script" | "style" => return,
                _ => {}
            }

            let block = is_block(&tag);
            if block {
                ensure_newline(out);
            }
            let pre = in_pre || tag == "pre";
            for c in node.children.borrow().iter() {
                text_node(c, out, pre);
            }
            if block {
                ensure_newline(out);
            }
        }
        NodeData::Comment { .. }
        | NodeData::Doctype { .. }
        | NodeData::ProcessingInstruction { .. } => {}
    }
}

fn ensure_newline(out: &mut String) {
    while out.ends_with(' ') {
        out.pop();
    }
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_ws = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !in_ws {
                out.push(' ');
                in_ws = true;
            }
        } else {
            out.push(ch);
            in_ws = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::parse_to_dom;

    fn html_of(input: &str) -> String {
        inner_html(&parse_to_dom(input).document)
    }

    fn text_of(input: &str) -> String {
        inner_text(&parse_to_dom(input).document)
    }

    #[test]
    fn wrappers_are_not_serialized() {
        assert_eq!(html_of("<p>hi</p>"), "<p>hi</p>");
    }

    #[test]
    fn text_and_attributes_are_escaped() {
        assert_eq!(
            html_of(r#"<p title="a&quot;b">1 &lt; 2 &amp; 3</p>"#),
            r#"<p title="a&quot;b">1 &lt; 2 &amp; 3</p>"#
        );
    }

    #[test]
    fn void_elements_are_self_closed() {
        assert_eq!(html_of("<p>a<br>b</p>"), "<p>a<br/>b</p>");
    }

    #[test]
    fn script_content_is_emitted_raw() {
        let html = html_of(r#"<p><script type="math/other">a < b</script></p>"#);
        assert_eq!(html, r#"<p><script type="math/other">a < b</script></p>"#);
    }

    #[test]
    fn inline_content_renders_on_one_line() {
        assert_eq!(text_of("<span>$$x^2$$</span>"), "$$x^2$$");
    }

    #[test]
    fn block_elements_introduce_newlines() {
        assert_eq!(text_of("<p>one</p><p>two</p>"), "one\ntwo");
        assert_eq!(text_of("<div>a<br>b</div>"), "a\nb");
    }

    #[test]
    fn whitespace_is_collapsed_outside_pre() {
        assert_eq!(text_of("<p>a \n\t b</p>"), "a b");
        assert_eq!(text_of("<pre>a \n b</pre>"), "a \n b");
    }

    #[test]
    fn script_and_style_text_is_dropped() {
        assert_eq!(text_of("<p>a<style>p{}</style>b</p>"), "ab");
    }
}
