/// Wrap recovered LaTeX in `$`/`$$` delimiters unless it already carries its own.
///
/// Input that is already delimited (`$$…$$`, a leading `$` with a later `$`,
/// or a `\[` / `\(` prefix) is returned as-is so formulas whose source embeds
/// delimiters are not double-wrapped. Interior characters are not escaped.
pub fn wrap_tex(tex: &str, display: bool) -> String {
    let tex = tex.trim();
    if tex.is_empty() {
        return String::new();
    }
    if is_delimited(tex) {
        return tex.to_string();
    }
    if display {
        format!("$${tex}$$")
    } else {
        format!("${tex}$")
    }
}

fn is_delimited(tex: &str) -> bool {
    if tex.len() >= 4 && tex.starts_with("$$") && tex.ends_with("$$") {
        return true;
    }
    // A leading "$" counts as delimited as soon as a closing "$" exists anywhere
    // after it (so "$$" alone also passes through unchanged).
    if let Some(rest) = tex.strip_prefix('$') {
        if rest.contains('$') {
            return true;
        }
    }
    tex.starts_with("\\[") || tex.starts_with("\\(")
}
