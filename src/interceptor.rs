//! The copy interceptor. One `on_copy` call snapshots the selection, rewrites
//! rendered math in a detached clone, and writes the payload pair to the
//! sink; the outcome tells the caller whether the default copy action should
//! be suppressed.

use tracing::debug;

use crate::clipboard::ClipboardSink;
use crate::dom::parse_to_dom;
use crate::process::process_container;
use crate::selection::SelectionProvider;
use crate::serialize::{inner_html, inner_text};

/// Whether a copy event was handled or left to the default behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Guard not passed (or interceptor not installed): nothing was written
    /// and the default copy action must proceed.
    Passthrough,
    /// The clipboard was overwritten and the default action is suppressed.
    Rewritten,
}

/// Rewrite one selection fragment, returning the `(text/plain, text/html)`
/// payload pair. Pure: builds its own DOM from the string and discards it.
pub fn rewrite_fragment(fragment: &str) -> (String, String) {
    let dom = parse_to_dom(fragment);
    process_container(&dom.document);
    (inner_text(&dom.document), inner_html(&dom.document))
}

/// Copy-event interceptor with an explicit lifecycle: construct it over a
/// selection provider, `install()` it, and hand each copy event a sink via
/// `on_copy`. An uninstalled interceptor never touches the clipboard.
pub struct ClipboardMathRewriter<P: SelectionProvider> {
    provider: P,
    installed: bool,
}

impl<P: SelectionProvider> ClipboardMathRewriter<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            installed: false,
        }
    }

    pub fn install(&mut self) {
        self.installed = true;
    }

    pub fn uninstall(&mut self) {
        self.installed = false;
    }

    pub fn is_installed(&self) -> bool {
        self.installed
    }

    /// Handle one copy event. The plain-text write is required and its
    /// failure propagates so the caller can fall back to the default copy
    /// action; the HTML write is best-effort and its failure is swallowed.
    pub fn on_copy(&self, sink: &mut dyn ClipboardSink) -> Result<CopyOutcome, String> {
        if !self.installed {
            return Ok(CopyOutcome::Passthrough);
        }

        let Some(snapshot) = self.provider.selection() else {
            return Ok(CopyOutcome::Passthrough);
        };
        if snapshot.is_collapsed() {
            debug!("collapsed selection, leaving default copy behavior alone");
            return Ok(CopyOutcome::Passthrough);
        }

        let (text, html) = rewrite_fragment(&snapshot.container_html());
        sink.set_text(&text)?;
        if let Err(err) = sink.set_html(&html) {
            debug!(error = %err, "html clipboard payload rejected, plain text kept");
        }
        Ok(CopyOutcome::Rewritten)
    }
}
