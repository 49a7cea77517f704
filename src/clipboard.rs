//! The clipboard seam. `set_text` is the payload that must land; `set_html`
//! is best-effort and callers are expected to swallow its failure.

pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), String>;
    fn set_html(&mut self, html: &str) -> Result<(), String>;
}

/// System clipboard backed by `arboard`. Initialization can fail on headless
/// platforms; callers should treat that as non-fatal.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, String> {
        let inner = arboard::Clipboard::new().map_err(|e| format!("clipboard init: {e}"))?;
        Ok(Self { inner })
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        self.inner
            .set_text(text.to_owned())
            .map_err(|e| format!("clipboard set text: {e}"))
    }

    fn set_html(&mut self, html: &str) -> Result<(), String> {
        self.inner
            .set_html(html.to_owned(), None::<String>)
            .map_err(|e| format!("clipboard set html: {e}"))
    }
}

/// In-memory sink: captures payloads for the CLI and for tests, optionally
/// rejecting the HTML payload to exercise the best-effort path.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub text: Option<String>,
    pub html: Option<String>,
    pub reject_html: bool,
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        self.text = Some(text.to_string());
        Ok(())
    }

    fn set_html(&mut self, html: &str) -> Result<(), String> {
        if self.reject_html {
            return Err("html payload rejected".to_string());
        }
        self.html = Some(html.to_string());
        Ok(())
    }
}
