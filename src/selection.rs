//! The selection seam. A provider hands the interceptor a snapshot of the
//! user's current selection as cloned range fragments (HTML strings, in
//! selection order); where that snapshot comes from, a real browser bridge
//! or a fixed string in tests and the CLI, is the provider's business.

/// Cloned contents of one selection, ordered as the ranges were selected.
#[derive(Clone, Debug, Default)]
pub struct SelectionSnapshot {
    ranges: Vec<String>,
}

impl SelectionSnapshot {
    pub fn new(ranges: Vec<String>) -> Self {
        Self { ranges }
    }

    /// A selection with no ranges, or only zero-length ones, is collapsed and
    /// must not trigger a rewrite.
    pub fn is_collapsed(&self) -> bool {
        self.ranges.iter().all(|r| r.is_empty())
    }

    /// All range fragments appended into one detached container fragment.
    pub fn container_html(&self) -> String {
        self.ranges.concat()
    }
}

pub trait SelectionProvider {
    /// `None` means no active selection at all.
    fn selection(&self) -> Option<SelectionSnapshot>;
}

/// Fixed-content provider used by the CLI and by tests.
#[derive(Clone, Debug, Default)]
pub struct StaticSelection {
    snapshot: Option<SelectionSnapshot>,
}

impl StaticSelection {
    /// No selection at all.
    pub fn none() -> Self {
        Self { snapshot: None }
    }

    /// A single-range selection holding `html`.
    pub fn fragment(html: &str) -> Self {
        Self {
            snapshot: Some(SelectionSnapshot::new(vec![html.to_string()])),
        }
    }

    /// A multi-range selection.
    pub fn ranges(ranges: Vec<String>) -> Self {
        Self {
            snapshot: Some(SelectionSnapshot::new(ranges)),
        }
    }
}

impl SelectionProvider for StaticSelection {
    fn selection(&self) -> Option<SelectionSnapshot> {
        self.snapshot.clone()
    }
}
