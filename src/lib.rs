//! Rewrites rendered math (MathJax / MathML output) in a copied HTML fragment
//! back into its LaTeX source, producing the plain-text and HTML clipboard
//! payloads. The core works on a detached DOM built from the fragment string;
//! the platform seams (selection input, clipboard output) live behind the
//! `SelectionProvider` and `ClipboardSink` traits so everything is testable
//! without a browser runtime.

pub mod clipboard;
pub mod dom;
pub mod extract;
pub mod interceptor;
pub mod process;
pub mod selection;
pub mod serialize;
pub mod tex;

pub use clipboard::{ClipboardSink, MemoryClipboard, SystemClipboard};
pub use interceptor::{rewrite_fragment, ClipboardMathRewriter, CopyOutcome};
pub use selection::{SelectionProvider, SelectionSnapshot, StaticSelection};
