use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use latex_from_mathjax::clipboard::{ClipboardSink, MemoryClipboard, SystemClipboard};
use latex_from_mathjax::interceptor::{ClipboardMathRewriter, CopyOutcome};
use latex_from_mathjax::selection::StaticSelection;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Input HTML fragment file (reads stdin when omitted).
    #[arg(long)]
    html_file: Option<PathBuf>,

    /// Print the rewritten HTML payload instead of the plain-text one.
    #[arg(long)]
    html: bool,

    /// Also write both payloads to the system clipboard.
    #[arg(long)]
    clipboard: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut fragment = String::new();
    match &args.html_file {
        Some(path) => {
            File::open(path)
                .with_context(|| format!("open {}", path.display()))?
                .read_to_string(&mut fragment)
                .context("read html")?;
        }
        None => {
            std::io::stdin()
                .read_to_string(&mut fragment)
                .context("read stdin")?;
        }
    }

    let mut rewriter = ClipboardMathRewriter::new(StaticSelection::fragment(&fragment));
    rewriter.install();

    let mut payload = MemoryClipboard::default();
    let outcome = rewriter
        .on_copy(&mut payload)
        .map_err(|e| anyhow!("rewrite: {e}"))?;
    if outcome == CopyOutcome::Passthrough {
        bail!("empty input: nothing to rewrite");
    }

    let text = payload.text.unwrap_or_default();
    let html = payload.html.unwrap_or_default();

    if args.clipboard {
        let mut system = SystemClipboard::new().map_err(|e| anyhow!(e))?;
        system.set_text(&text).map_err(|e| anyhow!(e))?;
        if let Err(err) = system.set_html(&html) {
            eprintln!("warning: html clipboard payload rejected: {err}");
        }
    }

    println!("{}", if args.html { html } else { text });
    Ok(())
}
