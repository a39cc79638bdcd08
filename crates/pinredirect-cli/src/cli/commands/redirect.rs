//! `pinredirect redirect <url>` – resolve and hand off to a navigator.

use anyhow::{Context, Result};
use pinredirect_core::config::PinConfig;
use pinredirect_core::navigate::NavigatorKind;
use pinredirect_core::{MappingTable, Redirector};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

pub fn run_redirect(
    cfg: &PinConfig,
    table: &MappingTable,
    url: &str,
    html: bool,
    output: Option<&Path>,
) -> Result<()> {
    let kind = navigator_kind(cfg, html);
    let redirector = Redirector::new(table);
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("create output file {}", path.display()))?;
            let mut navigator = kind.build(BufWriter::new(file));
            redirector.redirect_to(url, &mut navigator);
            navigator
                .finish()
                .with_context(|| format!("write output file {}", path.display()))?;
        }
        None => {
            let mut navigator = kind.build(io::stdout().lock());
            redirector.redirect_to(url, &mut navigator);
            navigator.finish().context("write to stdout")?;
        }
    }
    Ok(())
}

fn navigator_kind(cfg: &PinConfig, html: bool) -> NavigatorKind {
    if html {
        NavigatorKind::Html
    } else {
        cfg.navigator
    }
}
