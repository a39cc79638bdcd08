//! `pinredirect resolve <url>` – print the pinned URL.

use anyhow::Result;
use pinredirect_core::{resolve_target, MappingTable};
use std::io::Write;

pub fn run_resolve(
    table: &MappingTable,
    url: &str,
    explain: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    if explain {
        writeln!(err, "{}", explain_match(table, url))?;
    }
    writeln!(out, "{}", resolve_target(url, table))?;
    Ok(())
}

fn explain_match(table: &MappingTable, url: &str) -> String {
    match table.find(url) {
        Some((index, m)) => format!(
            "matched mapping #{index}: {} -> {}",
            m.match_prefix, m.replacement_prefix
        ),
        None => "no mapping matched; URL unchanged".to_string(),
    }
}
