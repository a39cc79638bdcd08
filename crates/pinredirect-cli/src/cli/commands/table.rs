//! `pinredirect table` – list the active mappings.

use anyhow::Result;
use pinredirect_core::MappingTable;
use std::io::Write;

pub fn run_table(table: &MappingTable, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, table)?;
        writeln!(out)?;
        return Ok(());
    }
    for (i, m) in table.entries().iter().enumerate() {
        writeln!(out, "{i}\t{}\t{}", m.match_prefix, m.replacement_prefix)?;
    }
    Ok(())
}
