use std::io::Write;

use anyhow::{Context, Result};
use cit_model::CitationDocument;

/// Write `doc` as one JSON line.
pub fn write_json_line<W: Write>(writer: &mut W, doc: &CitationDocument) -> Result<()> {
    serde_json::to_writer(&mut *writer, doc).context("serialize citation document")?;
    writer.write_all(b"\n").context("write newline")?;
    Ok(())
}
