//! Batch projection of JSON-lines citation input.
//!
//! Each non-blank input line holds one raw citation. A line that does not
//! parse, or a citation whose pipeline run fails, is either skipped (the
//! default) or aborts the batch when `fail_fast` is set.

use std::collections::BTreeMap;
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use cit_model::{CitationDocument, RawCitation};
use cit_output::{OutputFormat, SolrXmlWriter, write_json_line};
use cit_pipeline::CitationPipeline;
use tracing::{debug, warn};

/// Options for one batch run.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    pub format: OutputFormat,
    pub fail_fast: bool,
}

/// Counts collected over a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Non-blank input lines.
    pub read: usize,
    /// Documents written to the output.
    pub indexed: usize,
    /// Lines that were not a valid raw citation.
    pub malformed: usize,
    /// Citations whose pipeline run failed.
    pub failed: usize,
    /// Failed citations keyed by the stage that aborted them.
    pub failures_by_stage: BTreeMap<String, usize>,
}

impl BatchSummary {
    pub fn skipped(&self) -> usize {
        self.malformed + self.failed
    }
}

enum DocumentSink<W: Write> {
    Xml(SolrXmlWriter<W>),
    Json(W),
}

impl<W: Write> DocumentSink<W> {
    fn new(writer: W, format: OutputFormat) -> Result<Self> {
        Ok(match format {
            OutputFormat::Xml => Self::Xml(SolrXmlWriter::new(writer)?),
            OutputFormat::Json => Self::Json(writer),
        })
    }

    fn write(&mut self, doc: &CitationDocument) -> Result<()> {
        match self {
            Self::Xml(writer) => writer.write_document(doc),
            Self::Json(writer) => write_json_line(writer, doc),
        }
    }

    fn finish(self) -> Result<()> {
        match self {
            Self::Xml(writer) => {
                writer.finish()?;
            }
            Self::Json(mut writer) => writer.flush().context("flush output")?,
        }
        Ok(())
    }
}

/// Run `pipeline` over every citation in `input`, writing documents to `output`.
///
/// # Errors
///
/// Fails on I/O errors, and on the first bad citation when
/// `options.fail_fast` is set.
pub fn run_batch<R, W>(
    input: R,
    output: W,
    pipeline: &CitationPipeline,
    options: BatchOptions,
) -> Result<BatchSummary>
where
    R: BufRead,
    W: Write,
{
    let mut sink = DocumentSink::new(output, options.format)?;
    let mut summary = BatchSummary::default();

    for (index, line) in input.lines().enumerate() {
        let line_number = index + 1;
        let line = line.with_context(|| format!("read input line {line_number}"))?;
        if line.trim().is_empty() {
            continue;
        }
        summary.read += 1;

        let raw: RawCitation = match serde_json::from_str(&line) {
            Ok(raw) => raw,
            Err(error) if options.fail_fast => {
                return Err(anyhow::Error::new(error)
                    .context(format!("parse citation on line {line_number}")));
            }
            Err(error) => {
                warn!(line = line_number, %error, "malformed citation, skipping");
                summary.malformed += 1;
                continue;
            }
        };

        match pipeline.execute(&raw) {
            Ok(doc) => {
                sink.write(&doc)
                    .with_context(|| format!("write citation from line {line_number}"))?;
                summary.indexed += 1;
            }
            Err(error) if options.fail_fast => {
                return Err(anyhow::Error::new(error)
                    .context(format!("project citation on line {line_number}")));
            }
            Err(error) => {
                warn!(
                    line = line_number,
                    stage = error.stage_name(),
                    %error,
                    "citation failed, skipping"
                );
                summary.failed += 1;
                *summary
                    .failures_by_stage
                    .entry(error.stage_name().to_string())
                    .or_default() += 1;
            }
        }
    }

    sink.finish()?;
    debug!(
        read = summary.read,
        indexed = summary.indexed,
        skipped = summary.skipped(),
        "batch finished"
    );
    Ok(summary)
}
