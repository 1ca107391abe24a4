use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use cit_cli::batch::{BatchOptions, BatchSummary, run_batch};
use cit_model::ExternalMetadata;
use cit_output::OutputFormat;
use cit_pipeline::build_default_pipeline;

use crate::cli::{OutputFormatArg, TransformArgs};
use crate::summary::apply_table_style;

pub fn run_stages() -> Result<()> {
    let pipeline = build_default_pipeline("", Arc::new(ExternalMetadata::new()));
    let mut table = Table::new();
    table.set_header(vec!["#", "Stage"]);
    apply_table_style(&mut table);
    for (index, name) in pipeline.step_names().into_iter().enumerate() {
        table.add_row(vec![(index + 1).to_string(), name.to_string()]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_transform(args: &TransformArgs) -> Result<BatchSummary> {
    let span = info_span!("transform", collection = %args.collection);
    let _guard = span.enter();
    let started = Instant::now();

    let metadata = match &args.external_metadata {
        Some(path) => {
            let metadata = ExternalMetadata::from_path(path)
                .with_context(|| format!("load external metadata {}", path.display()))?;
            info!(records = metadata.len(), "loaded external metadata");
            metadata
        }
        None => ExternalMetadata::new(),
    };
    let pipeline = build_default_pipeline(&args.collection, Arc::new(metadata));

    let input = open_input(&args.input)?;
    let output = open_output(args.output.as_deref())?;
    let options = BatchOptions {
        format: match args.format {
            OutputFormatArg::Xml => OutputFormat::Xml,
            OutputFormatArg::Json => OutputFormat::Json,
        },
        fail_fast: args.fail_fast,
    };

    let summary = run_batch(input, output, &pipeline, options)?;
    info!(
        read = summary.read,
        indexed = summary.indexed,
        skipped = summary.skipped(),
        elapsed_ms = started.elapsed().as_millis(),
        "transform complete"
    );
    Ok(summary)
}

fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(path).with_context(|| format!("open input {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("create output {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}
