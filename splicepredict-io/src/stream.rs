//! Batch-wise annotation of a VEP table.
//!
//! Rows are read in bounded batches, annotated in parallel on a rayon pool and written in
//! input order before the next batch is read, so memory use depends on the batch size and
//! not on the input size.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use splicepredict_classify::annotate;
use splicepredict_core::{
    Annotation, Column, DELIMITER, IndexedRow, RecordError, RecordId, Schema, SpliceVariantType,
    normalize_fields,
};

use crate::config::{AnnotateConfig, MalformedPolicy};
use crate::error::Result;
use crate::reader::{RawLine, VepReader};
use crate::writer::write_header;

///
/// Counts collected over one run.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StreamSummary {
    pub rows_read: u64,
    pub rows_annotated: u64,
    pub rows_skipped: u64,
    pub by_type: BTreeMap<SpliceVariantType, u64>,
}

impl StreamSummary {
    pub fn count(&self, splice_variant_type: SpliceVariantType) -> u64 {
        self.by_type.get(&splice_variant_type).copied().unwrap_or(0)
    }
}

///
/// Normalize and annotate one data line against the schema.
///
/// The input line is kept verbatim; only the derived fields are computed. Columns the
/// engine reads must be UTF-8, and an invalid byte in one of them rejects the row as
/// malformed. Other columns may hold any bytes.
///
pub fn annotate_line(
    line: &RawLine,
    schema: &Schema,
    sentinel: &str,
) -> std::result::Result<Annotation, RecordError> {
    let decoded: Vec<Cow<'_, str>> = line
        .bytes
        .split(|b| *b == DELIMITER as u8)
        .map(String::from_utf8_lossy)
        .collect();
    let fields: Vec<&str> = decoded.iter().map(|f| f.as_ref()).collect();
    let row = IndexedRow::new(schema, &fields);

    // lossy decoding only allocates when it had to replace invalid bytes
    let invalid = Column::ALL
        .into_iter()
        .find(|c| matches!(decoded.get(schema.position(*c)), Some(Cow::Owned(_))));
    if let Some(column) = invalid {
        return Err(RecordError::MalformedRecord {
            id: RecordId::from_line(line.number)
                .with_name(row.name())
                .with_feature(row.feature()),
            column: column.name().to_string(),
            value: fields[schema.position(column)].to_string(),
        });
    }

    let record = normalize_fields(&row, schema.width(), fields.len(), line.number, sentinel)?;
    Ok(annotate(&record))
}

fn make_spinner(enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .template("{spinner:.green} [{elapsed}] {msg} ({per_sec})")
    {
        spinner.set_style(style.tick_strings(&["-", "\\", "|", "/"]));
    }
    spinner.set_message("Annotating records...");
    spinner
}

fn run_batches<R: BufRead, W: Write + ?Sized>(
    reader: &mut VepReader<R>,
    writer: &mut W,
    config: &AnnotateConfig,
    pool: Option<&ThreadPool>,
    spinner: &ProgressBar,
) -> Result<StreamSummary> {
    let mut summary = StreamSummary::default();
    let mut batch: Vec<RawLine> = Vec::with_capacity(config.batch_size);

    while reader.read_batch(config.batch_size, &mut batch)? > 0 {
        let schema = reader.schema();
        let map_batch = || -> Vec<std::result::Result<Annotation, RecordError>> {
            batch
                .par_iter()
                .map(|line| annotate_line(line, schema, &config.sentinel))
                .collect()
        };
        let results = match pool {
            Some(pool) => pool.install(map_batch),
            None => map_batch(),
        };

        for (line, result) in batch.iter().zip(results) {
            summary.rows_read += 1;
            match result {
                Ok(annotation) => {
                    writer.write_all(&line.bytes)?;
                    for field in annotation.to_fields(&config.sentinel) {
                        write!(writer, "{}{}", DELIMITER, field)?;
                    }
                    writeln!(writer)?;

                    summary.rows_annotated += 1;
                    *summary
                        .by_type
                        .entry(annotation.splice_variant_type)
                        .or_insert(0) += 1;
                }
                Err(err) if err.is_row_level() && config.on_malformed == MalformedPolicy::Skip => {
                    warn!("Skipping row: {}", err);
                    summary.rows_skipped += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }

        spinner.inc(batch.len() as u64);
        spinner.set_message(format!("Processed {} records", summary.rows_read));
    }

    Ok(summary)
}

///
/// Annotate every row of a VEP table and write the extended table.
///
/// # Arguments
/// - input: a line reader over the table (see [`open_input`](crate::open_input))
/// - output: where the annotated table goes; use [`std::io::sink`] to only collect counts
/// - config: run settings
///
/// # Errors
/// Header problems always fail. A malformed row fails the run only under
/// [`MalformedPolicy::Abort`]; otherwise it is logged and counted as skipped.
///
pub fn annotate_stream<R: BufRead, W: Write + ?Sized>(
    input: R,
    output: &mut W,
    config: &AnnotateConfig,
) -> Result<StreamSummary> {
    config.validate()?;
    let start = Instant::now();

    let mut reader = VepReader::new(input)?;
    write_header(
        output,
        reader.metadata(),
        reader.header(),
        &config.output_columns,
        config.keep_metadata,
    )?;

    // a dedicated pool only when the thread count is pinned; otherwise rayon's global one
    let pool = match config.threads {
        Some(threads) => Some(ThreadPoolBuilder::new().num_threads(threads).build()?),
        None => None,
    };

    let spinner = make_spinner(config.progress);
    let summary = run_batches(&mut reader, output, config, pool.as_ref(), &spinner)?;
    output.flush()?;
    spinner.finish_with_message("Done!");

    info!(
        "Read {} rows: {} annotated, {} skipped in {:.2?}",
        summary.rows_read,
        summary.rows_annotated,
        summary.rows_skipped,
        start.elapsed()
    );
    for (splice_variant_type, n) in &summary.by_type {
        info!("  {}: {}", splice_variant_type, n);
    }

    Ok(summary)
}
