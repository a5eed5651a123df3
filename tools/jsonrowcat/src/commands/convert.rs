use std::{
    io,
    path::{Path, PathBuf},
};

use anyhow::Result;
use arrow::record_batch::RecordBatch;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use jsonrow::{
    JsonlReader, ReadStats,
    arrow::{NestedPolicy, apply_nested_policy},
};

use super::ColumnArgs;
use crate::{
    format::OutputFormat,
    writer::{CsvWriter, ParquetWriter, RecordBatchWriter, TableWriter},
};

type BatchError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Args)]
pub struct ConvertArgs {
    /// Path to the JSON lines file (`-` reads stdin)
    input: PathBuf,

    #[command(flatten)]
    schema: ColumnArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of rows per record batch
    #[arg(short, long, default_value_t = 1024)]
    batch_size: usize,

    /// Policy for List / Map columns: drop | keep
    #[arg(long, value_parser = parse_nested_policy)]
    nested_policy: Option<NestedPolicy>,

    /// Maximum array nesting depth inside list columns
    #[arg(long)]
    max_nesting_depth: Option<usize>,
}

impl ConvertArgs {
    pub fn run(self) -> Result<()> {
        let nested_policy = self.nested_policy()?;

        let mut decoder = self.schema.decoder()?;
        if let Some(depth) = self.max_nesting_depth {
            let options = decoder.options().with_max_nesting_depth(depth);
            decoder = decoder.with_options(options);
        }
        let reader = JsonlReader::builder(Box::new(decoder))
            .with_batch_size(self.batch_size)
            .build();

        let mut writer: Box<dyn RecordBatchWriter> = match self.format {
            OutputFormat::Csv => Box::new(CsvWriter::new(self.output.as_deref())?),
            OutputFormat::Table => Box::new(TableWriter::new(self.output.as_deref())?),
            OutputFormat::Parquet => {
                let path = self
                    .output
                    .as_deref()
                    .ok_or_else(|| anyhow::anyhow!("Parquet output requires -o <file>"))?;
                Box::new(ParquetWriter::new(path)?)
            }
        };

        let pb = if self.reads_stdin() {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new(reader.line_count(&self.input)?);
            pb.set_style(
                ProgressStyle::with_template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec}, ETA: {eta})",
                )?
                .progress_chars("=>-"),
            );
            pb
        };

        let mut dropped_warned = false;
        let on_batch = |batch: RecordBatch| -> Result<(), BatchError> {
            let (batch, dropped_columns) = apply_nested_policy(&batch, nested_policy)?;
            if !dropped_warned && !dropped_columns.is_empty() {
                dropped_warned = true;
                tracing::warn!(
                    columns = %dropped_columns.join(", "),
                    "output policy skipped nested columns"
                );
            }
            pb.inc(batch.num_rows() as u64);
            writer.write_batch(batch)?;
            Ok(())
        };

        let stats = if self.reads_stdin() {
            reader.for_each_record_batch(io::stdin().lock(), on_batch)?
        } else {
            reader.for_each_record_batch_in_file(&self.input, on_batch)?
        };

        writer.finish()?;
        pb.finish_and_clear();
        report(&self.input, stats);
        Ok(())
    }

    fn reads_stdin(&self) -> bool {
        self.input == Path::new("-")
    }

    fn nested_policy(&self) -> Result<NestedPolicy> {
        let policy = self
            .nested_policy
            .unwrap_or_else(|| self.format.default_nested_policy());
        if policy == NestedPolicy::Keep && !self.format.supports_nested() {
            anyhow::bail!("--nested-policy keep is not supported for {:?} output", self.format);
        }
        Ok(policy)
    }
}

fn report(input: &Path, stats: ReadStats) {
    if stats.dropped > 0 {
        tracing::warn!(
            input = %input.display(),
            dropped = stats.dropped,
            lines = stats.lines,
            "lines skipped because they were not JSON objects"
        );
    }
}

fn parse_nested_policy(raw: &str) -> Result<NestedPolicy, String> {
    raw.parse()
}
