//! JSON lines reader decoding each line against a declared row schema.

use std::{
    borrow::Cow,
    fs,
    io::BufRead,
    path::Path,
    sync::Arc,
};

use arrow::{datatypes::SchemaRef, record_batch::RecordBatch};
use jsonrow_arrow::{field_defs_to_arrow_schema, records_to_record_batch};
use jsonrow_core::{FieldDefs, LineDecoder, Record};
use memmap2::Mmap;
use rayon::prelude::*;

use crate::error::JsonlReaderError;

type BatchCallbackError = Box<dyn std::error::Error + Send + Sync>;

/// Line counters reported after a read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadStats {
    /// Non-blank input lines seen.
    pub lines: u64,
    /// Lines decoded into records.
    pub rows: u64,
    /// Lines the decoder dropped (not a JSON object).
    pub dropped: u64,
}

/// Reads JSON lines and emits Arrow record batches decoded by a
/// [`LineDecoder`].
pub struct JsonlReader {
    decoder: Arc<dyn LineDecoder>,
    arrow_schema: SchemaRef,
    batch_size: usize,
    parallel: bool,
}

/// Builder for configuring [`JsonlReader`].
pub struct JsonlReaderBuilder {
    decoder: Arc<dyn LineDecoder>,
    batch_size: usize,
    parallel: bool,
}

impl JsonlReader {
    /// Create a builder around a line decoder.
    pub fn builder(decoder: Box<dyn LineDecoder>) -> JsonlReaderBuilder {
        JsonlReaderBuilder {
            decoder: Arc::from(decoder),
            batch_size: 1024,
            parallel: true,
        }
    }

    /// Create a builder around a [`JsonRowDecoder`](jsonrow_json::JsonRowDecoder)
    /// built from column names, a column type string and an optional rename
    /// list.
    #[cfg(feature = "json")]
    pub fn json(
        column_names: &str,
        column_types: &str,
        rename_spec: Option<&str>,
    ) -> Result<JsonlReaderBuilder, JsonlReaderError> {
        let decoder =
            jsonrow_json::JsonRowDecoder::init(column_names, column_types, rename_spec)?;
        Ok(Self::builder(Box::new(decoder)))
    }

    pub fn new(decoder: Box<dyn LineDecoder>) -> Self {
        Self::builder(decoder).build()
    }

    /// Row-shape descriptor of the emitted records.
    pub fn field_defs(&self) -> &FieldDefs {
        self.decoder.field_defs()
    }

    pub fn arrow_schema(&self) -> SchemaRef {
        Arc::clone(&self.arrow_schema)
    }

    fn mmap_file(&self, path: &Path) -> Result<Option<Mmap>, JsonlReaderError> {
        let file = fs::File::open(path)?;
        if file.metadata()?.len() == 0 {
            return Ok(None);
        }
        Ok(Some(unsafe { Mmap::map(&file) }?))
    }

    /// Decode a slice of lines. Order is preserved; `None` marks a dropped
    /// line.
    pub fn decode_lines<S: AsRef<str> + Sync>(&self, lines: &[S]) -> Vec<Option<Record>> {
        let decoder = self.decoder.as_ref();
        if self.parallel {
            lines
                .par_iter()
                .map(|line| decoder.decode(line.as_ref()))
                .collect()
        } else {
            lines
                .iter()
                .map(|line| decoder.decode(line.as_ref()))
                .collect()
        }
    }

    /// Read all lines of a file and emit Arrow RecordBatches to callback.
    pub fn for_each_record_batch_in_file(
        &self,
        path: &Path,
        callback: impl FnMut(RecordBatch) -> Result<(), BatchCallbackError>,
    ) -> Result<ReadStats, JsonlReaderError> {
        let mut sink = BatchSink::new(self, callback);
        if let Some(mmap) = self.mmap_file(path)? {
            let mut chunk: Vec<Cow<'_, str>> = Vec::with_capacity(self.batch_size);
            for line in split_lines(&mmap) {
                chunk.push(String::from_utf8_lossy(line));
                if chunk.len() >= self.batch_size {
                    sink.push_lines(&chunk)?;
                    chunk.clear();
                }
            }
            sink.push_lines(&chunk)?;
        }
        let stats = sink.finish()?;
        tracing::info!(
            path = %path.display(),
            lines = stats.lines,
            rows = stats.rows,
            dropped = stats.dropped,
            "finished reading"
        );
        Ok(stats)
    }

    /// Read all lines from `input` and emit Arrow RecordBatches to callback.
    pub fn for_each_record_batch(
        &self,
        mut input: impl BufRead,
        callback: impl FnMut(RecordBatch) -> Result<(), BatchCallbackError>,
    ) -> Result<ReadStats, JsonlReaderError> {
        let mut sink = BatchSink::new(self, callback);
        let mut chunk: Vec<String> = Vec::with_capacity(self.batch_size);
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = trim_line_end(&buf);
            if is_blank(line) {
                continue;
            }
            chunk.push(String::from_utf8_lossy(line).into_owned());
            if chunk.len() >= self.batch_size {
                sink.push_lines(&chunk)?;
                chunk.clear();
            }
        }
        sink.push_lines(&chunk)?;
        let stats = sink.finish()?;
        tracing::info!(
            lines = stats.lines,
            rows = stats.rows,
            dropped = stats.dropped,
            "finished reading"
        );
        Ok(stats)
    }

    /// Count the non-blank lines of a file without decoding them.
    pub fn line_count(&self, path: &Path) -> Result<u64, JsonlReaderError> {
        Ok(self
            .mmap_file(path)?
            .map_or(0, |mmap| split_lines(&mmap).count() as u64))
    }
}

impl JsonlReaderBuilder {
    /// Set the number of records per RecordBatch (default: 1024).
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size.max(1);
        self
    }

    /// Decode each batch of lines on the rayon thread pool (default: true).
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Build the reader.
    pub fn build(self) -> JsonlReader {
        let arrow_schema = Arc::new(field_defs_to_arrow_schema(self.decoder.field_defs()));
        JsonlReader {
            decoder: self.decoder,
            arrow_schema,
            batch_size: self.batch_size,
            parallel: self.parallel,
        }
    }
}

/// Accumulates decoded rows and flushes them in batches of `batch_size`.
struct BatchSink<'r, F> {
    reader: &'r JsonlReader,
    callback: F,
    rows: Vec<Record>,
    stats: ReadStats,
}

impl<'r, F> BatchSink<'r, F>
where
    F: FnMut(RecordBatch) -> Result<(), BatchCallbackError>,
{
    fn new(reader: &'r JsonlReader, callback: F) -> Self {
        Self {
            reader,
            callback,
            rows: Vec::with_capacity(reader.batch_size),
            stats: ReadStats::default(),
        }
    }

    fn push_lines<S: AsRef<str> + Sync>(&mut self, lines: &[S]) -> Result<(), JsonlReaderError> {
        for record in self.reader.decode_lines(lines) {
            self.stats.lines += 1;
            match record {
                Some(record) => {
                    self.stats.rows += 1;
                    self.rows.push(record);
                }
                None => self.stats.dropped += 1,
            }
        }

        while self.rows.len() >= self.reader.batch_size {
            let rest = self.rows.split_off(self.reader.batch_size);
            let full = std::mem::replace(&mut self.rows, rest);
            self.emit(&full)?;
        }
        Ok(())
    }

    fn emit(&mut self, rows: &[Record]) -> Result<(), JsonlReaderError> {
        if rows.is_empty() {
            return Ok(());
        }
        let batch = records_to_record_batch(&self.reader.arrow_schema, rows)?;
        (self.callback)(batch).map_err(JsonlReaderError::Callback)
    }

    fn finish(mut self) -> Result<ReadStats, JsonlReaderError> {
        let rows = std::mem::take(&mut self.rows);
        self.emit(&rows)?;
        Ok(self.stats)
    }
}

/// Non-blank lines of `data`, without their `\n` / `\r\n` terminators.
fn split_lines(data: &[u8]) -> impl Iterator<Item = &[u8]> {
    data.split(|b| *b == b'\n')
        .map(trim_line_end)
        .filter(|line| !is_blank(line))
}

fn trim_line_end(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn is_blank(line: &[u8]) -> bool {
    line.iter().all(u8::is_ascii_whitespace)
}
