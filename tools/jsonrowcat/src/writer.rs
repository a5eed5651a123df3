use std::{
    fs,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use arrow::record_batch::RecordBatch;

pub trait RecordBatchWriter {
    fn write_batch(&mut self, batch: RecordBatch) -> Result<()>;
    fn finish(&mut self) -> Result<()>;
}

fn open_dest(output: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match output {
        Some(path) => Box::new(BufWriter::new(
            fs::File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

// --- CSV ---

pub struct CsvWriter {
    dest: Box<dyn Write>,
    header_written: bool,
    flush_each_batch: bool,
}

impl CsvWriter {
    pub fn new(output: Option<&Path>) -> Result<Self> {
        Ok(Self {
            dest: open_dest(output)?,
            header_written: false,
            flush_each_batch: output.is_none(),
        })
    }
}

impl RecordBatchWriter for CsvWriter {
    fn write_batch(&mut self, batch: RecordBatch) -> Result<()> {
        let mut csv_writer = arrow::csv::WriterBuilder::new()
            .with_header(!self.header_written)
            .build(&mut self.dest);
        self.header_written = true;
        csv_writer.write(&batch)?;
        drop(csv_writer);
        if self.flush_each_batch {
            self.dest.flush()?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.dest.flush()?;
        Ok(())
    }
}

// --- Parquet ---

pub struct ParquetWriter {
    output_path: PathBuf,
    inner: Option<parquet::arrow::ArrowWriter<fs::File>>,
}

impl ParquetWriter {
    pub fn new(output: &Path) -> Result<Self> {
        Ok(Self {
            output_path: output.to_path_buf(),
            inner: None,
        })
    }
}

impl RecordBatchWriter for ParquetWriter {
    fn write_batch(&mut self, batch: RecordBatch) -> Result<()> {
        let writer = match &mut self.inner {
            Some(writer) => writer,
            inner @ None => {
                let file = fs::File::create(&self.output_path)?;
                let props = parquet::file::properties::WriterProperties::builder().build();
                inner.insert(parquet::arrow::ArrowWriter::try_new(
                    file,
                    batch.schema(),
                    Some(props),
                )?)
            }
        };
        writer.write(&batch)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let Some(writer) = self.inner.take() else {
            anyhow::bail!("No rows decoded from input");
        };
        writer.close()?;
        eprintln!("Written to {}", self.output_path.display());
        Ok(())
    }
}

// --- Table ---

/// Pretty-prints all rows as one aligned table once input is exhausted.
pub struct TableWriter {
    dest: Box<dyn Write>,
    batches: Vec<RecordBatch>,
}

impl TableWriter {
    pub fn new(output: Option<&Path>) -> Result<Self> {
        Ok(Self {
            dest: open_dest(output)?,
            batches: Vec::new(),
        })
    }
}

impl RecordBatchWriter for TableWriter {
    fn write_batch(&mut self, batch: RecordBatch) -> Result<()> {
        self.batches.push(batch);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let table = arrow::util::pretty::pretty_format_batches(&self.batches)?;
        writeln!(self.dest, "{table}")?;
        self.dest.flush()?;
        Ok(())
    }
}
