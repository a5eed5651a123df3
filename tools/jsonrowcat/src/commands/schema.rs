use std::{fs, path::PathBuf};

use anyhow::Result;
use clap::Args;
use jsonrow::core::format_field_defs;

use super::ColumnArgs;

#[derive(Args)]
pub struct SchemaArgs {
    #[command(flatten)]
    schema: ColumnArgs,

    /// Also print the Arrow schema the rows are converted to
    #[arg(long)]
    arrow: bool,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl SchemaArgs {
    pub fn run(self) -> Result<()> {
        let decoder = self.schema.decoder()?;
        let mut text = format_field_defs(decoder.field_defs())?;
        if self.arrow {
            let schema = jsonrow::arrow::field_defs_to_arrow_schema(decoder.field_defs());
            for field in schema.fields() {
                text.push_str(&format!("{}: {}\n", field.name(), field.data_type()));
            }
        }

        match self.output {
            Some(path) => fs::write(path, text)?,
            None => print!("{text}"),
        }
        Ok(())
    }
}
