pub mod convert;
pub mod schema;

use anyhow::Result;
use clap::Args;
use jsonrow::json::JsonRowDecoder;

/// Column declaration shared by every subcommand.
#[derive(Args)]
pub struct ColumnArgs {
    /// Comma-separated column names, e.g. `id,name,tags`
    #[arg(short, long)]
    columns: String,

    /// Column types separated by `:` or `,`, e.g. `int:string:array<string>`
    #[arg(long)]
    types: String,

    /// Column renames as `jsonKey>column,...`
    #[arg(short, long)]
    rename: Option<String>,
}

impl ColumnArgs {
    pub fn decoder(&self) -> Result<JsonRowDecoder> {
        Ok(JsonRowDecoder::init(
            &self.columns,
            &self.types,
            self.rename.as_deref(),
        )?)
    }
}
