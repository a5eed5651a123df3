use clap::ValueEnum;
use jsonrow::arrow::NestedPolicy;

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum OutputFormat {
    Csv,
    Parquet,
    Table,
}

impl OutputFormat {
    pub fn default_nested_policy(&self) -> NestedPolicy {
        match self {
            OutputFormat::Csv => NestedPolicy::Drop,
            OutputFormat::Parquet | OutputFormat::Table => NestedPolicy::Keep,
        }
    }

    /// Whether the writer can hold `List` / `Map` columns at all.
    pub fn supports_nested(&self) -> bool {
        !matches!(self, OutputFormat::Csv)
    }
}
