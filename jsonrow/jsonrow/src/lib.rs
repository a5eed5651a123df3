mod error;
mod reader;

pub use error::JsonlReaderError;
pub use jsonrow_arrow as arrow;
pub use jsonrow_core as core;
#[cfg(feature = "json")]
pub use jsonrow_json as json;
pub use reader::{JsonlReader, JsonlReaderBuilder, ReadStats};
