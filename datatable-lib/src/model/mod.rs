//! Data model types.

mod column;
mod record;

pub use column::Column;
pub use record::Record;
