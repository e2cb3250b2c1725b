//! Headless contact table library
//!
//! A searchable, sortable, paginated table model with row selection, fed by
//! an asynchronous data source that simulates a slow fetch.

pub mod config;
pub mod error;
pub mod fetch;
pub mod model;
pub mod source;
pub mod table;

pub use config::{SortToggle, TableConfig};
pub use error::{Error, Result};
pub use fetch::{spawn_fetch, FetchHandle, FetchState};
pub use model::{Column, Record};
pub use table::TableView;
