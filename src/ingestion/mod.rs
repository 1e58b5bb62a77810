//! Record loading.
//!
//! - [`read_table`] (from [`json`]) loads a newline-delimited JSON file into a
//!   [`crate::types::RecordTable`]
//! - [`load_table`] (from [`unified`]) does the same and reports the outcome to an
//!   [`IngestionObserver`]

pub mod json;
pub mod observability;
pub mod unified;

pub use json::{read_table, read_table_from_reader, read_table_from_str};
pub use observability::{
    CompositeObserver, IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats, LogObserver,
};
pub use unified::{load_table, LoadOptions};
