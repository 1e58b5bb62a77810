//! `business-categories` loads newline-delimited JSON business records into an in-memory
//! [`types::RecordTable`], persists raw numeric arrays in packed binary form, and charts how often
//! each business category occurs.
//!
//! ## Loading records
//!
//! Each non-empty line of the input is one JSON object; rows are kept schema-less as
//! [`types::Value`] maps, in file order. The first malformed line aborts the load.
//!
//! ```no_run
//! use business_categories::ingestion::read_table;
//!
//! # fn main() -> Result<(), business_categories::DataError> {
//! let table = read_table("business.json")?;
//! println!("rows={} columns={:?}", table.row_count(), table.columns());
//! # Ok(())
//! # }
//! ```
//!
//! A typed view can be taken afterwards with [`types::RecordTable::project`]:
//!
//! ```rust
//! use business_categories::ingestion::read_table_from_str;
//! use business_categories::types::{DataType, Field, Schema, Value};
//!
//! let table = read_table_from_str(
//!     "{\"name\":\"Taco Spot\",\"stars\":4.5}\n{\"name\":\"Diner\",\"stars\":3}\n",
//! )
//! .unwrap();
//! let schema = Schema::new(vec![
//!     Field::new("name", DataType::Utf8),
//!     Field::new("stars", DataType::Float64),
//! ]);
//! let ds = table.project(&schema).unwrap();
//! assert_eq!(ds.rows[1][1], Value::Float64(3.0));
//! ```
//!
//! ## Packed arrays
//!
//! [`storage::write_array`] / [`storage::read_array`] store raw native-endian elements with no
//! header; the reader must name the element type that was written.
//!
//! ## Category analytics and charts
//!
//! - [`analytics::count_categories`], [`analytics::top_n_categories`]
//! - [`charts::render_top_n_bar_chart`], [`charts::render_cultural_bar_chart`]
//!
//! ## Modules
//!
//! - [`ingestion`]: NDJSON loading and load observers
//! - [`types`]: record table, dynamic values and typed projection
//! - [`storage`]: packed binary array codec
//! - [`analytics`]: category counting and ranking
//! - [`charts`]: bar chart figures, viewers and rendering
//! - [`error`]: the crate-wide error type

pub mod analytics;
pub mod charts;
pub mod error;
pub mod ingestion;
pub mod storage;
pub mod types;

pub use error::{DataError, DataResult};
