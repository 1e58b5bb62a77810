//! Category analytics over a [`crate::types::RecordTable`].
//!
//! - [`count_categories`]: tag → occurrence count
//! - [`top_n_categories`]: the `n` most frequent tags
//! - [`cultural_counts`]: the five fixed cultural tags, in order
//! - [`export_counts_csv`]: ranked counts to CSV
//!
//! ```rust
//! use business_categories::analytics::{count_categories, top_n_categories, CategoryCount};
//! use business_categories::ingestion::read_table_from_str;
//!
//! let table = read_table_from_str(
//!     "{\"categories\": [\"Mexican\", \"Bar\"]}\n{\"categories\": [\"Mexican\"]}\n",
//! )
//! .unwrap();
//!
//! let counts = count_categories(&table).unwrap();
//! assert_eq!(counts["Mexican"], 2);
//! assert_eq!(counts["Bar"], 1);
//!
//! let top = top_n_categories(&table, 1).unwrap();
//! assert_eq!(top, vec![CategoryCount::new("Mexican", 2)]);
//! ```

pub mod categories;
pub mod export;

pub use categories::{
    count_categories, count_tags, cultural_counts, rank, top_n_categories, CategoryCount, CategoryCounts,
    RankedCategories, CATEGORIES_COLUMN, CULTURAL_CATEGORIES,
};
pub use export::export_counts_csv;
