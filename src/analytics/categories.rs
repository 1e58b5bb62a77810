//! Category tag counting and ranking.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{DataError, DataResult};
use crate::types::{RecordTable, Value};

/// Column holding each business's list of category tags.
pub const CATEGORIES_COLUMN: &str = "categories";

/// The fixed labels shown on the cultural chart, in display order.
pub const CULTURAL_CATEGORIES: [&str; 5] = [
    "American (Traditional)",
    "American (New)",
    "Mexican",
    "Chinese",
    "Japanese",
];

/// Occurrence count per category label. Labels are kept exactly as they appear in the data.
pub type CategoryCounts = BTreeMap<String, u64>;

/// One entry of a ranked category list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    /// Category tag, written as the `category` CSV column.
    #[serde(rename = "category")]
    pub label: String,
    /// Number of rows carrying the tag.
    pub count: u64,
}

impl CategoryCount {
    /// Pair a label with its count.
    pub fn new(label: impl Into<String>, count: u64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Category counts ordered by count, highest first.
pub type RankedCategories = Vec<CategoryCount>;

/// Count every tag in the [`CATEGORIES_COLUMN`] column.
pub fn count_categories(table: &RecordTable) -> DataResult<CategoryCounts> {
    count_tags(table, CATEGORIES_COLUMN)
}

/// Count every tag in `column` across all rows.
///
/// Rows where the cell is absent or `null` contribute nothing. Errors with
/// [`DataError::MissingColumn`] if no row has `column`, and with [`DataError::InvalidTags`]
/// (1-based row) if a cell is anything other than a list of strings.
pub fn count_tags(table: &RecordTable, column: &str) -> DataResult<CategoryCounts> {
    if !table.has_column(column) {
        return Err(DataError::MissingColumn {
            column: column.to_string(),
        });
    }

    let invalid = |row: usize| DataError::InvalidTags {
        row,
        column: column.to_string(),
    };

    let mut counts = CategoryCounts::new();
    for (idx0, cell) in table.column(column).enumerate() {
        let tags = match cell {
            None | Some(Value::Null) => continue,
            Some(Value::List(items)) => items,
            Some(_) => return Err(invalid(idx0 + 1)),
        };
        for tag in tags {
            let label = tag.as_str().ok_or_else(|| invalid(idx0 + 1))?;
            match counts.get_mut(label) {
                Some(c) => *c += 1,
                None => {
                    counts.insert(label.to_string(), 1);
                }
            }
        }
    }
    Ok(counts)
}

/// Order counts by count descending; equal counts are ordered by label ascending.
pub fn rank(counts: &CategoryCounts) -> RankedCategories {
    let mut ranked: RankedCategories = counts
        .iter()
        .map(|(label, &count)| CategoryCount::new(label.as_str(), count))
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    ranked
}

/// The `n` most frequent categories. Returns all of them if there are fewer than `n`.
pub fn top_n_categories(table: &RecordTable, n: usize) -> DataResult<RankedCategories> {
    let mut ranked = rank(&count_categories(table)?);
    ranked.truncate(n);
    Ok(ranked)
}

/// Counts for [`CULTURAL_CATEGORIES`], in that order.
///
/// Every label must be present; a missing one is a [`DataError::MissingCategory`], not a zero.
pub fn cultural_counts(counts: &CategoryCounts) -> DataResult<RankedCategories> {
    CULTURAL_CATEGORIES
        .iter()
        .map(|&label| {
            counts
                .get(label)
                .map(|&count| CategoryCount::new(label, count))
                .ok_or_else(|| DataError::MissingCategory {
                    label: label.to_string(),
                })
        })
        .collect()
}
