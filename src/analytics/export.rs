//! CSV export of ranked category counts.

use std::path::Path;

use log::info;

use crate::error::DataResult;

use super::categories::CategoryCount;

/// Write `ranked` to `path` as a `category,count` CSV, one row per entry, in the given order.
pub fn export_counts_csv(ranked: &[CategoryCount], path: impl AsRef<Path>) -> DataResult<()> {
    let path = path.as_ref();
    let mut wtr = csv::Writer::from_path(path)?;
    for entry in ranked {
        wtr.serialize(entry)?;
    }
    wtr.flush()?;
    info!("exported {} category counts to {}", ranked.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_and_rows_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counts.csv");
        let ranked = vec![
            CategoryCount::new("Restaurants", 10),
            CategoryCount::new("American (New)", 4),
        ];
        export_counts_csv(&ranked, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "category,count\nRestaurants,10\nAmerican (New),4\n");

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let back: Vec<CategoryCount> = rdr.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(back, ranked);
    }
}
