//! CSV persistence of sweep rows.
//!
//! The file is written to a temporary sibling and renamed into place, so a
//! failed write never leaves a partial file at the destination.

use std::path::Path;

use anyhow::Context;

use crate::sweep::SweepRow;

pub const CSV_HEADER: [&str; 8] = [
    "name",
    "address",
    "rating",
    "types",
    "review_count",
    "reviews",
    "location_searched",
    "place_type_searched",
];

fn record(row: &SweepRow) -> anyhow::Result<[String; 8]> {
    let place = &row.place;
    Ok([
        place.name.clone(),
        place.address.clone(),
        place.rating.map(|r| r.to_string()).unwrap_or_default(),
        place.types.clone(),
        place.review_count.to_string(),
        serde_json::to_string(&place.reviews).context("failed to encode reviews")?,
        row.location_searched.clone(),
        row.place_type_searched.clone(),
    ])
}

/// Writes `rows` to `path` with a header row, replacing any existing file.
///
/// # Errors
///
/// Returns an error if the temporary file cannot be created, written, or
/// moved onto `path`.
pub fn write_csv(path: &Path, rows: &[SweepRow]) -> anyhow::Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temporary file in {}", dir.display()))?;

    {
        let mut writer = csv::Writer::from_writer(tmp.as_file());
        writer.write_record(CSV_HEADER)?;
        for row in rows {
            writer.write_record(record(row)?)?;
        }
        writer.flush().context("failed to flush CSV output")?;
    }

    tmp.persist(path)
        .with_context(|| format!("failed to move CSV into place at {}", path.display()))?;

    tracing::info!(path = %path.display(), rows = rows.len(), "csv written");
    Ok(())
}
