//! Descriptive statistics printed after a sweep.

use std::collections::HashMap;
use std::fmt::{self, Display, Write as _};
use std::hash::Hash;

use crate::sweep::SweepRow;

const TOP_N: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct RatingStats {
    pub rated: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SweepSummary {
    pub total: usize,
    pub ratings: Option<RatingStats>,
    /// Rating value (one decimal) to count, top ten.
    pub rating_distribution: Vec<(String, usize)>,
    /// Joined type strings to count, top ten.
    pub top_types: Vec<(String, usize)>,
    pub by_location: Vec<(String, usize)>,
    pub by_place_type: Vec<(String, usize)>,
    pub review_counts: Vec<(usize, usize)>,
}

/// Counts occurrences, most frequent first; ties are ordered by key.
fn value_counts<K, I>(items: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Ord,
    I: IntoIterator<Item = K>,
{
    let mut counts: HashMap<K, usize> = HashMap::new();
    for item in items {
        *counts.entry(item).or_default() += 1;
    }
    let mut counts: Vec<_> = counts.into_iter().collect();
    counts.sort_by(|(ka, ca), (kb, cb)| cb.cmp(ca).then_with(|| ka.cmp(kb)));
    counts
}

#[must_use]
pub fn summarize(rows: &[SweepRow]) -> SweepSummary {
    let ratings: Vec<f64> = rows.iter().filter_map(|r| r.place.rating).collect();

    let rating_stats = if ratings.is_empty() {
        None
    } else {
        #[allow(clippy::cast_precision_loss)]
        let mean = ratings.iter().sum::<f64>() / ratings.len() as f64;
        Some(RatingStats {
            rated: ratings.len(),
            mean,
            min: ratings.iter().copied().fold(f64::INFINITY, f64::min),
            max: ratings.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        })
    };

    let mut rating_distribution = value_counts(ratings.iter().map(|r| format!("{r:.1}")));
    rating_distribution.truncate(TOP_N);

    let mut top_types = value_counts(rows.iter().map(|r| r.place.types.clone()));
    top_types.truncate(TOP_N);

    SweepSummary {
        total: rows.len(),
        ratings: rating_stats,
        rating_distribution,
        top_types,
        by_location: value_counts(rows.iter().map(|r| r.location_searched.clone())),
        by_place_type: value_counts(rows.iter().map(|r| r.place_type_searched.clone())),
        review_counts: value_counts(rows.iter().map(|r| r.place.review_count)),
    }
}

fn write_section<K: Display>(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    counts: &[(K, usize)],
) -> fmt::Result {
    writeln!(f, "\n{title}:")?;
    for (key, count) in counts {
        let mut label = String::new();
        write!(label, "{key}")?;
        if label.is_empty() {
            label.push_str("(none)");
        }
        writeln!(f, "  {label:<48} {count:>5}")?;
    }
    Ok(())
}

impl Display for SweepSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "=".repeat(60))?;
        writeln!(f, "Summary statistics")?;
        writeln!(f, "{}", "=".repeat(60))?;
        writeln!(f, "Total results: {}", self.total)?;

        if self.total == 0 {
            return writeln!(f, "collection is empty");
        }

        match &self.ratings {
            Some(stats) => writeln!(
                f,
                "Ratings: {} rated, mean {:.2}, min {:.1}, max {:.1}",
                stats.rated, stats.mean, stats.min, stats.max
            )?,
            None => writeln!(f, "Ratings: none reported")?,
        }

        write_section(f, "Rating distribution", &self.rating_distribution)?;
        write_section(f, "Top 10 most common place types", &self.top_types)?;
        write_section(f, "Location distribution", &self.by_location)?;
        write_section(f, "Place type distribution", &self.by_place_type)?;
        write_section(f, "Review count distribution", &self.review_counts)
    }
}
