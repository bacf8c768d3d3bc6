use serde::Serialize;

use crate::catalog::{self, Catalog};
use crate::cli::HistogramArgs;
use crate::output;

// Bucket floors, checked high to low; anything below the last floor lands in
// the underflow bucket. Labels match the dashboard's legend.
const BUCKETS: [(&str, f64); 5] = [
    ("9.0-10.0", 9.0),
    ("8.5-8.9", 8.5),
    ("8.0-8.4", 8.0),
    ("7.5-7.9", 7.5),
    ("7.0-7.4", 7.0),
];
const UNDERFLOW_LABEL: &str = "< 7.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistogramBucket {
    pub label: &'static str,
    pub count: usize,
}

/// Rating distribution over six fixed ranges, always emitted in range order
/// (highest first), never sorted by count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RatingHistogram {
    buckets: Vec<HistogramBucket>,
}

impl RatingHistogram {
    #[must_use]
    pub fn buckets(&self) -> &[HistogramBucket] {
        &self.buckets
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.count).sum()
    }
}

/// Every book increments exactly one bucket; boundary ratings belong to the
/// higher bucket (8.5 counts as `8.5-8.9`, not `8.0-8.4`).
pub fn rating_histogram(catalog: &Catalog) -> RatingHistogram {
    let mut counts = [0usize; BUCKETS.len() + 1];
    for (_, books) in catalog.categories() {
        for book in books {
            counts[bucket_index(book.rating)] += 1;
        }
    }

    let buckets = BUCKETS
        .iter()
        .map(|(label, _)| *label)
        .chain([UNDERFLOW_LABEL])
        .zip(counts)
        .map(|(label, count)| HistogramBucket { label, count })
        .collect();

    RatingHistogram { buckets }
}

fn bucket_index(rating: f64) -> usize {
    BUCKETS
        .iter()
        .position(|(_, floor)| rating >= *floor)
        .unwrap_or(BUCKETS.len())
}

pub fn run(args: HistogramArgs) -> anyhow::Result<()> {
    let catalog = catalog::load(args.input.as_deref())?;
    output::emit(&rating_histogram(&catalog), args.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BookRecord;

    fn book(rating: f64) -> BookRecord {
        BookRecord {
            title: format!("rated {rating}"),
            rating,
            rating_count: 1,
            info: String::new(),
            cover: None,
            link: None,
        }
    }

    fn catalog_of(ratings: &[f64]) -> Catalog {
        let mut catalog = Catalog::default();
        catalog.insert("books", ratings.iter().copied().map(book).collect());
        catalog
    }

    #[test]
    fn boundary_ratings_fall_in_the_higher_bucket() {
        let cases = [
            (9.0, "9.0-10.0"),
            (8.5, "8.5-8.9"),
            (8.0, "8.0-8.4"),
            (7.5, "7.5-7.9"),
            (7.0, "7.0-7.4"),
            (6.9, "< 7.0"),
        ];

        for (rating, label) in cases {
            let histogram = rating_histogram(&catalog_of(&[rating]));
            let bucket = histogram
                .buckets()
                .iter()
                .find(|bucket| bucket.count == 1)
                .expect("one bucket incremented");
            assert_eq!(bucket.label, label, "rating={rating}");
        }
    }

    #[test]
    fn each_book_lands_in_exactly_one_bucket() {
        let histogram = rating_histogram(&catalog_of(&[9.6, 9.0, 8.7, 8.2, 7.7, 7.2, 5.0, 0.0]));
        assert_eq!(histogram.total(), 8);
    }

    #[test]
    fn buckets_keep_range_order_regardless_of_counts() {
        let histogram = rating_histogram(&catalog_of(&[6.0, 6.1, 6.2, 9.5]));
        let labels = histogram
            .buckets()
            .iter()
            .map(|bucket| bucket.label)
            .collect::<Vec<_>>();

        assert_eq!(
            labels,
            vec!["9.0-10.0", "8.5-8.9", "8.0-8.4", "7.5-7.9", "7.0-7.4", "< 7.0"]
        );
        assert_eq!(histogram.buckets()[5].count, 3);
    }

    #[test]
    fn empty_catalog_yields_six_zero_buckets() {
        let histogram = rating_histogram(&Catalog::default());
        assert_eq!(histogram.buckets().len(), 6);
        assert_eq!(histogram.total(), 0);
    }
}
