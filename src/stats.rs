use serde::Serialize;

use crate::catalog::{self, Catalog};
use crate::cli::{AveragesArgs, StatsArgs};
use crate::output;

/// A book at or above this rating counts as high-rated.
pub const HIGH_RATING_THRESHOLD: f64 = 8.5;

/// Counters for the dashboard header, over the whole snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GlobalStats {
    pub total_categories: usize,
    pub total_books: usize,
    pub average_rating: f64,
    pub high_rated_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAverage {
    pub category: String,
    pub average_rating: f64,
}

/// One pass over every (category, book) pair. An empty snapshot yields
/// all-zero stats; the average is 0 rather than undefined.
pub fn global_stats(catalog: &Catalog) -> GlobalStats {
    let mut total_books = 0usize;
    let mut rating_sum = 0.0f64;
    let mut high_rated_count = 0usize;

    for (_, books) in catalog.categories() {
        total_books += books.len();
        for book in books {
            rating_sum += book.rating;
            if book.rating >= HIGH_RATING_THRESHOLD {
                high_rated_count += 1;
            }
        }
    }

    let average_rating = if total_books > 0 {
        round1(rating_sum / total_books as f64)
    } else {
        0.0
    };

    GlobalStats {
        total_categories: catalog.category_count(),
        total_books,
        average_rating,
        high_rated_count,
    }
}

/// Mean rating per category, in catalog order. Categories without books are
/// skipped, not emitted as 0.
pub fn category_averages(catalog: &Catalog) -> Vec<CategoryAverage> {
    catalog
        .categories()
        .filter(|(_, books)| !books.is_empty())
        .map(|(category, books)| {
            let sum: f64 = books.iter().map(|book| book.rating).sum();
            CategoryAverage {
                category: category.to_owned(),
                average_rating: round2(sum / books.len() as f64),
            }
        })
        .collect()
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn run(args: StatsArgs) -> anyhow::Result<()> {
    let catalog = catalog::load(args.input.as_deref())?;
    output::emit(&global_stats(&catalog), args.format)
}

pub fn run_averages(args: AveragesArgs) -> anyhow::Result<()> {
    let catalog = catalog::load(args.input.as_deref())?;
    output::emit(&category_averages(&catalog), args.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::BookRecord;

    fn book(title: &str, rating: f64, rating_count: u64) -> BookRecord {
        BookRecord {
            title: title.to_owned(),
            rating,
            rating_count,
            info: String::new(),
            cover: None,
            link: None,
        }
    }

    fn catalog(groups: Vec<(&str, Vec<BookRecord>)>) -> Catalog {
        let mut catalog = Catalog::default();
        for (category, books) in groups {
            catalog.insert(category, books);
        }
        catalog
    }

    #[test]
    fn empty_catalog_yields_all_zero_stats() {
        let stats = global_stats(&Catalog::default());
        assert_eq!(stats, GlobalStats::default());
    }

    #[test]
    fn totals_sum_per_category_list_lengths() {
        let catalog = catalog(vec![
            ("fiction", vec![book("A", 9.0, 10), book("B", 7.0, 20)]),
            ("history", vec![book("C", 8.0, 30)]),
            ("tech", vec![]),
        ]);

        let stats = global_stats(&catalog);
        assert_eq!(stats.total_categories, 3);
        assert_eq!(stats.total_books, 3);
        assert_eq!(stats.average_rating, 8.0);
    }

    #[test]
    fn high_rated_threshold_is_inclusive() {
        let catalog = catalog(vec![(
            "fiction",
            vec![book("A", 8.5, 1), book("B", 8.4, 1), book("C", 9.9, 1)],
        )]);

        assert_eq!(global_stats(&catalog).high_rated_count, 2);
    }

    #[test]
    fn average_rating_rounds_to_one_decimal() {
        let catalog = catalog(vec![(
            "fiction",
            vec![book("A", 8.0, 1), book("B", 8.5, 1), book("C", 8.9, 1)],
        )]);

        // 25.4 / 3 = 8.466...
        assert_eq!(global_stats(&catalog).average_rating, 8.5);
    }

    #[test]
    fn two_high_rated_books_match_dashboard_header() {
        let catalog = catalog(vec![(
            "Fiction",
            vec![book("A", 9.2, 100), book("B", 9.2, 500)],
        )]);

        let stats = global_stats(&catalog);
        assert_eq!(stats.total_categories, 1);
        assert_eq!(stats.total_books, 2);
        assert_eq!(stats.average_rating, 9.2);
        assert_eq!(stats.high_rated_count, 2);
    }

    #[test]
    fn category_averages_skip_empty_and_keep_catalog_order() {
        let catalog = catalog(vec![
            ("fiction", vec![book("A", 8.0, 1), book("B", 8.5, 1)]),
            ("history", vec![]),
            ("tech", vec![book("C", 8.0, 1), book("D", 8.5, 1), book("E", 8.5, 1)]),
        ]);

        let averages = category_averages(&catalog);
        assert_eq!(averages.len(), 2);
        assert_eq!(averages[0].category, "fiction");
        assert_eq!(averages[0].average_rating, 8.25);
        assert_eq!(averages[1].category, "tech");
        // 25.0 / 3 = 8.333...
        assert_eq!(averages[1].average_rating, 8.33);
    }
}
