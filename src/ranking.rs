use std::cmp::Ordering;

use serde::Serialize;

use crate::catalog::{self, BookRecord, Catalog};
use crate::cli::{BooksArgs, TopArgs};
use crate::error::PipelineError;
use crate::output;

pub const DEFAULT_TOP_N: usize = 10;

/// Listing scope: every category, or exactly one by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Category(String),
}

impl CategoryFilter {
    /// `all` is the sentinel the dashboard sends for the unfiltered view;
    /// anything else is taken as an exact category name.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            Self::All
        } else {
            Self::Category(value.to_owned())
        }
    }
}

/// A book tagged with the category it came from. Derived during flattening,
/// never stored in the catalog itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorizedBook {
    pub category: String,
    #[serde(flatten)]
    pub book: BookRecord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    #[must_use]
    pub fn for_rank(rank: usize) -> Option<Self> {
        match rank {
            1 => Some(Self::Gold),
            2 => Some(Self::Silver),
            3 => Some(Self::Bronze),
            _ => None,
        }
    }
}

/// A top-list entry. `rank` is the contract; `medal` is presentation
/// metadata for the first three places.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedBook {
    pub rank: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medal: Option<Medal>,
    #[serde(flatten)]
    pub entry: CategorizedBook,
}

/// Flatten the selected scope and sort it for display. An unknown category
/// name fails with `CategoryNotFound`; an empty scope is an empty list.
pub fn flatten_and_sort(
    catalog: &Catalog,
    filter: &CategoryFilter,
) -> Result<Vec<CategorizedBook>, PipelineError> {
    match filter {
        CategoryFilter::All => Ok(sorted_all(catalog)),
        CategoryFilter::Category(name) => {
            let Some(books) = catalog.books(name) else {
                return Err(PipelineError::CategoryNotFound(name.clone()));
            };
            let mut entries = tag_books(name, books);
            entries.sort_by(rating_order);
            Ok(entries)
        }
    }
}

/// The first `n` books of the all-categories listing, with a dense rank
/// starting at 1. Fewer than `n` books means all of them.
pub fn top_n(catalog: &Catalog, n: usize) -> Vec<RankedBook> {
    sorted_all(catalog)
        .into_iter()
        .take(n)
        .enumerate()
        .map(|(index, entry)| RankedBook {
            rank: index + 1,
            medal: Medal::for_rank(index + 1),
            entry,
        })
        .collect()
}

fn sorted_all(catalog: &Catalog) -> Vec<CategorizedBook> {
    let mut entries = Vec::with_capacity(catalog.book_count());
    for (category, books) in catalog.categories() {
        entries.extend(tag_books(category, books));
    }
    entries.sort_by(rating_order);
    entries
}

fn tag_books(category: &str, books: &[BookRecord]) -> Vec<CategorizedBook> {
    books
        .iter()
        .map(|book| CategorizedBook {
            category: category.to_owned(),
            book: book.clone(),
        })
        .collect()
}

// Rating first, rating count as tie-break, both descending. `sort_by` is
// stable, so full ties keep their flattening order.
fn rating_order(a: &CategorizedBook, b: &CategorizedBook) -> Ordering {
    b.book
        .rating
        .total_cmp(&a.book.rating)
        .then_with(|| b.book.rating_count.cmp(&a.book.rating_count))
}

pub fn run_books(args: BooksArgs) -> anyhow::Result<()> {
    let catalog = catalog::load(args.input.as_deref())?;
    let filter = CategoryFilter::parse(&args.category);
    let books = flatten_and_sort(&catalog, &filter)?;
    output::emit(&books, args.format)
}

pub fn run_top(args: TopArgs) -> anyhow::Result<()> {
    let catalog = catalog::load(args.input.as_deref())?;
    output::emit(&top_n(&catalog, args.limit), args.format)
}
