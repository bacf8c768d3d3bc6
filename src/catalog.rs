use std::io::Read as _;

use anyhow::Context as _;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::cli::CategoriesArgs;
use crate::error::PipelineError;
use crate::output;

/// One book as delivered by the snapshot producer.
///
/// `cover` and `link` are optional; the producer may also send them as empty
/// strings, which ingestion normalizes to absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookRecord {
    pub title: String,
    pub rating: f64,
    pub rating_count: u64,
    pub info: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Full snapshot of one fetch cycle: category name -> books.
///
/// Categories keep their encounter order; every derived view iterates them in
/// that order so identical input yields identical output.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: IndexMap<String, Vec<BookRecord>>,
}

impl Catalog {
    pub fn from_json_str(raw: &str) -> Result<Self, PipelineError> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|err| PipelineError::MalformedCatalog(format!("invalid json: {err}")))?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self, PipelineError> {
        let Some(entries) = value.as_object() else {
            return Err(PipelineError::MalformedCatalog(
                "top-level value is not an object of category arrays".to_owned(),
            ));
        };

        let mut categories = IndexMap::with_capacity(entries.len());
        for (category, books_value) in entries {
            if category.trim().is_empty() {
                return Err(PipelineError::MalformedCatalog(
                    "category name is empty".to_owned(),
                ));
            }
            let Some(raw_books) = books_value.as_array() else {
                return Err(PipelineError::MalformedCatalog(format!(
                    "category {category:?} is not an array of records"
                )));
            };

            let mut books = Vec::with_capacity(raw_books.len());
            for (index, raw) in raw_books.iter().enumerate() {
                books.push(parse_record(category, index, raw)?);
            }
            categories.insert(category.clone(), books);
        }

        Ok(Self { categories })
    }

    pub fn insert(&mut self, category: &str, books: Vec<BookRecord>) {
        self.categories.insert(category.to_owned(), books);
    }

    /// Categories with their books, in encounter order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &[BookRecord])> {
        self.categories
            .iter()
            .map(|(name, books)| (name.as_str(), books.as_slice()))
    }

    #[must_use]
    pub fn category_names(&self) -> Vec<&str> {
        self.categories.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn books(&self, category: &str) -> Option<&[BookRecord]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn book_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }
}

fn parse_record(category: &str, index: usize, value: &Value) -> Result<BookRecord, PipelineError> {
    let Some(fields) = value.as_object() else {
        return Err(record_error(category, index, "record is not an object"));
    };

    let Some(title) = fields.get("title").and_then(Value::as_str) else {
        return Err(record_error(category, index, "missing or non-string title"));
    };
    if title.trim().is_empty() {
        return Err(record_error(category, index, "title is empty"));
    }

    let Some(rating) = fields.get("rating").and_then(Value::as_f64) else {
        return Err(record_error(category, index, "missing or non-numeric rating"));
    };
    if !rating.is_finite() {
        return Err(record_error(category, index, "rating is not finite"));
    }

    let Some(rating_count) = fields.get("rating_count").and_then(Value::as_u64) else {
        return Err(record_error(
            category,
            index,
            "rating_count is missing or not a non-negative integer",
        ));
    };

    let info = match fields.get("info") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(info)) => info.clone(),
        Some(_) => return Err(record_error(category, index, "info is not a string")),
    };

    Ok(BookRecord {
        title: title.to_owned(),
        rating,
        rating_count,
        info,
        cover: optional_text(fields.get("cover"), category, index, "cover")?,
        link: optional_text(fields.get("link"), category, index, "link")?,
    })
}

fn optional_text(
    value: Option<&Value>,
    category: &str,
    index: usize,
    key: &str,
) -> Result<Option<String>, PipelineError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) if text.is_empty() => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(_) => Err(record_error(
            category,
            index,
            &format!("{key} is not a string"),
        )),
    }
}

fn record_error(category: &str, index: usize, message: &str) -> PipelineError {
    PipelineError::MalformedCatalog(format!("category {category:?} record {index}: {message}"))
}

/// Read a snapshot from a file, or from stdin when no path is given.
pub fn load(input: Option<&str>) -> anyhow::Result<Catalog> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read catalog snapshot: {path}"))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("read catalog snapshot from stdin")?;
            buffer
        }
    };

    let catalog = Catalog::from_json_str(&raw).context("parse catalog snapshot")?;
    tracing::debug!(
        categories = catalog.category_count(),
        books = catalog.book_count(),
        "loaded catalog snapshot"
    );
    Ok(catalog)
}

pub fn run_categories(args: CategoriesArgs) -> anyhow::Result<()> {
    let catalog = load(args.input.as_deref())?;
    output::emit(&catalog.category_names(), args.format)
}
