use std::fs::OpenOptions;
use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context as _;
use serde::Serialize;

use crate::catalog::{self, Catalog};
use crate::cli::ReportArgs;
use crate::histogram::{self, RatingHistogram};
use crate::output;
use crate::ranking::{self, RankedBook};
use crate::stats::{self, CategoryAverage, GlobalStats};

/// Everything the dashboard renders, in one serializable value. Pure
/// composition of the individual pipeline operations over one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    #[serde(flatten)]
    pub stats: GlobalStats,
    pub avg_rating_by_category: Vec<CategoryAverage>,
    pub rating_distribution: RatingHistogram,
    pub top_rated_books: Vec<RankedBook>,
}

pub fn dashboard_report(catalog: &Catalog) -> DashboardReport {
    DashboardReport {
        stats: stats::global_stats(catalog),
        avg_rating_by_category: stats::category_averages(catalog),
        rating_distribution: histogram::rating_histogram(catalog),
        top_rated_books: ranking::top_n(catalog, ranking::DEFAULT_TOP_N),
    }
}

pub fn run(args: ReportArgs) -> anyhow::Result<()> {
    let catalog = catalog::load(args.input.as_deref())?;
    let report = dashboard_report(&catalog);
    let rendered = output::render(&report, args.format)?;

    let Some(out) = args.out.as_deref() else {
        print!("{rendered}");
        return Ok(());
    };

    let out_path = PathBuf::from(out);
    if out_path.exists() && !args.force {
        anyhow::bail!("report output already exists: {}", out_path.display());
    }

    let mut options = OpenOptions::new();
    options.write(true);
    if args.force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    let mut file = options
        .open(&out_path)
        .with_context(|| format!("open report output: {}", out_path.display()))?;
    file.write_all(rendered.as_bytes())
        .with_context(|| format!("write report: {}", out_path.display()))?;
    file.flush().context("flush report")?;

    tracing::info!(out = %out_path.display(), "wrote dashboard report");
    Ok(())
}
