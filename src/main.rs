use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;

fn main() -> ExitCode {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn try_main() -> anyhow::Result<()> {
    bookdash::logging::init().context("init logging")?;

    let cli = bookdash::cli::Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    match cli.command {
        bookdash::cli::Command::Stats(args) => {
            bookdash::stats::run(args).context("stats")?;
        }
        bookdash::cli::Command::Averages(args) => {
            bookdash::stats::run_averages(args).context("averages")?;
        }
        bookdash::cli::Command::Histogram(args) => {
            bookdash::histogram::run(args).context("histogram")?;
        }
        bookdash::cli::Command::Books(args) => {
            bookdash::ranking::run_books(args).context("books")?;
        }
        bookdash::cli::Command::Top(args) => {
            bookdash::ranking::run_top(args).context("top")?;
        }
        bookdash::cli::Command::Report(args) => {
            bookdash::report::run(args).context("report")?;
        }
        bookdash::cli::Command::Categories(args) => {
            bookdash::catalog::run_categories(args).context("categories")?;
        }
        bookdash::cli::Command::Sample(args) => {
            bookdash::sample::run(args).context("sample")?;
        }
    }

    Ok(())
}
