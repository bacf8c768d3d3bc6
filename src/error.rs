use thiserror::Error;

/// Failures the aggregation pipeline reports to its caller.
///
/// The pipeline does no I/O, so these are the only error conditions; both are
/// raised synchronously and nothing partial is ever returned alongside them.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The snapshot violates the `category -> [record]` shape contract.
    #[error("malformed catalog: {0}")]
    MalformedCatalog(String),

    /// A listing filter named a category the snapshot does not contain.
    #[error("unknown category: {0}")]
    CategoryNotFound(String),
}
