use thiserror::Error;

/// Failures surfaced by the two remote operations behind
/// [`DistributionApi`](crate::client::DistributionApi).
#[derive(Debug, Error)]
pub enum LookupError {
    /// The API reported that no distribution exists for the identifier.
    #[error("distribution not found")]
    NotFound,
    /// Transport, auth or throttling failure from the SDK. Not retried here;
    /// retry policy belongs to the underlying transport.
    #[error(transparent)]
    Api(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl LookupError {
    pub fn api(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        LookupError::Api(Box::new(err))
    }
}

/// Terminal outcomes of a single distribution read. Rendered with their
/// source chain these read `reading Distribution (<id>): <cause>`.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("reading Distribution ({id})")]
    Describe { id: String, source: LookupError },
    #[error("reading Distribution ({id}): empty describe response")]
    MissingDistribution { id: String },
    #[error("listing tags for Distribution ({arn})")]
    TagFetch { arn: String, source: LookupError },
}
