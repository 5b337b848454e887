use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    // construction-time connectivity failure; the process should not start
    #[error("storage unavailable: {0}")]
    Unavailable(anyhow::Error),

    // a failed read/write against storage during a request
    #[error(transparent)]
    Storage(#[from] anyhow::Error),

    // logical absence of a page, distinct from an empty page
    #[error("no page with slug '{0}'")]
    NotFound(String),
}
