#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
    #[error("duplicate job id: {0}")]
    DuplicateId(String),
    #[error("corrupt job record {id}: {reason}")]
    CorruptRecord { id: String, reason: String },
}
