use anyhow::Context as _;
use thiserror::Error;

/// Rejected pagination input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("total records must not be negative, got {0}")]
    NegativeTotalRecords(i64),

    #[error("page limit must be a positive number, got {0}")]
    InvalidPageLimit(i64),

    #[error("unknown navigation action: {0:?}")]
    InvalidAction(String),
}

/// Add context to configuration errors
pub fn config_context(total_records: i64, page_limit: Option<i64>) -> String {
    match page_limit {
        Some(limit) => format!(
            "Failed to build pagination for {} records with page limit {}",
            total_records, limit
        ),
        None => format!("Failed to build pagination for {} records", total_records),
    }
}

/// Add context to action parsing errors
pub fn action_context(raw: &str) -> String {
    format!("Failed to parse navigation action: {}", raw)
}

/// Wrap result with configuration context
pub fn with_config_context<T, E>(
    result: Result<T, E>,
    total_records: i64,
    page_limit: Option<i64>,
) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(config_context(total_records, page_limit))
}

/// Wrap result with action parsing context
pub fn with_action_context<T, E>(result: Result<T, E>, raw: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(action_context(raw))
}
