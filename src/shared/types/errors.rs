use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("No {table} band covers {units} units")]
    UnmatchedRange { table: &'static str, units: u64 },

    #[error("Tariff table {table} is malformed: {reason}")]
    MalformedTable {
        table: &'static str,
        reason: String,
    },
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
