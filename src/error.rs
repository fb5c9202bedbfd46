//! Error types for record aggregation

use thiserror::Error;

/// Main error type for aggregation operations
#[derive(Debug, Error)]
pub enum AggregationError {
    /// Adding the record would push the aggregate past the Kinesis record limit.
    #[error("AggregatedRecord full: unable to add record of {record_size} bytes to aggregate of {agg_size} bytes")]
    AggregateFull {
        /// Serialized size of the aggregate when the record was rejected
        agg_size: usize,
        /// Size of the rejected user record
        record_size: usize,
    },

    #[error("Empty partition key is not allowed")]
    InvalidPartitionKey,

    #[error("Error marshaling payload: {0}")]
    Encoding(#[from] prost::EncodeError),

    #[error("Aggregate contains no records")]
    EmptyAggregate,

    #[error("Failed to build request entry: {0}")]
    Entry(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AggregationError {
    pub fn is_full(&self) -> bool {
        matches!(self, AggregationError::AggregateFull { .. })
    }

    /// Whether the same call may succeed against a fresh aggregate.
    ///
    /// Only a full aggregate qualifies; every other error is a caller bug
    /// or an encoder failure that a retry will not fix.
    pub fn is_retryable(&self) -> bool {
        self.is_full()
    }
}

/// Result type for aggregation operations
pub type Result<T> = std::result::Result<T, AggregationError>;
