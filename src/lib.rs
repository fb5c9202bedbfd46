//! Go Zoom Kinesis Aggregation - KPL record aggregation for AWS Kinesis
//!
//! This crate packs many small user records into a single Kinesis record
//! using the Kinesis Producer Library aggregation format, deduplicating
//! partition and explicit hash keys and keeping each aggregate under the
//! 1 MiB record limit.
//!
//! ```rust
//! use go_zoom_kinesis_aggregation::{AggregatedRecord, AggregationError};
//!
//! let mut agg = AggregatedRecord::new();
//! agg.add_user_record("user-1", "", b"hello").unwrap();
//! agg.add_user_record("user-1", "", b"world").unwrap();
//! assert_eq!(agg.partition_key_table, vec!["user-1"]);
//!
//! match agg.add_user_record("", "", b"x") {
//!     Err(AggregationError::InvalidPartitionKey) => {}
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

pub mod aggregate;
pub mod entry;
pub mod error;
pub mod messages;
pub mod record;

// Make test utilities available for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test;

pub use aggregate::MAX_BYTES_PER_RECORD;
pub use error::{AggregationError, Result};
pub use messages::{AggregatedRecord, Record, Tag};
