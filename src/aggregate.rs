//! Admission of user records into an aggregate
//!
//! An [`AggregatedRecord`] packs many small user records into a single
//! Kinesis record. Partition keys and explicit hash keys are stored once in
//! per-aggregate tables and referenced from each sub-record by index.
//!
//! Admission is all-or-nothing: every check runs before the tables or the
//! record list are touched, so a rejected call leaves the aggregate exactly
//! as it was and can be retried against a fresh aggregate.

use bytes::Bytes;
use prost::Message;
use tracing::{debug, instrument, trace, warn};

use crate::error::{AggregationError, Result};
use crate::messages::{AggregatedRecord, Record};

/// Maximum size of a single Kinesis record
pub const MAX_BYTES_PER_RECORD: usize = 1024 * 1024;

impl AggregatedRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble an aggregate from existing key tables and records.
    ///
    /// No index or size validation is performed.
    pub fn from_parts(
        partition_key_table: Vec<String>,
        explicit_hash_key_table: Vec<String>,
        records: Vec<Record>,
    ) -> Self {
        Self {
            partition_key_table,
            explicit_hash_key_table,
            records,
        }
    }

    /// Add a user record to the aggregate.
    ///
    /// The size check only adds the raw length of `user_record` to the current
    /// serialized size. Growth of the key tables and the sub-record framing is
    /// not counted, so the encoded aggregate can end up slightly above the
    /// estimate.
    ///
    /// An empty `explicit_hash_key` means the record has none.
    ///
    /// # Errors
    ///
    /// * [`AggregationError::AggregateFull`] if the record does not fit
    /// * [`AggregationError::InvalidPartitionKey`] if `partition_key` is empty
    #[instrument(level = "trace", skip(self, user_record), fields(record_size = user_record.len()))]
    pub fn add_user_record(
        &mut self,
        partition_key: &str,
        explicit_hash_key: &str,
        user_record: &[u8],
    ) -> Result<()> {
        let agg_size = self.encoded_len();
        if agg_size + user_record.len() > MAX_BYTES_PER_RECORD {
            debug!(
                agg_size,
                record_size = user_record.len(),
                records = self.records.len(),
                "Aggregate full, rejecting record"
            );
            return Err(AggregationError::AggregateFull {
                agg_size,
                record_size: user_record.len(),
            });
        }

        if partition_key.is_empty() {
            warn!("Rejecting record with empty partition key");
            return Err(AggregationError::InvalidPartitionKey);
        }

        let mut record = Record::new(user_record);
        record.partition_key_index = Some(find_or_insert(&mut self.partition_key_table, partition_key));

        if !explicit_hash_key.is_empty() {
            record.explicit_hash_key_index =
                Some(find_or_insert(&mut self.explicit_hash_key_table, explicit_hash_key));
        }

        trace!(
            partition_key_index = ?record.partition_key_index,
            explicit_hash_key_index = ?record.explicit_hash_key_index,
            position = self.records.len(),
            "Admitted user record"
        );

        self.records.push(record);
        Ok(())
    }

    /// Current serialized size in bytes
    pub fn size(&self) -> usize {
        self.encoded_len()
    }

    /// Bytes still available under the estimate used by
    /// [`add_user_record`](Self::add_user_record)
    pub fn remaining_capacity(&self) -> usize {
        MAX_BYTES_PER_RECORD.saturating_sub(self.encoded_len())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resolve a sub-record's partition key against this aggregate's table
    pub fn partition_key_for(&self, record: &Record) -> Option<&str> {
        lookup(&self.partition_key_table, record.partition_key_index)
    }

    /// Resolve a sub-record's explicit hash key against this aggregate's table
    pub fn explicit_hash_key_for(&self, record: &Record) -> Option<&str> {
        lookup(&self.explicit_hash_key_table, record.explicit_hash_key_index)
    }

    /// Encode the aggregate into its protobuf wire form
    pub fn to_bytes(&self) -> Result<Bytes> {
        let mut buf = Vec::with_capacity(self.encoded_len());
        self.encode(&mut buf)?;
        Ok(Bytes::from(buf))
    }
}

/// Index of `key` in `table`, appending it first if absent.
fn find_or_insert(table: &mut Vec<String>, key: &str) -> u64 {
    match table.iter().position(|existing| existing == key) {
        Some(index) => index as u64,
        None => {
            table.push(key.to_string());
            trace!(key, index = table.len() - 1, "Added key to table");
            (table.len() - 1) as u64
        }
    }
}

fn lookup(table: &[String], index: Option<u64>) -> Option<&str> {
    let index = usize::try_from(index?).ok()?;
    table.get(index).map(String::as_str)
}
