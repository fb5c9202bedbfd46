//! Conversion of a sealed aggregate into a `PutRecords` request entry

use aws_sdk_kinesis::types::PutRecordsRequestEntry;
use aws_smithy_types::Blob;
use prost::Message;
use tracing::debug;

use crate::error::{AggregationError, Result};
use crate::messages::AggregatedRecord;

impl AggregatedRecord {
    /// Build the `PutRecords` entry that carries this aggregate.
    ///
    /// The entry is routed by the keys of the first sub-record, which is how
    /// the Kinesis Producer Library addresses an aggregate. Sending it is left
    /// to the caller.
    pub fn to_request_entry(&self) -> Result<PutRecordsRequestEntry> {
        let first = self.records.first().ok_or(AggregationError::EmptyAggregate)?;

        let partition_key = self.partition_key_for(first).ok_or_else(|| {
            AggregationError::Entry(format!(
                "partition key index {:?} is not in a table of {} keys",
                first.partition_key_index,
                self.partition_key_table.len()
            ))
        })?;

        let explicit_hash_key = match first.explicit_hash_key_index {
            Some(index) => Some(self.explicit_hash_key_for(first).ok_or_else(|| {
                AggregationError::Entry(format!(
                    "explicit hash key index {} is not in a table of {} keys",
                    index,
                    self.explicit_hash_key_table.len()
                ))
            })?),
            None => None,
        };

        let data = self.encode_to_vec();
        debug!(
            records = self.records.len(),
            size = data.len(),
            partition_key = %partition_key,
            "Sealing aggregate into request entry"
        );

        PutRecordsRequestEntry::builder()
            .data(Blob::new(data))
            .partition_key(partition_key)
            .set_explicit_hash_key(explicit_hash_key.map(String::from))
            .build()
            .map_err(|e| AggregationError::Entry(e.to_string()))
    }
}
