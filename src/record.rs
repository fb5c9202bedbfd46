//! Construction of sub-records outside the aggregate key tables

use bytes::BytesMut;
use prost::Message;
use tracing::trace;

use crate::error::Result;
use crate::messages::{Record, Tag};

impl Record {
    /// Create a sub-record carrying raw bytes and no key indices
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            partition_key_index: None,
            explicit_hash_key_index: None,
            data: data.into(),
            tags: Vec::new(),
        }
    }

    /// Create a sub-record whose payload is the serialized form of `payload`.
    ///
    /// The key indices are copied through untouched. Keeping them consistent
    /// with the key tables of whatever aggregate eventually holds the record
    /// is up to the caller; no key table is consulted here.
    ///
    /// # Errors
    ///
    /// Returns [`AggregationError::Encoding`](crate::AggregationError::Encoding)
    /// if the payload cannot be marshaled. Nothing is retained on failure.
    pub fn from_message<M: Message>(
        partition_key_index: Option<u64>,
        explicit_hash_key_index: Option<u64>,
        payload: &M,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Result<Self> {
        let mut buf = BytesMut::with_capacity(payload.encoded_len());
        payload.encode(&mut buf)?;

        trace!(
            partition_key_index = ?partition_key_index,
            explicit_hash_key_index = ?explicit_hash_key_index,
            size = buf.len(),
            "Built record from message"
        );

        Ok(Self {
            partition_key_index,
            explicit_hash_key_index,
            data: buf.to_vec(),
            tags: tags.into_iter().collect(),
        })
    }
}
