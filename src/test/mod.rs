//! Test utilities for building aggregates

use crate::error::Result;
use crate::messages::AggregatedRecord;

/// Helper functions for creating test data
pub struct TestUtils;

impl TestUtils {
    /// Create `count` payloads of the form `data-{i}`
    pub fn create_test_payloads(count: usize) -> Vec<Vec<u8>> {
        (0..count)
            .map(|i| format!("data-{}", i).into_bytes())
            .collect()
    }

    /// Create an aggregate holding `count` records spread over `key_count`
    /// partition keys. Every even record also carries an explicit hash key.
    pub fn create_test_aggregate(count: usize, key_count: usize) -> Result<AggregatedRecord> {
        let mut agg = AggregatedRecord::new();
        for (i, payload) in Self::create_test_payloads(count).iter().enumerate() {
            let partition_key = format!("partition-{}", i % key_count.max(1));
            let hash_key = if i % 2 == 0 {
                format!("{}", i % 3)
            } else {
                String::new()
            };
            agg.add_user_record(&partition_key, &hash_key, payload)?;
        }
        Ok(agg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_aggregate() -> anyhow::Result<()> {
        let agg = TestUtils::create_test_aggregate(6, 2)?;

        assert_eq!(agg.len(), 6);
        assert_eq!(agg.partition_key_table, vec!["partition-0", "partition-1"]);
        // even records use hash keys "0", "2", "1"
        assert_eq!(agg.explicit_hash_key_table, vec!["0", "2", "1"]);
        assert_eq!(agg.records[5].data, b"data-5".to_vec());
        Ok(())
    }
}
