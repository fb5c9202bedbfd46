// tests/common/mod.rs
use go_zoom_kinesis_aggregation::AggregatedRecord;
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive("go_zoom_kinesis_aggregation=debug".parse().unwrap()),
            )
            .with_test_writer()
            .with_file(true)
            .with_line_number(true)
            .try_init()
            .ok();
    });
}

/// Lengths of the key tables and record list, plus the serialized size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateShape {
    pub size: usize,
    pub partition_keys: usize,
    pub hash_keys: usize,
    pub records: usize,
}

pub fn shape(agg: &AggregatedRecord) -> AggregateShape {
    AggregateShape {
        size: agg.size(),
        partition_keys: agg.partition_key_table.len(),
        hash_keys: agg.explicit_hash_key_table.len(),
        records: agg.records.len(),
    }
}

/// Assert every sub-record points inside the key tables
pub fn assert_indices_valid(agg: &AggregatedRecord) {
    for (i, record) in agg.records.iter().enumerate() {
        let pk = record
            .partition_key_index
            .unwrap_or_else(|| panic!("record {} has no partition key index", i));
        assert!(
            (pk as usize) < agg.partition_key_table.len(),
            "record {} partition key index {} out of range",
            i,
            pk
        );
        if let Some(hk) = record.explicit_hash_key_index {
            assert!(
                (hk as usize) < agg.explicit_hash_key_table.len(),
                "record {} hash key index {} out of range",
                i,
                hk
            );
        }
    }
}
