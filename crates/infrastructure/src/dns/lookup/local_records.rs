use async_trait::async_trait;
use emberdns_application::ports::RecordLookup;
use emberdns_domain::config::ResolverConfig;
use emberdns_domain::{DomainError, RecordType, ResourceRecord};
use std::collections::HashMap;
use tracing::info;

type RecordKey = (String, RecordType);

/// Answers from a fixed table of configured records.
///
/// Names match case-insensitively and without a trailing dot. Anything not
/// in the table yields an empty answer list.
#[derive(Debug, Default)]
pub struct LocalRecordLookup {
    records: HashMap<RecordKey, Vec<ResourceRecord>>,
}

impl LocalRecordLookup {
    pub fn new(records: impl IntoIterator<Item = ResourceRecord>) -> Self {
        let mut table: HashMap<RecordKey, Vec<ResourceRecord>> = HashMap::new();
        for record in records {
            table
                .entry((normalize_name(&record.name), record.record_type))
                .or_default()
                .push(record);
        }
        Self { records: table }
    }

    pub fn from_config(config: &ResolverConfig) -> Result<Self, DomainError> {
        let records = config
            .records
            .iter()
            .map(|entry| {
                entry
                    .to_resource_record(config.default_ttl)
                    .map_err(|e| DomainError::ConfigError(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let lookup = Self::new(records);
        info!(records = lookup.len(), "Local records loaded");
        Ok(lookup)
    }

    pub fn len(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl RecordLookup for LocalRecordLookup {
    async fn lookup(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Vec<ResourceRecord>, DomainError> {
        Ok(self
            .records
            .get(&(normalize_name(name), record_type))
            .cloned()
            .unwrap_or_default())
    }
}

fn normalize_name(name: &str) -> String {
    name.trim_end_matches('.').to_ascii_lowercase()
}
