#![allow(dead_code)]

use async_trait::async_trait;
use emberdns_application::ports::RecordLookup;
use emberdns_domain::{DomainError, RecordType, ResourceRecord};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

/// In-memory lookup keyed by `(name, type)` that records every call.
#[derive(Clone, Default)]
pub struct MockRecordLookup {
    answers: Arc<RwLock<HashMap<(String, RecordType), Vec<ResourceRecord>>>>,
    failing: Arc<RwLock<HashSet<String>>>,
    calls: Arc<RwLock<Vec<(String, RecordType)>>>,
}

impl MockRecordLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_answers(&self, name: &str, record_type: RecordType, records: Vec<ResourceRecord>) {
        self.answers
            .write()
            .unwrap()
            .insert((name.to_string(), record_type), records);
    }

    pub fn fail_for(&self, name: &str) {
        self.failing.write().unwrap().insert(name.to_string());
    }

    pub fn calls(&self) -> Vec<(String, RecordType)> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl RecordLookup for MockRecordLookup {
    async fn lookup(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Vec<ResourceRecord>, DomainError> {
        self.calls
            .write()
            .unwrap()
            .push((name.to_string(), record_type));

        if self.failing.read().unwrap().contains(name) {
            return Err(DomainError::LookupFailed(format!("backend down for {}", name)));
        }

        Ok(self
            .answers
            .read()
            .unwrap()
            .get(&(name.to_string(), record_type))
            .cloned()
            .unwrap_or_default())
    }
}
