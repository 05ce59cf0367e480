use async_trait::async_trait;
use emberdns_domain::{DomainError, RecordType, ResourceRecord};

/// Source of answer records for a single question.
///
/// Called once per question. An empty list means "no such data" and must
/// produce zero answers. Implementations own their own timeouts; the caller
/// awaits the lookup inline in the datagram handler.
#[async_trait]
pub trait RecordLookup: Send + Sync {
    async fn lookup(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Vec<ResourceRecord>, DomainError>;
}
