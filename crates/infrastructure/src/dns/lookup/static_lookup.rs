use async_trait::async_trait;
use emberdns_application::ports::RecordLookup;
use emberdns_domain::{DomainError, RData, RecordType, ResourceRecord};
use std::net::{Ipv4Addr, Ipv6Addr};

pub const STATIC_IPV4: Ipv4Addr = Ipv4Addr::new(1, 2, 3, 4);
pub const STATIC_IPV6: Ipv6Addr = Ipv6Addr::LOCALHOST;
pub const STATIC_CNAME: &str = "example.com.";
pub const STATIC_MX_PREFERENCE: u16 = 10;
pub const STATIC_MX_HOST: &str = "mail.example.com.";
pub const STATIC_TXT: &str = "v=spf1 include:example.com ~all";
pub const STATIC_TTL: u32 = 300;

/// Fixed answer per record type.
///
/// Every question gets exactly one answer; types without a canned payload
/// get a record with empty data, so this policy never reports "no data".
#[derive(Debug, Clone)]
pub struct StaticRecordLookup {
    ttl: u32,
}

impl StaticRecordLookup {
    pub fn new() -> Self {
        Self { ttl: STATIC_TTL }
    }

    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn answer_for(&self, name: &str, record_type: RecordType) -> ResourceRecord {
        let data = match record_type {
            RecordType::A => RData::A(STATIC_IPV4),
            RecordType::AAAA => RData::AAAA(STATIC_IPV6),
            RecordType::CNAME => RData::CNAME(STATIC_CNAME.to_string()),
            RecordType::MX => RData::MX {
                preference: STATIC_MX_PREFERENCE,
                exchange: STATIC_MX_HOST.to_string(),
            },
            RecordType::TXT => RData::TXT(vec![STATIC_TXT.to_string()]),
            _ => RData::empty(),
        };
        ResourceRecord::new(name, record_type, self.ttl, data)
    }
}

impl Default for StaticRecordLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordLookup for StaticRecordLookup {
    async fn lookup(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Vec<ResourceRecord>, DomainError> {
        Ok(vec![self.answer_for(name, record_type)])
    }
}
