#![allow(dead_code)]
use emberdns_domain::config::LocalDnsRecord;
use emberdns_domain::{Message, Question, RecordType};

pub fn a_query(id: u16, name: &str) -> Message {
    Message::query(id, Question::new(name, RecordType::A))
}

pub struct LocalRecordBuilder {
    name: String,
    zone: Option<String>,
    record_type: String,
    value: String,
    ttl: Option<u32>,
}

impl LocalRecordBuilder {
    pub fn new(name: &str, record_type: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            zone: None,
            record_type: record_type.to_string(),
            value: value.to_string(),
            ttl: None,
        }
    }

    pub fn zone(mut self, zone: &str) -> Self {
        self.zone = Some(zone.to_string());
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    pub fn build(self) -> LocalDnsRecord {
        LocalDnsRecord {
            name: self.name,
            zone: self.zone,
            record_type: self.record_type,
            value: self.value,
            ttl: self.ttl,
        }
    }
}
