#![allow(dead_code)]
use emberdns_domain::{Message, Question, RData, RecordType, ResourceRecord};
use emberdns_infrastructure::dns::wire;
use std::net::{Ipv4Addr, Ipv6Addr};

pub fn query(id: u16, name: &str, record_type: RecordType) -> Message {
    Message::query(id, Question::new(name, record_type))
}

pub fn query_bytes(id: u16, name: &str, record_type: RecordType) -> Vec<u8> {
    wire::encode(&query(id, name, record_type)).unwrap()
}

/// One record of every payload kind the codec understands, plus an opaque one.
pub fn sample_records(name: &str) -> Vec<ResourceRecord> {
    vec![
        ResourceRecord::from_rdata(name, 300, RData::A(Ipv4Addr::new(1, 2, 3, 4))),
        ResourceRecord::from_rdata(name, 300, RData::AAAA(Ipv6Addr::LOCALHOST)),
        ResourceRecord::from_rdata(name, 60, RData::CNAME("target.example.com".to_string())),
        ResourceRecord::from_rdata(
            name,
            3600,
            RData::MX {
                preference: 10,
                exchange: "mail.example.com".to_string(),
            },
        ),
        ResourceRecord::from_rdata(
            name,
            0,
            RData::TXT(vec!["v=spf1 ~all".to_string(), String::new()]),
        ),
        ResourceRecord::new(name, RecordType::Unknown(99), 300, RData::Opaque(vec![7, 8, 9])),
    ]
}

/// Header bytes with explicit counts.
pub fn raw_header(id: u16, flags: u16, qd: u16, an: u16, ns: u16, ar: u16) -> Vec<u8> {
    [id, flags, qd, an, ns, ar]
        .iter()
        .flat_map(|field| field.to_be_bytes())
        .collect()
}
