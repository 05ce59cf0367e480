use super::RecordType;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Record payload, tagged by the kinds the codec understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    CNAME(String),
    MX { preference: u16, exchange: String },
    /// Ordered character-strings; each one is framed by its own length byte
    /// on the wire.
    TXT(Vec<String>),
    /// Payload of a type without structured support. Empty for synthesized
    /// answers, raw `rdata` bytes when decoded from the wire.
    Opaque(Vec<u8>),
}

impl RData {
    /// The record type this payload implies, or `None` for opaque data which
    /// can travel under any type code.
    pub fn record_type(&self) -> Option<RecordType> {
        match self {
            RData::A(_) => Some(RecordType::A),
            RData::AAAA(_) => Some(RecordType::AAAA),
            RData::CNAME(_) => Some(RecordType::CNAME),
            RData::MX { .. } => Some(RecordType::MX),
            RData::TXT(_) => Some(RecordType::TXT),
            RData::Opaque(_) => None,
        }
    }

    pub fn empty() -> Self {
        RData::Opaque(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RData::Opaque(bytes) if bytes.is_empty())
    }
}

impl fmt::Display for RData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RData::A(addr) => write!(f, "{}", addr),
            RData::AAAA(addr) => write!(f, "{}", addr),
            RData::CNAME(target) => write!(f, "{}", target),
            RData::MX {
                preference,
                exchange,
            } => write!(f, "{} {}", preference, exchange),
            RData::TXT(segments) => {
                let quoted: Vec<String> = segments.iter().map(|s| format!("{:?}", s)).collect();
                write!(f, "{}", quoted.join(" "))
            }
            RData::Opaque(bytes) => write!(f, "\\# {}", bytes.len()),
        }
    }
}
