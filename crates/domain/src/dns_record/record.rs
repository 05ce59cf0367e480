use super::{RData, RecordType};
use std::fmt;

pub const CLASS_IN: u16 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,

    pub record_type: RecordType,

    pub class: u16,

    pub ttl: u32,

    pub data: RData,
}

impl ResourceRecord {
    pub fn new(name: impl Into<String>, record_type: RecordType, ttl: u32, data: RData) -> Self {
        Self {
            name: name.into(),
            record_type,
            class: CLASS_IN,
            ttl,
            data,
        }
    }

    /// Builds a record whose type is taken from the payload variant.
    ///
    /// Opaque payloads carry no type of their own; use [`ResourceRecord::new`]
    /// for those.
    pub fn from_rdata(name: impl Into<String>, ttl: u32, data: RData) -> Self {
        let record_type = data.record_type().unwrap_or(RecordType::Unknown(0));
        Self::new(name, record_type, ttl, data)
    }

    pub fn with_class(mut self, class: u16) -> Self {
        self.class = class;
        self
    }

    /// A record is consistent when its payload variant agrees with its type:
    /// structured payloads must match exactly, opaque payloads only travel
    /// under types the codec does not interpret.
    pub fn is_consistent(&self) -> bool {
        match self.data.record_type() {
            Some(implied) => implied == self.record_type,
            None => !self.record_type.has_structured_payload(),
        }
    }
}

impl fmt::Display for ResourceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let class = if self.class == CLASS_IN {
            "IN".to_string()
        } else {
            format!("CLASS{}", self.class)
        };
        write!(
            f,
            "{} {} {} {} {}",
            self.name, self.ttl, class, self.record_type, self.data
        )
    }
}
