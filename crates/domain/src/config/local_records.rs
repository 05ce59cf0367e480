use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use super::errors::ConfigError;
use crate::dns_record::{RData, RecordType, ResourceRecord};

/// A statically configured record, the file-based counterpart of a
/// zone/record pair managed elsewhere.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LocalDnsRecord {
    /// Owner name. `@` stands for the zone apex when `zone` is set.
    pub name: String,

    #[serde(default)]
    pub zone: Option<String>,

    pub record_type: String,

    /// Textual payload: an address for A/AAAA, a host for CNAME,
    /// `"<preference> <host>"` for MX, free text for TXT.
    pub value: String,

    #[serde(default)]
    pub ttl: Option<u32>,
}

impl LocalDnsRecord {
    pub fn fqdn(&self) -> String {
        let name = self.name.trim_end_matches('.');
        match self.zone.as_deref().map(|z| z.trim_end_matches('.')) {
            Some(zone) if name == "@" || name.is_empty() => zone.to_string(),
            Some(zone) if !zone.is_empty() => format!("{}.{}", name, zone),
            _ => name.to_string(),
        }
    }

    pub fn ttl_or(&self, default_ttl: u32) -> u32 {
        self.ttl.unwrap_or(default_ttl)
    }

    pub fn parsed_type(&self) -> Result<RecordType, ConfigError> {
        RecordType::from_str(&self.record_type).map_err(ConfigError::Validation)
    }

    /// Converts the entry into a wire-ready record.
    pub fn to_resource_record(&self, default_ttl: u32) -> Result<ResourceRecord, ConfigError> {
        let record_type = self.parsed_type()?;
        let value = self.value.trim();
        let data = match record_type {
            RecordType::A => RData::A(Ipv4Addr::from_str(value).map_err(|_| self.invalid())?),
            RecordType::AAAA => {
                RData::AAAA(Ipv6Addr::from_str(value).map_err(|_| self.invalid())?)
            }
            RecordType::CNAME => {
                if value.is_empty() {
                    return Err(self.invalid());
                }
                RData::CNAME(value.to_string())
            }
            RecordType::MX => {
                let (preference, exchange) = value
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| self.invalid())?;
                let preference = preference.parse::<u16>().map_err(|_| self.invalid())?;
                let exchange = exchange.trim();
                if exchange.is_empty() {
                    return Err(self.invalid());
                }
                RData::MX {
                    preference,
                    exchange: exchange.to_string(),
                }
            }
            RecordType::TXT => {
                if self.value.len() > 255 {
                    return Err(self.invalid());
                }
                RData::TXT(vec![self.value.clone()])
            }
            other => {
                return Err(ConfigError::Validation(format!(
                    "Record type {} is not supported for local record {}",
                    other,
                    self.fqdn()
                )))
            }
        };

        Ok(ResourceRecord::new(
            self.fqdn(),
            record_type,
            self.ttl_or(default_ttl),
            data,
        ))
    }

    fn invalid(&self) -> ConfigError {
        ConfigError::Validation(format!(
            "Invalid {} value '{}' for local record {}",
            self.record_type,
            self.value,
            self.fqdn()
        ))
    }
}
