//! EmberDNS Domain Layer
pub mod config;
pub mod dns_message;
pub mod dns_record;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_message::{Header, Message, Question, ResponseCode, HEADER_LEN};
pub use dns_record::{RData, RecordType, ResourceRecord, CLASS_IN};
pub use errors::DomainError;
