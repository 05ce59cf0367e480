mod rdata;
mod record;
mod record_type;

pub use rdata::RData;
pub use record::{ResourceRecord, CLASS_IN};
pub use record_type::RecordType;
