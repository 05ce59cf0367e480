//! Wire codec (RFC 1035 §4.1) without name compression.
//!
//! `decode` rejects compression pointers outright and `encode` never emits
//! them, so every name in a message is written out in full.

mod decode;
mod encode;
mod reader;

pub use decode::decode;
pub use encode::{encode, write_name};

pub const MAX_LABEL_LEN: usize = 63;
pub const MAX_NAME_LEN: usize = 255;
pub const MAX_TXT_SEGMENT_LEN: usize = 255;

/// Top two bits of a length byte select the label type.
pub(crate) const LABEL_TYPE_MASK: u8 = 0xC0;
