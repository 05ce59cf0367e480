use super::{LABEL_TYPE_MASK, MAX_NAME_LEN};
use emberdns_domain::DomainError;

const POINTER_LABEL: u8 = 0xC0;

/// Cursor over a received buffer.
///
/// Every read is bounds-checked against the slice it was created from, so
/// a reader built over an `rdata` slice can never see bytes of the
/// surrounding message.
pub(crate) struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub(crate) fn read_bytes(&mut self, len: usize, what: &str) -> Result<&'a [u8], DomainError> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= self.buf.len())
            .ok_or_else(|| {
                DomainError::malformed(format!(
                    "{} needs {} bytes at offset {}, only {} left",
                    what,
                    len,
                    self.pos,
                    self.remaining()
                ))
            })?;
        let bytes = &self.buf[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    pub(crate) fn read_u8(&mut self, what: &str) -> Result<u8, DomainError> {
        Ok(self.read_bytes(1, what)?[0])
    }

    pub(crate) fn read_u16(&mut self, what: &str) -> Result<u16, DomainError> {
        let bytes = self.read_bytes(2, what)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub(crate) fn read_u32(&mut self, what: &str) -> Result<u32, DomainError> {
        let bytes = self.read_bytes(4, what)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Reads an uncompressed name. The root name decodes to `""`.
    pub(crate) fn read_name(&mut self) -> Result<String, DomainError> {
        let start = self.pos;
        let mut name = String::new();
        let mut first_label = true;

        loop {
            let label_len = self.read_u8("label length")?;
            if label_len == 0 {
                break;
            }

            match label_len & LABEL_TYPE_MASK {
                0 => {}
                POINTER_LABEL => {
                    return Err(DomainError::malformed(format!(
                        "compression pointer at offset {} is not supported",
                        self.pos - 1
                    )))
                }
                _ => {
                    return Err(DomainError::malformed(format!(
                        "reserved label type 0x{:02x} at offset {}",
                        label_len,
                        self.pos - 1
                    )))
                }
            }

            let label = self.read_bytes(usize::from(label_len), "label")?;
            // +1 for the terminating zero still to come
            if self.pos - start + 1 > MAX_NAME_LEN {
                return Err(DomainError::malformed(format!(
                    "name starting at offset {} exceeds {} bytes",
                    start, MAX_NAME_LEN
                )));
            }

            // names are held as dotted strings, so a dot inside a label
            // could not be told apart from a label boundary
            if label.contains(&b'.') {
                return Err(DomainError::malformed(format!(
                    "label in name at offset {} contains '.'",
                    start
                )));
            }

            let text = std::str::from_utf8(label).map_err(|_| {
                DomainError::malformed(format!("label at offset {} is not valid UTF-8", start))
            })?;

            if !first_label {
                name.push('.');
            }
            first_label = false;
            name.push_str(text);
        }

        Ok(name)
    }
}
