use super::ResponseCode;

pub const HEADER_LEN: usize = 12;

const QR_MASK: u16 = 0x8000;
const OPCODE_MASK: u16 = 0x7800;
const OPCODE_SHIFT: u16 = 11;
const AA_MASK: u16 = 0x0400;
const TC_MASK: u16 = 0x0200;
const RD_MASK: u16 = 0x0100;
const RA_MASK: u16 = 0x0080;
const Z_MASK: u16 = 0x0070;
const RCODE_MASK: u16 = 0x000F;

/// Fixed 12-byte message header.
///
/// `flags` is kept as the raw bitfield so that bits this server does not
/// interpret (Z, unusual opcodes) survive a decode/encode cycle untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    pub flags: u16,
    pub qd_count: u16,
    pub an_count: u16,
    pub ns_count: u16,
    pub ar_count: u16,
}

impl Header {
    pub fn new(id: u16, flags: u16) -> Self {
        Self {
            id,
            flags,
            ..Self::default()
        }
    }

    pub fn is_response(&self) -> bool {
        self.flags & QR_MASK != 0
    }

    pub fn opcode(&self) -> u8 {
        ((self.flags & OPCODE_MASK) >> OPCODE_SHIFT) as u8
    }

    pub fn is_authoritative(&self) -> bool {
        self.flags & AA_MASK != 0
    }

    pub fn is_truncated(&self) -> bool {
        self.flags & TC_MASK != 0
    }

    pub fn recursion_desired(&self) -> bool {
        self.flags & RD_MASK != 0
    }

    pub fn recursion_available(&self) -> bool {
        self.flags & RA_MASK != 0
    }

    pub fn reserved(&self) -> u8 {
        ((self.flags & Z_MASK) >> 4) as u8
    }

    pub fn response_code(&self) -> ResponseCode {
        ResponseCode::from_u8((self.flags & RCODE_MASK) as u8)
    }

    pub fn set_response(&mut self, value: bool) -> &mut Self {
        self.set_bit(QR_MASK, value)
    }

    pub fn set_opcode(&mut self, opcode: u8) -> &mut Self {
        self.flags =
            (self.flags & !OPCODE_MASK) | ((u16::from(opcode) << OPCODE_SHIFT) & OPCODE_MASK);
        self
    }

    pub fn set_authoritative(&mut self, value: bool) -> &mut Self {
        self.set_bit(AA_MASK, value)
    }

    pub fn set_truncated(&mut self, value: bool) -> &mut Self {
        self.set_bit(TC_MASK, value)
    }

    pub fn set_recursion_desired(&mut self, value: bool) -> &mut Self {
        self.set_bit(RD_MASK, value)
    }

    pub fn set_recursion_available(&mut self, value: bool) -> &mut Self {
        self.set_bit(RA_MASK, value)
    }

    pub fn set_response_code(&mut self, code: ResponseCode) -> &mut Self {
        self.flags = (self.flags & !RCODE_MASK) | (u16::from(code.to_u8()) & RCODE_MASK);
        self
    }

    /// Flags for a reply to `request`: QR and RA set, opcode and RD echoed,
    /// everything else cleared.
    pub fn reply_flags(request: &Header, code: ResponseCode) -> u16 {
        let mut header = Header::new(0, request.flags & (OPCODE_MASK | RD_MASK));
        header
            .set_response(true)
            .set_recursion_available(true)
            .set_response_code(code);
        header.flags
    }

    fn set_bit(&mut self, mask: u16, value: bool) -> &mut Self {
        if value {
            self.flags |= mask;
        } else {
            self.flags &= !mask;
        }
        self
    }
}
