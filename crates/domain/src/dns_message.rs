mod header;
mod question;
mod response_code;

pub use header::{Header, HEADER_LEN};
pub use question::Question;
pub use response_code::ResponseCode;

use crate::dns_record::ResourceRecord;

/// Standard query opcode.
pub const OPCODE_QUERY: u8 = 0;

/// In-memory form of one datagram.
///
/// Authority and additional sections are carried so that decoded requests
/// (e.g. ones with an EDNS OPT record) keep consistent counts; reply assembly
/// never fills them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl Message {
    /// Single-question standard query with recursion desired.
    pub fn query(id: u16, question: Question) -> Self {
        let mut header = Header::new(id, 0);
        header.set_opcode(OPCODE_QUERY).set_recursion_desired(true);
        let mut message = Self {
            header,
            questions: vec![question],
            ..Self::default()
        };
        message.sync_counts();
        message
    }

    /// Reply carrying the request's id and questions plus `answers`.
    pub fn reply_to(request: &Message, answers: Vec<ResourceRecord>, code: ResponseCode) -> Self {
        let header = Header::new(request.header.id, Header::reply_flags(&request.header, code));
        let mut message = Self {
            header,
            questions: request.questions.clone(),
            answers,
            authorities: Vec::new(),
            additionals: Vec::new(),
        };
        message.sync_counts();
        message
    }

    /// Recomputes header counts from the section lengths, saturating at
    /// `u16::MAX`. The encoder rejects sections that large anyway.
    pub fn sync_counts(&mut self) -> &mut Self {
        self.header.qd_count = saturating_count(self.questions.len());
        self.header.an_count = saturating_count(self.answers.len());
        self.header.ns_count = saturating_count(self.authorities.len());
        self.header.ar_count = saturating_count(self.additionals.len());
        self
    }

    pub fn counts_match_sections(&self) -> bool {
        usize::from(self.header.qd_count) == self.questions.len()
            && usize::from(self.header.an_count) == self.answers.len()
            && usize::from(self.header.ns_count) == self.authorities.len()
            && usize::from(self.header.ar_count) == self.additionals.len()
    }

    pub fn response_code(&self) -> ResponseCode {
        self.header.response_code()
    }
}

fn saturating_count(len: usize) -> u16 {
    u16::try_from(len).unwrap_or(u16::MAX)
}
