mod helpers;

use emberdns_domain::{
    Header, Message, Question, RData, RecordType, ResourceRecord, ResponseCode, CLASS_IN,
};
use helpers::a_query;
use std::net::Ipv4Addr;

// ── Header flags ───────────────────────────────────────────────────────────

#[test]
fn test_header_standard_query_flags() {
    let header = Header::new(7, 0x0100);

    assert!(!header.is_response());
    assert_eq!(header.opcode(), 0);
    assert!(header.recursion_desired());
    assert!(!header.recursion_available());
    assert!(!header.is_truncated());
    assert!(!header.is_authoritative());
    assert_eq!(header.reserved(), 0);
    assert_eq!(header.response_code(), ResponseCode::NoError);
}

#[test]
fn test_header_setters_touch_only_their_bits() {
    let mut header = Header::new(1, 0);
    header
        .set_response(true)
        .set_opcode(2)
        .set_authoritative(true)
        .set_response_code(ResponseCode::NxDomain);

    assert!(header.is_response());
    assert_eq!(header.opcode(), 2);
    assert!(header.is_authoritative());
    assert!(!header.recursion_desired());
    assert_eq!(header.response_code(), ResponseCode::NxDomain);

    header.set_response(false);
    assert!(!header.is_response());
    assert_eq!(header.opcode(), 2);
    assert_eq!(header.response_code(), ResponseCode::NxDomain);
}

#[test]
fn test_reply_flags_for_recursive_query() {
    let request = Header::new(0x1234, 0x0100);
    assert_eq!(
        Header::reply_flags(&request, ResponseCode::NoError),
        0x8180
    );
}

#[test]
fn test_reply_flags_without_recursion_desired() {
    let request = Header::new(0x1234, 0x0000);
    let flags = Header::reply_flags(&request, ResponseCode::NoError);

    let reply = Header::new(0, flags);
    assert!(reply.is_response());
    assert!(!reply.recursion_desired());
    assert!(reply.recursion_available());
}

#[test]
fn test_reply_flags_echo_opcode_and_clear_request_noise() {
    // opcode 2, AA, TC and a stray rcode on the request
    let request = Header::new(1, 0x1000 | 0x0400 | 0x0200 | 0x0003);
    let reply = Header::new(0, Header::reply_flags(&request, ResponseCode::ServFail));

    assert_eq!(reply.opcode(), 2);
    assert!(!reply.is_authoritative());
    assert!(!reply.is_truncated());
    assert_eq!(reply.response_code(), ResponseCode::ServFail);
}

// ── Response codes ─────────────────────────────────────────────────────────

#[test]
fn test_response_code_numeric_mapping() {
    assert_eq!(ResponseCode::from_u8(0), ResponseCode::NoError);
    assert_eq!(ResponseCode::from_u8(2), ResponseCode::ServFail);
    assert_eq!(ResponseCode::from_u8(3), ResponseCode::NxDomain);
    assert_eq!(ResponseCode::from_u8(9), ResponseCode::Other(9));
    assert_eq!(ResponseCode::ServFail.to_u8(), 2);
    assert_eq!(ResponseCode::Refused.as_str(), "REFUSED");
}

// ── Message ────────────────────────────────────────────────────────────────

#[test]
fn test_query_builds_single_question_with_rd() {
    let query = a_query(42, "example.com");

    assert_eq!(query.header.id, 42);
    assert!(query.header.recursion_desired());
    assert_eq!(query.header.qd_count, 1);
    assert_eq!(query.questions[0].class, CLASS_IN);
    assert!(query.counts_match_sections());
}

#[test]
fn test_reply_to_echoes_id_and_questions() {
    let request = a_query(0xBEEF, "example.com");
    let answer = ResourceRecord::from_rdata(
        "example.com",
        300,
        RData::A(Ipv4Addr::new(1, 2, 3, 4)),
    );

    let reply = Message::reply_to(&request, vec![answer], ResponseCode::NoError);

    assert_eq!(reply.header.id, 0xBEEF);
    assert_eq!(reply.questions, request.questions);
    assert_eq!(reply.header.an_count, 1);
    assert_eq!(reply.header.flags, 0x8180);
    assert!(reply.authorities.is_empty());
    assert!(reply.additionals.is_empty());
    assert!(reply.counts_match_sections());
}

#[test]
fn test_sync_counts_after_manual_edit() {
    let mut message = a_query(1, "a.test");
    message
        .questions
        .push(Question::new("b.test", RecordType::AAAA));
    assert!(!message.counts_match_sections());

    message.sync_counts();
    assert_eq!(message.header.qd_count, 2);
    assert!(message.counts_match_sections());
}

#[test]
fn test_message_response_code_reads_header() {
    let request = a_query(1, "fail.test");
    let reply = Message::reply_to(&request, Vec::new(), ResponseCode::ServFail);
    assert_eq!(reply.response_code(), ResponseCode::ServFail);
    assert_eq!(reply.header.an_count, 0);
}
