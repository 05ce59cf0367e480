use super::reader::WireReader;
use emberdns_domain::{
    DomainError, Header, Message, Question, RData, RecordType, ResourceRecord, HEADER_LEN,
};
use std::net::{Ipv4Addr, Ipv6Addr};

/// Smallest possible question: root name, type, class.
const MIN_QUESTION_LEN: usize = 5;
/// Smallest possible record: root name, type, class, ttl, rdlength.
const MIN_RECORD_LEN: usize = 11;

/// Decodes one datagram into a [`Message`].
///
/// Fails with [`DomainError::MalformedMessage`] for anything that does not
/// frame exactly: short header, sections running past the end, counts the
/// buffer cannot hold, payloads disagreeing with `rdlength`, compression
/// pointers, or bytes left over after the last declared section.
pub fn decode(buf: &[u8]) -> Result<Message, DomainError> {
    if buf.len() < HEADER_LEN {
        return Err(DomainError::malformed(format!(
            "message is {} bytes, header needs {}",
            buf.len(),
            HEADER_LEN
        )));
    }

    let mut reader = WireReader::new(buf);
    let header = read_header(&mut reader)?;

    let record_count = usize::from(header.an_count)
        + usize::from(header.ns_count)
        + usize::from(header.ar_count);
    let minimum =
        usize::from(header.qd_count) * MIN_QUESTION_LEN + record_count * MIN_RECORD_LEN;
    if minimum > reader.remaining() {
        return Err(DomainError::malformed(format!(
            "section counts (qd={}, an={}, ns={}, ar={}) need at least {} bytes, {} available",
            header.qd_count,
            header.an_count,
            header.ns_count,
            header.ar_count,
            minimum,
            reader.remaining()
        )));
    }

    let mut questions = Vec::with_capacity(usize::from(header.qd_count));
    for _ in 0..header.qd_count {
        questions.push(read_question(&mut reader)?);
    }

    let answers = read_records(&mut reader, header.an_count)?;
    let authorities = read_records(&mut reader, header.ns_count)?;
    let additionals = read_records(&mut reader, header.ar_count)?;

    if !reader.is_empty() {
        return Err(DomainError::malformed(format!(
            "{} trailing bytes after offset {}",
            reader.remaining(),
            reader.position()
        )));
    }

    Ok(Message {
        header,
        questions,
        answers,
        authorities,
        additionals,
    })
}

fn read_header(reader: &mut WireReader<'_>) -> Result<Header, DomainError> {
    Ok(Header {
        id: reader.read_u16("id")?,
        flags: reader.read_u16("flags")?,
        qd_count: reader.read_u16("qdcount")?,
        an_count: reader.read_u16("ancount")?,
        ns_count: reader.read_u16("nscount")?,
        ar_count: reader.read_u16("arcount")?,
    })
}

fn read_question(reader: &mut WireReader<'_>) -> Result<Question, DomainError> {
    let name = reader.read_name()?;
    let record_type = RecordType::from_u16(reader.read_u16("question type")?);
    let class = reader.read_u16("question class")?;
    Ok(Question {
        name,
        record_type,
        class,
    })
}

fn read_records(
    reader: &mut WireReader<'_>,
    count: u16,
) -> Result<Vec<ResourceRecord>, DomainError> {
    let mut records = Vec::with_capacity(usize::from(count));
    for _ in 0..count {
        records.push(read_record(reader)?);
    }
    Ok(records)
}

fn read_record(reader: &mut WireReader<'_>) -> Result<ResourceRecord, DomainError> {
    let name = reader.read_name()?;
    let record_type = RecordType::from_u16(reader.read_u16("record type")?);
    let class = reader.read_u16("record class")?;
    let ttl = reader.read_u32("ttl")?;
    let rdlength = reader.read_u16("rdlength")?;
    let rdata = reader.read_bytes(usize::from(rdlength), "rdata")?;

    Ok(ResourceRecord {
        name,
        record_type,
        class,
        ttl,
        data: decode_rdata(record_type, rdata)?,
    })
}

/// Decodes a payload confined to its own `rdlength` slice.
fn decode_rdata(record_type: RecordType, rdata: &[u8]) -> Result<RData, DomainError> {
    let mut reader = WireReader::new(rdata);

    let data = match record_type {
        RecordType::A => {
            let octets: [u8; 4] = reader
                .read_bytes(4, "A address")?
                .try_into()
                .map_err(|_| DomainError::malformed("A address"))?;
            RData::A(Ipv4Addr::from(octets))
        }
        RecordType::AAAA => {
            let octets: [u8; 16] = reader
                .read_bytes(16, "AAAA address")?
                .try_into()
                .map_err(|_| DomainError::malformed("AAAA address"))?;
            RData::AAAA(Ipv6Addr::from(octets))
        }
        RecordType::CNAME => RData::CNAME(reader.read_name()?),
        RecordType::MX => {
            let preference = reader.read_u16("MX preference")?;
            let exchange = reader.read_name()?;
            RData::MX {
                preference,
                exchange,
            }
        }
        RecordType::TXT => {
            let mut segments = Vec::new();
            while !reader.is_empty() {
                let len = reader.read_u8("TXT segment length")?;
                let bytes = reader.read_bytes(usize::from(len), "TXT segment")?;
                let text = std::str::from_utf8(bytes)
                    .map_err(|_| DomainError::malformed("TXT segment is not valid UTF-8"))?;
                segments.push(text.to_string());
            }
            RData::TXT(segments)
        }
        _ => return Ok(RData::Opaque(rdata.to_vec())),
    };

    if !reader.is_empty() {
        return Err(DomainError::malformed(format!(
            "{} payload has {} unused bytes of rdlength {}",
            record_type,
            reader.remaining(),
            rdata.len()
        )));
    }

    Ok(data)
}
