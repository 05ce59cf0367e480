use super::{MAX_LABEL_LEN, MAX_NAME_LEN, MAX_TXT_SEGMENT_LEN};
use emberdns_domain::{DomainError, Message, Question, RData, ResourceRecord, HEADER_LEN};

/// Encodes a [`Message`] into wire bytes.
///
/// Header counts are derived from the section lengths, never taken from
/// `message.header`. Names are written uncompressed.
pub fn encode(message: &Message) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(512);

    buf.extend_from_slice(&message.header.id.to_be_bytes());
    buf.extend_from_slice(&message.header.flags.to_be_bytes());
    for (len, section) in [
        (message.questions.len(), "question"),
        (message.answers.len(), "answer"),
        (message.authorities.len(), "authority"),
        (message.additionals.len(), "additional"),
    ] {
        buf.extend_from_slice(&section_count(len, section)?.to_be_bytes());
    }
    debug_assert_eq!(buf.len(), HEADER_LEN);

    for question in &message.questions {
        write_question(&mut buf, question)?;
    }

    for record in message
        .answers
        .iter()
        .chain(&message.authorities)
        .chain(&message.additionals)
    {
        write_record(&mut buf, record)?;
    }

    Ok(buf)
}

/// Writes `name` as length-prefixed labels plus the terminating zero.
///
/// A single trailing dot is read as the explicit root; `""` and `"."` both
/// encode the root name.
pub fn write_name(buf: &mut Vec<u8>, name: &str) -> Result<(), DomainError> {
    let relative = name.strip_suffix('.').unwrap_or(name);
    let start = buf.len();

    if !relative.is_empty() {
        for label in relative.split('.') {
            if label.is_empty() {
                return Err(DomainError::InvalidDomainName(format!(
                    "empty label in '{}'",
                    name
                )));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DomainError::InvalidDomainName(format!(
                    "label '{}' exceeds {} bytes",
                    label, MAX_LABEL_LEN
                )));
            }
            buf.push(label.len() as u8);
            buf.extend_from_slice(label.as_bytes());
        }
    }
    buf.push(0);

    if buf.len() - start > MAX_NAME_LEN {
        return Err(DomainError::InvalidDomainName(format!(
            "'{}' exceeds {} bytes on the wire",
            name, MAX_NAME_LEN
        )));
    }
    Ok(())
}

fn write_question(buf: &mut Vec<u8>, question: &Question) -> Result<(), DomainError> {
    write_name(buf, &question.name)?;
    buf.extend_from_slice(&question.record_type.to_u16().to_be_bytes());
    buf.extend_from_slice(&question.class.to_be_bytes());
    Ok(())
}

fn write_record(buf: &mut Vec<u8>, record: &ResourceRecord) -> Result<(), DomainError> {
    if !record.is_consistent() {
        return Err(DomainError::InvalidRecord(format!(
            "{} record for {} carries a mismatched payload",
            record.record_type, record.name
        )));
    }

    write_name(buf, &record.name)?;
    buf.extend_from_slice(&record.record_type.to_u16().to_be_bytes());
    buf.extend_from_slice(&record.class.to_be_bytes());
    buf.extend_from_slice(&record.ttl.to_be_bytes());

    // rdlength is patched once the payload size is known
    let length_at = buf.len();
    buf.extend_from_slice(&[0, 0]);
    write_rdata(buf, &record.data)?;

    let rdlength = u16::try_from(buf.len() - length_at - 2).map_err(|_| {
        DomainError::InvalidRecord(format!(
            "{} payload for {} exceeds 65535 bytes",
            record.record_type, record.name
        ))
    })?;
    buf[length_at..length_at + 2].copy_from_slice(&rdlength.to_be_bytes());
    Ok(())
}

fn write_rdata(buf: &mut Vec<u8>, data: &RData) -> Result<(), DomainError> {
    match data {
        RData::A(addr) => buf.extend_from_slice(&addr.octets()),
        RData::AAAA(addr) => buf.extend_from_slice(&addr.octets()),
        RData::CNAME(target) => write_name(buf, target)?,
        RData::MX {
            preference,
            exchange,
        } => {
            buf.extend_from_slice(&preference.to_be_bytes());
            write_name(buf, exchange)?;
        }
        RData::TXT(segments) => {
            for segment in segments {
                if segment.len() > MAX_TXT_SEGMENT_LEN {
                    return Err(DomainError::InvalidRecord(format!(
                        "TXT segment of {} bytes exceeds {}",
                        segment.len(),
                        MAX_TXT_SEGMENT_LEN
                    )));
                }
                buf.push(segment.len() as u8);
                buf.extend_from_slice(segment.as_bytes());
            }
        }
        RData::Opaque(bytes) => buf.extend_from_slice(bytes),
    }
    Ok(())
}

fn section_count(len: usize, section: &str) -> Result<u16, DomainError> {
    u16::try_from(len).map_err(|_| {
        DomainError::InvalidRecord(format!("{} section has {} entries, max 65535", section, len))
    })
}
