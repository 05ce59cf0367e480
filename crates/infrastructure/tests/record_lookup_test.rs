use emberdns_application::ports::RecordLookup;
use emberdns_domain::config::{LocalDnsRecord, ResolverConfig, ResolverMode};
use emberdns_domain::{DomainError, RData, RecordType};
use emberdns_infrastructure::dns::lookup::{
    STATIC_IPV4, STATIC_IPV6, STATIC_MX_HOST, STATIC_MX_PREFERENCE, STATIC_TTL, STATIC_TXT,
};
use emberdns_infrastructure::dns::{build_lookup, LocalRecordLookup, StaticRecordLookup};
use std::net::Ipv4Addr;

fn local_entry(name: &str, record_type: &str, value: &str) -> LocalDnsRecord {
    LocalDnsRecord {
        name: name.to_string(),
        zone: None,
        record_type: record_type.to_string(),
        value: value.to_string(),
        ttl: None,
    }
}

fn local_config(records: Vec<LocalDnsRecord>) -> ResolverConfig {
    ResolverConfig {
        mode: ResolverMode::Local,
        default_ttl: 120,
        records,
    }
}

// ── StaticRecordLookup ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_static_a_answer() {
    let answers = StaticRecordLookup::new()
        .lookup("example.com", RecordType::A)
        .await
        .unwrap();

    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].name, "example.com");
    assert_eq!(answers[0].data, RData::A(Ipv4Addr::new(1, 2, 3, 4)));
    assert_eq!(answers[0].data, RData::A(STATIC_IPV4));
    assert_eq!(answers[0].ttl, 300);
}

#[tokio::test]
async fn test_static_aaaa_answer() {
    let answers = StaticRecordLookup::new()
        .lookup("example.com", RecordType::AAAA)
        .await
        .unwrap();

    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].data, RData::AAAA(STATIC_IPV6));
    assert_eq!(answers[0].ttl, STATIC_TTL);
}

#[tokio::test]
async fn test_static_mx_answer() {
    let answers = StaticRecordLookup::new()
        .lookup("example.com", RecordType::MX)
        .await
        .unwrap();

    assert_eq!(
        answers[0].data,
        RData::MX {
            preference: STATIC_MX_PREFERENCE,
            exchange: STATIC_MX_HOST.to_string(),
        }
    );
    assert_eq!(STATIC_MX_PREFERENCE, 10);
    assert_eq!(STATIC_MX_HOST, "mail.example.com.");
}

#[tokio::test]
async fn test_static_txt_and_cname_answers() {
    let lookup = StaticRecordLookup::new();

    let txt = lookup.lookup("example.com", RecordType::TXT).await.unwrap();
    assert_eq!(txt[0].data, RData::TXT(vec![STATIC_TXT.to_string()]));

    let cname = lookup.lookup("www.example.com", RecordType::CNAME).await.unwrap();
    assert_eq!(cname[0].record_type, RecordType::CNAME);
    assert!(cname[0].is_consistent());
}

#[tokio::test]
async fn test_static_unknown_type_gets_empty_payload() {
    let answers = StaticRecordLookup::new()
        .lookup("example.com", RecordType::Unknown(99))
        .await
        .unwrap();

    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].record_type, RecordType::Unknown(99));
    assert!(answers[0].data.is_empty());
    assert_eq!(answers[0].ttl, 300);
    assert!(answers[0].is_consistent());
}

#[tokio::test]
async fn test_static_with_ttl_override() {
    let answers = StaticRecordLookup::new()
        .with_ttl(42)
        .lookup("example.com", RecordType::A)
        .await
        .unwrap();
    assert_eq!(answers[0].ttl, 42);
}

// ── LocalRecordLookup ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_local_lookup_matches_case_insensitively() {
    let lookup = LocalRecordLookup::from_config(&local_config(vec![local_entry(
        "NAS.home.lan",
        "A",
        "192.168.1.20",
    )]))
    .unwrap();

    let answers = lookup.lookup("nas.HOME.lan.", RecordType::A).await.unwrap();
    assert_eq!(answers.len(), 1);
    assert_eq!(answers[0].data, RData::A(Ipv4Addr::new(192, 168, 1, 20)));
    assert_eq!(answers[0].ttl, 120);
}

#[tokio::test]
async fn test_local_lookup_groups_records_by_name_and_type() {
    let lookup = LocalRecordLookup::from_config(&local_config(vec![
        local_entry("web.lan", "A", "10.0.0.1"),
        local_entry("web.lan", "A", "10.0.0.2"),
        local_entry("web.lan", "TXT", "hello"),
    ]))
    .unwrap();

    assert_eq!(lookup.len(), 3);
    assert_eq!(lookup.lookup("web.lan", RecordType::A).await.unwrap().len(), 2);
    assert_eq!(lookup.lookup("web.lan", RecordType::TXT).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_local_lookup_unknown_name_or_type_is_empty() {
    let lookup = LocalRecordLookup::from_config(&local_config(vec![local_entry(
        "web.lan", "A", "10.0.0.1",
    )]))
    .unwrap();

    assert!(lookup.lookup("other.lan", RecordType::A).await.unwrap().is_empty());
    assert!(lookup.lookup("web.lan", RecordType::AAAA).await.unwrap().is_empty());
}

#[test]
fn test_local_lookup_rejects_invalid_entry() {
    let result = LocalRecordLookup::from_config(&local_config(vec![local_entry(
        "web.lan", "AAAA", "not-v6",
    )]));
    assert!(matches!(result, Err(DomainError::ConfigError(_))));
}

// ── build_lookup ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_build_lookup_follows_mode() {
    let static_lookup = build_lookup(&ResolverConfig::default()).unwrap();
    let answers = static_lookup
        .lookup("anything.test", RecordType::A)
        .await
        .unwrap();
    assert_eq!(answers[0].data, RData::A(STATIC_IPV4));

    let local = build_lookup(&local_config(vec![local_entry("a.lan", "A", "10.1.1.1")])).unwrap();
    assert!(local
        .lookup("anything.test", RecordType::A)
        .await
        .unwrap()
        .is_empty());
}
