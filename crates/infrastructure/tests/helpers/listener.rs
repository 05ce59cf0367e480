#![allow(dead_code)]
use async_trait::async_trait;
use emberdns_application::ports::RecordLookup;
use emberdns_application::use_cases::HandleDnsQueryUseCase;
use emberdns_domain::config::ListenerConfig;
use emberdns_domain::{DomainError, RecordType, ResourceRecord};
use emberdns_infrastructure::dns::{
    DnsServerHandler, ListenerHandle, StaticRecordLookup, UdpListener,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::task::JoinHandle;

pub const TEST_RECV_TIMEOUT_MS: u64 = 100;
pub const REPLY_WAIT: Duration = Duration::from_secs(2);

pub fn static_handler() -> DnsServerHandler {
    let use_case = HandleDnsQueryUseCase::new(Arc::new(StaticRecordLookup::new()));
    DnsServerHandler::new(Arc::new(use_case))
}

/// Static answers delivered only after `delay`, to keep handlers in flight.
pub struct SlowRecordLookup {
    delay: Duration,
    inner: StaticRecordLookup,
}

impl SlowRecordLookup {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            inner: StaticRecordLookup::new(),
        }
    }
}

#[async_trait]
impl RecordLookup for SlowRecordLookup {
    async fn lookup(
        &self,
        name: &str,
        record_type: RecordType,
    ) -> Result<Vec<ResourceRecord>, DomainError> {
        tokio::time::sleep(self.delay).await;
        self.inner.lookup(name, record_type).await
    }
}

pub fn slow_handler(delay: Duration) -> DnsServerHandler {
    let use_case = HandleDnsQueryUseCase::new(Arc::new(SlowRecordLookup::new(delay)));
    DnsServerHandler::new(Arc::new(use_case))
}

pub fn test_listener_config() -> ListenerConfig {
    ListenerConfig {
        recv_timeout_ms: TEST_RECV_TIMEOUT_MS,
        ..ListenerConfig::default()
    }
}

/// Binds a static-policy listener on an ephemeral loopback port and runs it.
pub async fn spawn_listener() -> (ListenerHandle, JoinHandle<()>) {
    spawn_listener_on("127.0.0.1:0".parse().unwrap()).await
}

pub async fn spawn_listener_on(addr: SocketAddr) -> (ListenerHandle, JoinHandle<()>) {
    let listener = UdpListener::bind(addr, &test_listener_config(), static_handler())
        .await
        .unwrap();
    let handle = listener.handle();
    let task = tokio::spawn(listener.run());
    (handle, task)
}

pub async fn client_socket() -> UdpSocket {
    UdpSocket::bind("127.0.0.1:0").await.unwrap()
}

/// Sends `datagram` and waits up to [`REPLY_WAIT`] for one reply.
pub async fn exchange(
    client: &UdpSocket,
    server: SocketAddr,
    datagram: &[u8],
) -> Option<Vec<u8>> {
    client.send_to(datagram, server).await.unwrap();
    recv_reply(client, REPLY_WAIT).await
}

pub async fn recv_reply(client: &UdpSocket, wait: Duration) -> Option<Vec<u8>> {
    let mut buf = vec![0u8; 4096];
    match tokio::time::timeout(wait, client.recv_from(&mut buf)).await {
        Ok(Ok((len, _))) => Some(buf[..len].to_vec()),
        _ => None,
    }
}
