use crate::dns::wire;
use emberdns_application::use_cases::HandleDnsQueryUseCase;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Turns one received datagram into the bytes of its reply.
#[derive(Clone)]
pub struct DnsServerHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServerHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    /// Decodes, resolves and encodes. Returns `None` when the datagram must
    /// be dropped without a reply.
    pub async fn handle_datagram(&self, datagram: &[u8], client: SocketAddr) -> Option<Vec<u8>> {
        let request = match wire::decode(datagram) {
            Ok(message) => message,
            Err(e) => {
                warn!(
                    client = %client,
                    bytes = datagram.len(),
                    error = %e,
                    "Dropping malformed datagram"
                );
                return None;
            }
        };

        if request.header.is_response() {
            debug!(
                client = %client,
                id = request.header.id,
                "Ignoring datagram with QR bit set"
            );
            return None;
        }

        for question in &request.questions {
            info!(
                domain = %question.name,
                record_type = %question.record_type,
                client = %client,
                "DNS query received"
            );
        }

        let reply = self.use_case.execute(&request).await;

        match wire::encode(&reply) {
            Ok(bytes) => {
                debug!(
                    client = %client,
                    id = reply.header.id,
                    answers = reply.answers.len(),
                    bytes = bytes.len(),
                    "Sending response"
                );
                Some(bytes)
            }
            Err(e) => {
                error!(
                    client = %client,
                    id = reply.header.id,
                    error = %e,
                    "Failed to encode response"
                );
                None
            }
        }
    }
}
