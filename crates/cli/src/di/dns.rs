use emberdns_application::use_cases::HandleDnsQueryUseCase;
use emberdns_domain::Config;
use emberdns_infrastructure::dns::{build_lookup, DnsServerHandler};
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub handler_use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        info!(mode = ?config.resolver.mode, "Initializing DNS services");

        let lookup = build_lookup(&config.resolver)?;
        let handler_use_case = Arc::new(HandleDnsQueryUseCase::new(lookup));

        Ok(Self { handler_use_case })
    }

    pub fn handler(&self) -> DnsServerHandler {
        DnsServerHandler::new(Arc::clone(&self.handler_use_case))
    }
}
