use emberdns_domain::Config;
use emberdns_infrastructure::dns::{DnsServerHandler, ListenerHandle, UdpListener};
use tokio::task::JoinHandle;
use tracing::info;

/// Binds the UDP listener and runs it on its own task.
pub async fn start_dns_server(
    config: &Config,
    handler: DnsServerHandler,
) -> anyhow::Result<(ListenerHandle, JoinHandle<()>)> {
    let socket_addr = config.server.dns_socket_addr()?;

    info!(bind_address = %socket_addr, "Starting DNS server");

    let listener = UdpListener::bind(socket_addr, &config.listener, handler).await?;
    let handle = listener.handle();

    info!(bind_address = %handle.local_addr(), "DNS server ready");

    let task = tokio::spawn(listener.run());
    Ok((handle, task))
}
