use clap::Parser;
use emberdns_domain::config::ResolverMode;
use emberdns_domain::CliOverrides;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "emberdns")]
#[command(version = "0.1.0")]
#[command(about = "EmberDNS - Minimal UDP DNS responder")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Answer policy (static, local)
    #[arg(long)]
    resolver: Option<ResolverMode>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind.clone(),
        resolver_mode: cli.resolver,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting EmberDNS v{}", env!("CARGO_PKG_VERSION"));

    let dns_services = di::DnsServices::new(&config)?;
    let (handle, listener_task) =
        server::start_dns_server(&config, dns_services.handler()).await?;

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");

    handle.stop()?;
    handle.stopped().await;

    if let Err(e) = listener_task.await {
        error!(error = %e, "DNS listener task failed");
    }

    info!("Server shutdown complete");
    Ok(())
}
