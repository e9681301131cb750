use clap::Parser;
use roam_dns_api::AppState;
use roam_dns_domain::CliOverrides;
use roam_dns_infrastructure::dns::DnsServerHandler;
use roam_dns_infrastructure::repositories::JsonFileRecordRepository;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "roam-dns")]
#[command(version)]
#[command(about = "Roam DNS - Dynamic DNS server for clients on changing addresses")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Mapping storage file path
    #[arg(long)]
    storage: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        web_port: cli.web_port,
        bind_address: cli.bind.clone(),
        storage_path: cli.storage.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Roam DNS v{}", env!("CARGO_PKG_VERSION"));

    // The one shared resource: both server loops hold the same repository.
    let repository = Arc::new(JsonFileRecordRepository::load(config.storage.path.clone()).await?);

    let use_cases = di::UseCases::new(repository, &config);

    let app_state = AppState {
        update_address: use_cases.update_address,
        list_domains: use_cases.list_domains,
    };

    // Start DNS server in background
    let dns_addr = format!("{}:{}", config.server.bind_address, config.server.dns_port);
    let dns_handler = DnsServerHandler::new(use_cases.resolve_query);

    tokio::spawn(async move {
        if let Err(e) = server::start_dns_server(dns_addr, dns_handler).await {
            error!(error = %e, "DNS server error");
        }
    });

    // Start web server (blocking)
    let web_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.web_port).parse()?;

    server::start_web_server(web_addr, app_state).await?;

    info!("Server shutdown complete");
    Ok(())
}
