use std::sync::Arc;

use clap::Parser;
use student_records::config::{init_tracing, ServerConfig};
use student_records::model::StoreBackend;
use student_records::service::{self, StudentService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ServerConfig::parse();
    let store = StoreBackend::connect(&config.database_url)?;
    tracing::info!("connected to {}", config.database_url);

    let service = Arc::new(StudentService::new(store));
    service::serve(service, &config.bind_addr()).await?;

    Ok(())
}
