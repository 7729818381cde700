//! Process configuration for the server and CLI binaries.
//!
//! Every option can come from a flag or from the environment; flags win.

use clap::{Args, Parser};
use tracing_subscriber::EnvFilter;

/// Settings for `student-server`.
#[derive(Debug, Clone, Parser)]
#[command(name = "student-server", about = "Serve the student records REST API")]
pub struct ServerConfig {
    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// `memory://`, `file://<path>` or a bare path to a JSON store file.
    #[arg(long, env = "DATABASE_URL", default_value = "memory://")]
    pub database_url: String,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Where the client finds the student routes.
#[derive(Debug, Clone, Args)]
pub struct ClientConfig {
    /// Base URL of the student routes.
    #[arg(
        long,
        env = "STUDENT_API_BASE",
        default_value = "http://localhost:5001/api/students"
    )]
    pub api_base: String,
}

/// Install the fmt subscriber, filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
