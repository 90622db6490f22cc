//! Server configuration
//!
//! Every option is required; there is no default capacity.

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "boundq-server")]
#[command(about = "Bounded integer queue over HTTP", long_about = None)]
#[command(version)]
pub struct ServerConfig {
    /// Host to listen on
    #[arg(long, env = "BOUNDQ_BIND_ADDRESS")]
    pub bind_address: String,

    /// Port to listen on
    #[arg(long, env = "BOUNDQ_BIND_PORT")]
    pub bind_port: u16,

    /// Queue capacity for the lifetime of the process
    #[arg(long, env = "BOUNDQ_CAPACITY", value_parser = clap::value_parser!(u64).range(1..))]
    pub capacity: u64,
}
