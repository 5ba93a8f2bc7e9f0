//! Command Line Interface (CLI) arguments.

use clap::Parser;

/// Medalist command line interface
#[derive(Clone, Debug, Parser)]
pub struct CommandLineArgs {
    /// The IP address on which the server should listen
    #[arg(long, default_value = "0.0.0.0", env = "MEDALIST_HOST")]
    pub host: String,
    /// The port to which the server should bind
    #[arg(long, default_value_t = 8080, env = "MEDALIST_PORT")]
    pub port: u16,
    /// Flag indicating whether HTTPS should be used
    #[arg(long, default_value_t = false, env = "MEDALIST_HTTPS")]
    pub https: bool,
    /// Path to the certificate file to be used for HTTPS encryption
    #[arg(
        long,
        default_value = "~/.config/medalist/certs/cert.pem",
        env = "MEDALIST_CERT_FILE"
    )]
    pub cert_file: String,
    /// Path to the key file to be used for HTTPS encryption
    #[arg(
        long,
        default_value = "~/.config/medalist/certs/key.pem",
        env = "MEDALIST_KEY_FILE"
    )]
    pub key_file: String,
    /// Maximum time in seconds to wait for operations to complete upon receiving `ctrl+c` signal.
    #[arg(long, default_value_t = 60, env = "MEDALIST_SHUTDOWN_TIMEOUT")]
    pub graceful_shutdown_timeout: u64,
    /// Path to the athlete event records table
    #[arg(long, default_value = "athlete_events.csv", env = "MEDALIST_EVENTS_FILE")]
    pub events_file: String,
    /// Path to the NOC to region mapping table
    #[arg(long, default_value = "noc_regions.csv", env = "MEDALIST_REGIONS_FILE")]
    pub regions_file: String,
    /// Origin of the dashboard front end permitted by the CORS policy
    #[arg(
        long,
        default_value = "http://localhost:3000",
        env = "MEDALIST_CORS_ORIGIN"
    )]
    pub cors_origin: String,
}

/// Returns parsed command line arguments.
pub fn parse() -> CommandLineArgs {
    CommandLineArgs::parse()
}
