pub mod errors;
pub mod listener;
pub mod local_records;
pub mod logging;
pub mod resolver;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use listener::ListenerConfig;
pub use local_records::LocalDnsRecord;
pub use logging::{LogFormat, LoggingConfig};
pub use resolver::{ResolverConfig, ResolverMode};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
