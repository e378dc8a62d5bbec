pub mod config;
pub mod errors;
pub mod telemetry;
pub mod types;

pub use config::{AuthConfig, BoardConfig, ServerConfig};
pub use errors::{Result, ServiceError};
pub use telemetry::{init_telemetry, record_counter, record_gauge, record_timing};
pub use types::{now_timestamp, BoardEntry, Claims, Credential, NormalizedEntry};
