pub mod cli;
pub mod error;
pub mod k8s;
pub mod server;
pub mod status;

pub use error::{GatewayError, Result};
pub use podstatus_common as common;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
