pub mod api;
pub mod config;
mod error;
mod logging;
mod query;
mod session;

pub use api::ApiClient;
pub use config::{frontend_config, FrontendConfig};
pub use error::*;
pub use logging::init_logging;
pub use query::*;
pub use session::*;
