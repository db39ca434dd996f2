//! Client for the healthcare virtual-assistant backend, plus the small
//! front-end server that turns each backend answer into an alert.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use config::{ClientConfig, Config};
pub use error::{ConfigError, Failure};
pub use models::{Alert, PatientId};
pub use services::RequestClient;
