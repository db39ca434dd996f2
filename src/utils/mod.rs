pub mod log_utils;
pub mod url_utils;

pub use log_utils::ActivityLog;
pub use url_utils::{join_url, normalize_base_url};
