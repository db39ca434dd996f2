use chrono::Utc;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::{
    fs::{self, OpenOptions},
    io::AsyncWriteExt,
    sync::Mutex,
};

use crate::models::Alert;

/// Append-only operator log, one entry per finished front-end operation:
///
/// ```text
/// 2024-01-01T10:00:00.123Z::schedule ok {"appointment_id":3}
/// -----
/// ```
#[derive(Debug, Clone)]
pub struct ActivityLog {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl ActivityLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn record(&self, operation: &str, alert: &Alert) -> io::Result<()> {
        let timestamp = Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ");
        let status = if alert.ok { "ok" } else { "error" };
        let log_entry = format!(
            "{}::{} {} {}\n-----\n",
            timestamp, operation, status, alert.message
        );

        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .await?;
        file.write_all(log_entry.as_bytes()).await?;
        file.flush().await?;

        Ok(())
    }
}
