//! Export Command
//!
//! Writes every generated wallet, secrets included, to a pretty-printed
//! JSON file named `stellar-wallets-<unix-millis>.json`.

use crate::error::Result;
use crate::models::*;
use crate::state::DemoState;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// File name for an export taken at `millis`
pub fn export_file_name(millis: i64) -> String {
    format!("stellar-wallets-{}.json", millis)
}

/// Serialize the current wallets into `dir`, returning the written path.
pub async fn write_export(state: &DemoState, dir: &Path) -> Result<PathBuf> {
    let document = state.wallets.export();
    let json = serde_json::to_string_pretty(&document)?;

    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(export_file_name(Utc::now().timestamp_millis()));
    tokio::fs::write(&path, json).await?;

    let count = document.users.len() + usize::from(document.investor.is_some());
    info!("Exported {} wallet(s) to {}", count, path.display());
    Ok(path)
}

/// `export [dir]` handler
pub async fn export_wallets(state: &mut DemoState, dir: Option<&Path>) -> Option<PathBuf> {
    let dir = dir.map(Path::to_path_buf).unwrap_or_else(|| state.config.export_dir.clone());

    match write_export(state, &dir).await {
        Ok(path) => {
            state.notify(Notification::success("Wallets exported successfully!"));
            Some(path)
        }
        Err(e) => {
            error!("Export to {} failed: {}", dir.display(), e);
            state.notify(Notification::error(format!("Export failed: {}", e)));
            None
        }
    }
}
