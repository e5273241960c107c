//! 設定持久化（JSON）
//!
//! 設定檔讀取為盡力而為：檔案不存在或內容損壞時回到預設值，不中斷執行。

use cutlist_core::RunConfig;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::{IoError, Result};

const SETTINGS_DIR: &str = "cutlist";
const SETTINGS_FILE: &str = "settings.json";

/// 預設設定檔路徑
///
/// 優先使用環境變數 `CUTLIST_SETTINGS_PATH`，否則為使用者設定目錄下的
/// `cutlist/settings.json`；取不到設定目錄時退回目前目錄。
pub fn default_settings_path() -> PathBuf {
    if let Ok(path) = std::env::var("CUTLIST_SETTINGS_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    match dirs::config_dir() {
        Some(config_dir) => config_dir.join(SETTINGS_DIR).join(SETTINGS_FILE),
        None => PathBuf::from(SETTINGS_FILE),
    }
}

/// 讀取設定；不存在或無法解析時回傳預設值
pub fn load_settings<P: AsRef<Path>>(path: P) -> RunConfig {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!("設定檔不存在，使用預設值: {}", path.display());
        return RunConfig::default();
    }

    match read_settings(path) {
        Ok(config) => {
            tracing::debug!("已載入設定: {}", path.display());
            config
        }
        Err(e) => {
            tracing::warn!("設定檔無法讀取，使用預設值: {} ({})", path.display(), e);
            RunConfig::default()
        }
    }
}

fn read_settings(path: &Path) -> Result<RunConfig> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// 保存設定（原子寫入）
pub fn save_settings<P: AsRef<Path>>(path: P, config: &RunConfig) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir)?;

    let content = serde_json::to_string_pretty(config)?;
    let mut temp = NamedTempFile::new_in(&dir)?;
    temp.write_all(content.as_bytes())?;
    temp.persist(path).map_err(|e| IoError::WriteError {
        destination: path.display().to_string(),
        message: e.error.to_string(),
    })?;

    tracing::info!("設定已保存: {}", path.display());
    Ok(())
}
