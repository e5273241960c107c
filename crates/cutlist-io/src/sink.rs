//! 結果輸出目的地
//!
//! `CsvDirectorySink` 以一個目錄代表一本活頁簿，每個輸出為 `<名稱>.csv`。
//! 寫入先落在同目錄的暫存檔，完成後再改名覆蓋，失敗時不留下半成品。

use chrono::Local;
use cutlist_core::{Cell, Table};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::{IoError, Result};

const EXTENSION: &str = "csv";

/// 結果輸出目的地
pub trait ResultSink {
    /// 是否已有同名輸出
    fn has_destination(&self, name: &str) -> bool;

    /// 刪除輸出（不存在時不報錯）
    fn remove_destination(&mut self, name: &str) -> Result<()>;

    /// 寫入表格（同名時整體替換）
    fn write_table(&mut self, name: &str, table: &Table) -> Result<()>;

    /// 目前所有輸出名稱（排序）
    fn destinations(&self) -> Result<Vec<String>>;
}

/// 以目錄保存 CSV 的輸出目的地
#[derive(Debug, Clone)]
pub struct CsvDirectorySink {
    root: PathBuf,
}

impl CsvDirectorySink {
    /// 打開（必要時建立）輸出目錄
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// 建立帶時間戳的副本，例如 `jobs_cutlist_20250101_093000`，並複製既有輸出
    pub fn copy_to_timestamped<P: AsRef<Path>>(source: P) -> Result<Self> {
        let source = source.as_ref();
        let stem = source
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "output".to_string());
        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        let target = source.with_file_name(format!("{}_cutlist_{}", stem, stamp));

        let sink = Self::open(&target)?;
        if source.is_dir() {
            for entry in fs::read_dir(source)? {
                let path = entry?.path();
                if path.extension().and_then(|e| e.to_str()) == Some(EXTENSION) {
                    if let Some(name) = path.file_name() {
                        fs::copy(&path, target.join(name))?;
                    }
                }
            }
        }

        tracing::info!("寫入副本: {}", target.display());
        Ok(sink)
    }

    /// 輸出目錄
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 輸出檔案路徑
    pub fn path_for(&self, name: &str) -> Result<PathBuf> {
        let trimmed = name.trim();
        if trimmed.is_empty()
            || trimmed.contains(['/', '\\'])
            || trimmed == "."
            || trimmed == ".."
        {
            return Err(IoError::InvalidDestination(name.to_string()));
        }
        Ok(self.root.join(format!("{}.{}", trimmed, EXTENSION)))
    }

    fn render(cell: &Cell) -> String {
        match cell {
            Cell::Number(v) => v.to_string(),
            Cell::Text(s) => s.clone(),
            Cell::Empty => String::new(),
        }
    }

    fn write_error(name: &str, message: impl ToString) -> IoError {
        IoError::WriteError {
            destination: name.to_string(),
            message: message.to_string(),
        }
    }
}

impl ResultSink for CsvDirectorySink {
    fn has_destination(&self, name: &str) -> bool {
        self.path_for(name).map(|p| p.is_file()).unwrap_or(false)
    }

    fn remove_destination(&mut self, name: &str) -> Result<()> {
        let path = self.path_for(name)?;
        if path.is_file() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }

    fn write_table(&mut self, name: &str, table: &Table) -> Result<()> {
        let path = self.path_for(name)?;

        let mut temp = NamedTempFile::new_in(&self.root)?;
        {
            let mut writer = csv::WriterBuilder::new()
                .flexible(true)
                .from_writer(temp.as_file_mut());
            writer.write_record(&table.headers)?;
            for row in &table.rows {
                writer.write_record(row.iter().map(Self::render))?;
            }
            writer.flush().map_err(|e| Self::write_error(name, e))?;
        }
        temp.as_file_mut()
            .sync_all()
            .map_err(|e| Self::write_error(name, e))?;
        temp.persist(&path)
            .map_err(|e| Self::write_error(name, e.error))?;

        tracing::debug!("寫入 {}: {} 列", path.display(), table.len());
        Ok(())
    }

    fn destinations(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem() {
                names.push(stem.to_string_lossy().to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

/// 記憶體中的輸出目的地（測試與嵌入使用）
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub tables: std::collections::BTreeMap<String, Table>,
}

impl ResultSink for MemorySink {
    fn has_destination(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    fn remove_destination(&mut self, name: &str) -> Result<()> {
        self.tables.remove(name);
        Ok(())
    }

    fn write_table(&mut self, name: &str, table: &Table) -> Result<()> {
        self.tables.insert(name.to_string(), table.clone());
        Ok(())
    }

    fn destinations(&self) -> Result<Vec<String>> {
        Ok(self.tables.keys().cloned().collect())
    }
}
