//! I/O 錯誤類型

use thiserror::Error;

/// I/O 錯誤類型
#[derive(Error, Debug)]
pub enum IoError {
    // ===== 輸入相關錯誤 =====
    #[error("檔案不存在: {0}")]
    FileNotFound(String),

    #[error("檔案格式不支援: {0}（僅支援 .csv/.xlsx/.xlsm/.xls）")]
    UnsupportedFormat(String),

    #[error("Excel 解析失敗: {0}")]
    ExcelParseError(String),

    #[error("CSV 解析失敗: {0}")]
    CsvParseError(#[from] csv::Error),

    // ===== 輸出相關錯誤 =====
    #[error("無效的輸出名稱: {0}")]
    InvalidDestination(String),

    #[error("寫入 {destination} 失敗: {message}")]
    WriteError {
        destination: String,
        message: String,
    },

    // ===== 設定相關錯誤 =====
    #[error("設定檔格式錯誤: {0}")]
    SettingsFormat(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Cutlist(#[from] cutlist_core::CutlistError),
}
