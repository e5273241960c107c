//! # Cutlist I/O
//!
//! 輸入表讀取（CSV / Excel）、結果輸出（原子寫入）與設定持久化

pub mod error;
pub mod reader;
pub mod settings;
pub mod sink;
pub mod writer;

// Re-export 主要類型
pub use error::IoError;
pub use reader::{read_table, CsvTableReader, ExcelTableReader, TableReader};
pub use settings::{default_settings_path, load_settings, save_settings};
pub use sink::{CsvDirectorySink, MemorySink, ResultSink};
pub use writer::{resolve_destination_name, write_grouped_cuts, write_report};

pub type Result<T> = std::result::Result<T, IoError>;
